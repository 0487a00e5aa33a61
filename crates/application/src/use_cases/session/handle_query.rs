use super::SessionReply;
use crate::ports::DnsResolver;
use fatcat_dns_domain::{DnsQuery, DomainError};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

pub struct HandleQueryUseCase {
    resolver: Arc<dyn DnsResolver>,
}

impl HandleQueryUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self { resolver }
    }

    pub async fn execute(&self, query: &DnsQuery) -> SessionReply {
        let start = Instant::now();

        match self.resolver.resolve(query).await {
            Ok(resolution) => {
                info!(
                    domain = %query.domain,
                    record_type = %query.kind,
                    cache_hit = resolution.cache_hit(),
                    negative = resolution.is_negative(),
                    ttl = resolution.ttl,
                    elapsed_us = start.elapsed().as_micros() as u64,
                    "Query answered"
                );
                SessionReply::from(&resolution)
            }
            Err(DomainError::QueryTimeout) => {
                warn!(
                    domain = %query.domain,
                    record_type = %query.kind,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Query timed out"
                );
                SessionReply::Timeout
            }
            Err(e) => {
                warn!(
                    domain = %query.domain,
                    record_type = %query.kind,
                    error = %e,
                    "Query failed"
                );
                SessionReply::Failed(e.to_string())
            }
        }
    }
}
