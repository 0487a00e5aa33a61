use super::selection::select_next_hop;
use super::transaction_id::TransactionIdSource;
use crate::dns::cache::{AnswerCache, Clock};
use crate::dns::codec::{MessageBuilder, ResponseParser};
use crate::dns::transport::{DatagramSocket, SocketFactory};
use async_trait::async_trait;
use fatcat_dns_application::ports::DnsResolver;
use fatcat_dns_domain::config::{ResolverConfig, MAX_RESPONSE_TIMEOUT_SECS};
use fatcat_dns_domain::domain_name::apex_of;
use fatcat_dns_domain::{
    Answer, DnsQuery, DomainError, QueryDescriptor, RecordKind, Resolution, ResolutionOrigin,
    ResponseDescriptor,
};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct EngineSettings {
    pub default_resolver: Ipv4Addr,
    pub service_port: u16,
    pub response_timeout: Duration,
}

impl From<&ResolverConfig> for EngineSettings {
    fn from(config: &ResolverConfig) -> Self {
        Self {
            default_resolver: config.default_resolver,
            service_port: config.service_port,
            response_timeout: config.response_timeout(),
        }
    }
}

/// Cache-first resolver that forwards misses over datagrams.
///
/// The first decodable response whose transaction id, domain and kind match
/// the outstanding query is accepted, whichever address it came from.
pub struct ResolutionEngine {
    cache: Arc<AnswerCache>,
    clock: Arc<dyn Clock>,
    sockets: Arc<dyn SocketFactory>,
    ids: Arc<dyn TransactionIdSource>,
    settings: EngineSettings,
}

impl ResolutionEngine {
    pub fn new(
        cache: Arc<AnswerCache>,
        clock: Arc<dyn Clock>,
        sockets: Arc<dyn SocketFactory>,
        ids: Arc<dyn TransactionIdSource>,
        settings: EngineSettings,
    ) -> Self {
        info!(
            default_resolver = %settings.default_resolver,
            service_port = settings.service_port,
            timeout_ms = settings.response_timeout.as_millis() as u64,
            "Resolution engine created"
        );

        Self {
            cache,
            clock,
            sockets,
            ids,
            settings,
        }
    }

    pub fn cache(&self) -> &Arc<AnswerCache> {
        &self.cache
    }

    async fn query_upstream(
        &self,
        query: &DnsQuery,
        resolver: Ipv4Addr,
    ) -> Result<ResponseDescriptor, DomainError> {
        let outbound =
            QueryDescriptor::new(self.ids.next_id(), query.domain.clone(), query.kind);
        let packet = MessageBuilder::build_query(&outbound)?;

        let socket = self.sockets.bind().await?;
        let target = SocketAddr::from((resolver, self.settings.service_port));

        // Deadline covers the send too
        let timeout = self
            .settings
            .response_timeout
            .min(Duration::from_secs(MAX_RESPONSE_TIMEOUT_SECS));
        let deadline = Instant::now() + timeout;
        socket.send_to(&packet, target).await?;

        info!(
            domain = %query.domain,
            record_type = %query.kind,
            resolver = %resolver,
            source_port = ?socket.local_addr().map(|a| a.port()),
            transaction_id = outbound.transaction_id,
            "Querying upstream resolver"
        );

        await_match(socket.as_ref(), &outbound, deadline).await
    }

    fn record(&self, response: &ResponseDescriptor) {
        let now = self.clock.now_secs();

        if !response.status.is_ok() {
            self.cache
                .insert(&response.domain, response.kind, None, response.ttl, now);
            return;
        }

        self.cache.insert(
            &response.domain,
            response.kind,
            response.answer.clone(),
            response.ttl,
            now,
        );

        if let (Some(delegate), Some(apex)) = (response.delegate, apex_of(&response.domain)) {
            debug!(apex, delegate = %delegate, ttl = response.ttl, "Caching delegate for apex");
            self.cache.insert(
                apex,
                RecordKind::A,
                Some(Answer::Address(delegate)),
                response.ttl,
                now,
            );
        }
    }
}

/// Reads datagrams until one matches `expected` or `deadline` passes.
///
/// Undecodable and non-matching datagrams are dropped; nothing past the
/// match is read.
async fn await_match(
    socket: &dyn DatagramSocket,
    expected: &QueryDescriptor,
    deadline: Instant,
) -> Result<ResponseDescriptor, DomainError> {
    loop {
        let (bytes, from) = match tokio::time::timeout_at(deadline, socket.recv_from()).await {
            Ok(received) => received?,
            Err(_) => {
                debug!(
                    domain = %expected.domain,
                    transaction_id = expected.transaction_id,
                    "Response deadline passed"
                );
                return Err(DomainError::QueryTimeout);
            }
        };

        match ResponseParser::parse(&bytes) {
            Ok(response) if response.matches(expected) => {
                debug!(from = %from, status = %response.status, "Accepted matching response");
                return Ok(response);
            }
            Ok(response) => {
                debug!(
                    from = %from,
                    transaction_id = response.transaction_id,
                    domain = %response.domain,
                    record_type = %response.kind,
                    "Ignoring non-matching response"
                );
            }
            Err(e) => {
                warn!(from = %from, error = %e, len = bytes.len(), "Discarding malformed datagram");
            }
        }
    }
}

#[async_trait]
impl DnsResolver for ResolutionEngine {
    async fn resolve(&self, query: &DnsQuery) -> Result<Resolution, DomainError> {
        let now = self.clock.now_secs();
        self.cache.sweep_expired(now);

        if let Some(hit) = self.cache.lookup(&query.domain, query.kind, now) {
            debug!(
                domain = %query.domain,
                record_type = %query.kind,
                remaining_ttl = hit.remaining_ttl,
                negative = hit.is_negative(),
                "Cache hit"
            );
            return Ok(Resolution {
                domain: query.domain.clone(),
                kind: query.kind,
                answer: hit.answer,
                ttl: hit.remaining_ttl,
                origin: ResolutionOrigin::Cache,
            });
        }

        let resolver = select_next_hop(
            &self.cache,
            &query.domain,
            now,
            self.settings.default_resolver,
        );

        let response = self.query_upstream(query, resolver).await?;
        self.record(&response);

        let delegate = response.delegate.filter(|_| response.status.is_ok());

        info!(
            domain = %query.domain,
            record_type = %query.kind,
            status = %response.status,
            ttl = response.ttl,
            resolver = %resolver,
            "Resolved upstream"
        );

        Ok(Resolution {
            domain: response.domain,
            kind: response.kind,
            answer: response.answer,
            ttl: response.ttl,
            origin: ResolutionOrigin::Upstream {
                resolver,
                status: response.status,
                delegate,
            },
        })
    }
}
