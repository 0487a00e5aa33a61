use async_trait::async_trait;
use fatcat_dns_domain::{DnsQuery, DomainError, Resolution};

#[async_trait]
pub trait DnsResolver: Send + Sync {
    /// Resolves `query`, from cache when a live entry exists.
    ///
    /// Returns `DomainError::QueryTimeout` when no matching response arrives
    /// in time; a negative answer is an `Ok` resolution with no answer.
    async fn resolve(&self, query: &DnsQuery) -> Result<Resolution, DomainError>;
}
