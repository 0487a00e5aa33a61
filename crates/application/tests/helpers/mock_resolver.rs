use async_trait::async_trait;
use fatcat_dns_application::ports::DnsResolver;
use fatcat_dns_domain::{DnsQuery, DomainError, Resolution};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct MockDnsResolver {
    responses: Arc<Mutex<HashMap<String, Result<Resolution, DomainError>>>>,
    calls: Arc<Mutex<Vec<DnsQuery>>>,
}

impl MockDnsResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(&self, domain: &str, resolution: Resolution) {
        self.responses
            .lock()
            .unwrap()
            .insert(domain.to_string(), Ok(resolution));
    }

    pub fn set_response_error(&self, domain: &str, error: DomainError) {
        self.responses
            .lock()
            .unwrap()
            .insert(domain.to_string(), Err(error));
    }

    pub fn calls(&self) -> Vec<DnsQuery> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DnsResolver for MockDnsResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<Resolution, DomainError> {
        self.calls.lock().unwrap().push(query.clone());
        self.responses
            .lock()
            .unwrap()
            .get(query.domain.as_ref())
            .cloned()
            .unwrap_or(Err(DomainError::QueryTimeout))
    }
}
