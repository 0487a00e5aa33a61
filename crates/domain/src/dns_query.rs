use crate::dns_record::RecordKind;
use crate::domain_name;
use std::sync::Arc;

/// A resolution request: a normalized domain and the record kind wanted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub kind: RecordKind,
}

impl DnsQuery {
    pub fn new(domain: &str, kind: RecordKind) -> Self {
        Self {
            domain: domain_name::normalize(domain).into(),
            kind,
        }
    }
}
