use crate::dns_record::{Answer, RecordKind, ResponseStatus};
use crate::errors::ValidationError;
use std::net::Ipv4Addr;
use std::sync::Arc;

/// Query fields: used to build outbound packets and to filter inbound ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDescriptor {
    pub transaction_id: u16,
    pub domain: Arc<str>,
    pub kind: RecordKind,
}

impl QueryDescriptor {
    pub fn new(transaction_id: u16, domain: impl Into<Arc<str>>, kind: RecordKind) -> Self {
        Self {
            transaction_id,
            domain: domain.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseDescriptor {
    pub transaction_id: u16,
    pub domain: Arc<str>,
    pub kind: RecordKind,
    pub status: ResponseStatus,
    pub ttl: u32,
    /// Present only when `status` is `NoError`.
    pub answer: Option<Answer>,
    pub delegate: Option<Ipv4Addr>,
}

impl ResponseDescriptor {
    /// True when transaction id, domain and kind all equal the outstanding query.
    ///
    /// This is the only acceptance test applied to inbound responses; the
    /// datagram's network origin is not consulted.
    pub fn matches(&self, query: &QueryDescriptor) -> bool {
        self.transaction_id == query.transaction_id
            && self.kind == query.kind
            && *self.domain == *query.domain
    }

    pub fn query(&self) -> QueryDescriptor {
        QueryDescriptor {
            transaction_id: self.transaction_id,
            domain: self.domain.clone(),
            kind: self.kind,
        }
    }
}

/// Narrows a wider integer to a transaction id.
pub fn validate_transaction_id(raw: u64) -> Result<u16, ValidationError> {
    u16::try_from(raw).map_err(|_| ValidationError::TransactionIdOutOfRange(raw))
}

/// Narrows a wider integer to a wire TTL.
pub fn validate_ttl(raw: u64) -> Result<u32, ValidationError> {
    u32::try_from(raw).map_err(|_| ValidationError::TtlOutOfRange(raw))
}
