use crate::dns_record::{Answer, RecordKind, ResponseStatus};
use std::net::Ipv4Addr;
use std::sync::Arc;

/// Where a resolution result came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOrigin {
    Cache,
    Upstream {
        resolver: Ipv4Addr,
        status: ResponseStatus,
        delegate: Option<Ipv4Addr>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub domain: Arc<str>,
    pub kind: RecordKind,
    /// `None` for a negative (NXDOMAIN/NODATA) result.
    pub answer: Option<Answer>,
    /// Remaining seconds on a cache hit, the response TTL otherwise.
    pub ttl: u32,
    pub origin: ResolutionOrigin,
}

impl Resolution {
    pub fn cache_hit(&self) -> bool {
        matches!(self.origin, ResolutionOrigin::Cache)
    }

    pub fn is_negative(&self) -> bool {
        self.answer.is_none()
    }

    pub fn delegate(&self) -> Option<Ipv4Addr> {
        match self.origin {
            ResolutionOrigin::Upstream { delegate, .. } => delegate,
            ResolutionOrigin::Cache => None,
        }
    }
}
