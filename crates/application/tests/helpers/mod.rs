#![allow(dead_code)]
mod mock_resolver;

pub use mock_resolver::MockDnsResolver;

use fatcat_dns_domain::{Answer, RecordKind, Resolution, ResolutionOrigin, ResponseStatus};
use std::net::Ipv4Addr;

pub fn upstream_resolution(
    domain: &str,
    kind: RecordKind,
    answer: Option<Answer>,
    ttl: u32,
    delegate: Option<Ipv4Addr>,
) -> Resolution {
    let status = if answer.is_some() {
        ResponseStatus::NoError
    } else {
        ResponseStatus::NxDomain
    };
    Resolution {
        domain: domain.into(),
        kind,
        answer,
        ttl,
        origin: ResolutionOrigin::Upstream {
            resolver: Ipv4Addr::new(140, 112, 30, 191),
            status,
            delegate,
        },
    }
}

pub fn cached_resolution(
    domain: &str,
    kind: RecordKind,
    answer: Option<Answer>,
    ttl: u32,
) -> Resolution {
    Resolution {
        domain: domain.into(),
        kind,
        answer,
        ttl,
        origin: ResolutionOrigin::Cache,
    }
}
