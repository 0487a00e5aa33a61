use crate::dns::cache::AnswerCache;
use fatcat_dns_domain::domain_name::apex_of;
use fatcat_dns_domain::RecordKind;
use std::net::Ipv4Addr;

/// Picks the resolver for `domain`: the live positive A entry of its apex if
/// one is cached, otherwise `default`.
pub fn select_next_hop(
    cache: &AnswerCache,
    domain: &str,
    now: u64,
    default: Ipv4Addr,
) -> Ipv4Addr {
    apex_of(domain)
        .and_then(|apex| cache.lookup(apex, RecordKind::A, now))
        .and_then(|hit| hit.answer)
        .and_then(|answer| answer.as_address())
        .unwrap_or(default)
}
