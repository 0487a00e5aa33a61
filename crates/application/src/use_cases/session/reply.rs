use fatcat_dns_domain::{Answer, RecordKind, Resolution};
use std::fmt;
use std::net::Ipv4Addr;

/// What the session writes back for one resolution request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionReply {
    Answer {
        kind: RecordKind,
        answer: Answer,
        authoritative: Option<Ipv4Addr>,
        ttl: u32,
    },
    Negative {
        kind: RecordKind,
        ttl: u32,
    },
    Timeout,
    Failed(String),
}

impl From<&Resolution> for SessionReply {
    fn from(resolution: &Resolution) -> Self {
        match resolution.answer {
            Some(ref answer) => SessionReply::Answer {
                kind: resolution.kind,
                answer: answer.clone(),
                authoritative: resolution.delegate(),
                ttl: resolution.ttl,
            },
            None => SessionReply::Negative {
                kind: resolution.kind,
                ttl: resolution.ttl,
            },
        }
    }
}

impl fmt::Display for SessionReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionReply::Answer {
                kind,
                answer,
                authoritative: Some(delegate),
                ttl,
            } => write!(
                f,
                "DNS Response: {}={} Authoritative={} TTL={}",
                kind, answer, delegate, ttl
            ),
            SessionReply::Answer {
                kind,
                answer,
                authoritative: None,
                ttl,
            } => write!(f, "DNS Response: {}={} TTL={}", kind, answer, ttl),
            SessionReply::Negative { kind, ttl } => {
                write!(f, "DNS Response: {}=NXDOMAIN/NODATA TTL={}", kind, ttl)
            }
            SessionReply::Timeout => write!(f, "DNS query TIMEOUT"),
            SessionReply::Failed(reason) => write!(f, "DNS query FAILED: {}", reason),
        }
    }
}
