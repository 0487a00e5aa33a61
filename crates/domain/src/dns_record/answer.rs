use super::RecordKind;
use std::fmt;
use std::net::Ipv4Addr;
use std::sync::Arc;

/// Maximum TEXT payload length; the wire length prefix is a single byte.
pub const MAX_TEXT_LEN: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Answer {
    Address(Ipv4Addr),
    Text(Arc<str>),
}

impl Answer {
    pub fn text(value: impl Into<Arc<str>>) -> Self {
        Answer::Text(value.into())
    }

    pub fn kind(&self) -> RecordKind {
        match self {
            Answer::Address(_) => RecordKind::A,
            Answer::Text(_) => RecordKind::TXT,
        }
    }

    pub fn as_address(&self) -> Option<Ipv4Addr> {
        match self {
            Answer::Address(addr) => Some(*addr),
            Answer::Text(_) => None,
        }
    }

    /// Parses a textual answer of the given kind (dotted quad for A).
    pub fn parse(kind: RecordKind, value: &str) -> Result<Self, String> {
        match kind {
            RecordKind::A => value
                .parse::<Ipv4Addr>()
                .map(Answer::Address)
                .map_err(|e| format!("Invalid IPv4 address '{}': {}", value, e)),
            RecordKind::TXT => {
                if value.len() > MAX_TEXT_LEN {
                    return Err(format!(
                        "TXT answer is {} bytes, limit is {}",
                        value.len(),
                        MAX_TEXT_LEN
                    ));
                }
                Ok(Answer::text(value))
            }
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Address(addr) => write!(f, "{}", addr),
            Answer::Text(text) => write!(f, "{}", text),
        }
    }
}
