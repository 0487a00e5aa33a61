use std::fmt;
use std::str::FromStr;

/// Record kinds understood by the resolver wire protocol.
///
/// The wire code occupies bits 6–4 of the kind byte, so only values 0–7
/// are representable; 1 and 2 are assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordKind {
    A,
    TXT,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::A => "A",
            RecordKind::TXT => "TXT",
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            RecordKind::A => 1,
            RecordKind::TXT => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(RecordKind::A),
            2 => Some(RecordKind::TXT),
            _ => None,
        }
    }

    pub fn all() -> [RecordKind; 2] {
        [RecordKind::A, RecordKind::TXT]
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(RecordKind::A),
            "TXT" => Ok(RecordKind::TXT),
            _ => Err(format!("Unknown record type: {}", s)),
        }
    }
}
