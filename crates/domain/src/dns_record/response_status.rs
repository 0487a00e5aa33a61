use std::fmt;

/// Outcome code carried in the low nibble of a response kind byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseStatus {
    NoError,
    NxDomain,
    NoData,
}

impl ResponseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseStatus::NoError => "NOERROR",
            ResponseStatus::NxDomain => "NXDOMAIN",
            ResponseStatus::NoData => "NODATA",
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            ResponseStatus::NoError => 0,
            ResponseStatus::NxDomain => 1,
            ResponseStatus::NoData => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(ResponseStatus::NoError),
            1 => Some(ResponseStatus::NxDomain),
            2 => Some(ResponseStatus::NoData),
            _ => None,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, ResponseStatus::NoError)
    }

    pub fn all() -> [ResponseStatus; 3] {
        [
            ResponseStatus::NoError,
            ResponseStatus::NxDomain,
            ResponseStatus::NoData,
        ]
    }
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
