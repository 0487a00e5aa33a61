use thiserror::Error;

/// Reasons an inbound packet is rejected. Never fatal: the packet is dropped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Packet truncated: {0}")]
    Truncated(&'static str),

    #[error("Direction bit mismatch: expected {expected}")]
    DirectionMismatch { expected: &'static str },

    #[error("Unknown record kind {0}")]
    UnknownKind(u8),

    #[error("Unknown response status {0}")]
    UnknownStatus(u8),

    #[error("Missing null terminator after domain")]
    MissingTerminator,

    #[error("Invalid UTF-8 in {0}")]
    InvalidUtf8(&'static str),
}

/// Encode-time range violations: the caller handed the codec bad values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Transaction id {0} outside 0-65535")]
    TransactionIdOutOfRange(u64),

    #[error("TTL {0} does not fit in 32 bits")]
    TtlOutOfRange(u64),

    #[error("TXT payload is {0} bytes, limit is 255")]
    TextTooLong(usize),

    #[error("Domain contains a null byte")]
    DomainContainsNul,

    #[error("NOERROR response without an answer")]
    MissingAnswer,

    #[error("Answer of kind {answer} cannot be encoded for a {kind} query")]
    UnsupportedKind {
        kind: &'static str,
        answer: &'static str,
    },
}

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Unknown record type: {0}")]
    UnknownRecordKind(String),

    #[error("Query timeout")]
    QueryTimeout,

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Malformed packet: {0}")]
    Codec(#[from] CodecError),

    #[error("Invalid packet field: {0}")]
    Validation(#[from] ValidationError),
}
