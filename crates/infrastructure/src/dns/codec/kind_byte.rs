//! Third header byte: `[direction:1][record kind:3][status:4]`.

use fatcat_dns_domain::{CodecError, RecordKind, ResponseStatus};

const DIRECTION_MASK: u8 = 0b1000_0000;
const KIND_MASK: u8 = 0b0111_0000;
const STATUS_MASK: u8 = 0b0000_1111;
const KIND_SHIFT: u8 = 4;

/// Fixed header length: transaction id (2) + kind byte (1).
pub const HEADER_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Query,
    Response,
}

impl Direction {
    fn bit(self) -> u8 {
        match self {
            Direction::Query => 0,
            Direction::Response => DIRECTION_MASK,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Direction::Query => "query",
            Direction::Response => "response",
        }
    }
}

pub fn pack(direction: Direction, kind: RecordKind, status: Option<ResponseStatus>) -> u8 {
    let status_bits = status.map_or(0, |s| s.code() & STATUS_MASK);
    direction.bit() | (kind.code() << KIND_SHIFT) & KIND_MASK | status_bits
}

/// Decoded fixed header. `status_bits` is raw: queries ignore it.
#[derive(Debug, Clone, Copy)]
pub struct Header {
    pub transaction_id: u16,
    pub kind: RecordKind,
    pub status_bits: u8,
}

pub fn read_header(buf: &[u8], expected: Direction) -> Result<Header, CodecError> {
    if buf.len() < HEADER_LEN {
        return Err(CodecError::Truncated("header"));
    }

    let transaction_id = u16::from_be_bytes([buf[0], buf[1]]);
    let byte = buf[2];

    if byte & DIRECTION_MASK != expected.bit() {
        return Err(CodecError::DirectionMismatch {
            expected: expected.as_str(),
        });
    }

    let kind_code = (byte & KIND_MASK) >> KIND_SHIFT;
    let kind = RecordKind::from_code(kind_code).ok_or(CodecError::UnknownKind(kind_code))?;

    Ok(Header {
        transaction_id,
        kind,
        status_bits: byte & STATUS_MASK,
    })
}

pub fn status_from_bits(bits: u8) -> Result<ResponseStatus, CodecError> {
    ResponseStatus::from_code(bits).ok_or(CodecError::UnknownStatus(bits))
}
