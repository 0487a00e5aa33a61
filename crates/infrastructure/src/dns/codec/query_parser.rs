use super::kind_byte::{self, Direction, HEADER_LEN};
use fatcat_dns_domain::{CodecError, QueryDescriptor};
use std::sync::Arc;

pub struct QueryParser;

impl QueryParser {
    pub fn parse(packet: &[u8]) -> Result<QueryDescriptor, CodecError> {
        let header = kind_byte::read_header(packet, Direction::Query)?;
        let (domain, _) = read_domain(packet, HEADER_LEN)?;

        Ok(QueryDescriptor {
            transaction_id: header.transaction_id,
            domain,
            kind: header.kind,
        })
    }
}

/// Reads the NUL-terminated domain starting at `start`; returns it and the
/// offset just past the terminator.
pub(super) fn read_domain(packet: &[u8], start: usize) -> Result<(Arc<str>, usize), CodecError> {
    let rest = packet.get(start..).unwrap_or_default();
    let end = rest
        .iter()
        .position(|&b| b == 0)
        .ok_or(CodecError::MissingTerminator)?;

    let domain =
        std::str::from_utf8(&rest[..end]).map_err(|_| CodecError::InvalidUtf8("domain"))?;

    Ok((Arc::from(domain), start + end + 1))
}
