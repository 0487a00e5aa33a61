use super::kind_byte::{self, Direction, HEADER_LEN};
use super::query_parser::read_domain;
use fatcat_dns_domain::{
    Answer, CodecError, RecordKind, ResponseDescriptor, ResponseStatus,
};
use std::net::Ipv4Addr;
use tracing::trace;

const TTL_LEN: usize = 4;
const ADDR_LEN: usize = 4;

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(packet: &[u8]) -> Result<ResponseDescriptor, CodecError> {
        let header = kind_byte::read_header(packet, Direction::Response)?;
        let status = kind_byte::status_from_bits(header.status_bits)?;
        let (domain, mut pos) = read_domain(packet, HEADER_LEN)?;

        let ttl_bytes = take(packet, pos, TTL_LEN, "ttl")?;
        let ttl = u32::from_be_bytes([ttl_bytes[0], ttl_bytes[1], ttl_bytes[2], ttl_bytes[3]]);
        pos += TTL_LEN;

        let answer = if status == ResponseStatus::NoError {
            let (answer, next) = read_payload(packet, pos, header.kind)?;
            pos = next;
            Some(answer)
        } else {
            None
        };

        // Only an exact 4-byte tail is a delegate address.
        let delegate = match packet.len() - pos {
            ADDR_LEN => Some(read_addr(&packet[pos..])),
            0 => None,
            extra => {
                trace!(extra, "Ignoring trailing bytes after response payload");
                None
            }
        };

        Ok(ResponseDescriptor {
            transaction_id: header.transaction_id,
            domain,
            kind: header.kind,
            status,
            ttl,
            answer,
            delegate,
        })
    }
}

fn take<'a>(
    packet: &'a [u8],
    pos: usize,
    len: usize,
    what: &'static str,
) -> Result<&'a [u8], CodecError> {
    packet
        .get(pos..pos + len)
        .ok_or(CodecError::Truncated(what))
}

fn read_addr(bytes: &[u8]) -> Ipv4Addr {
    Ipv4Addr::new(bytes[0], bytes[1], bytes[2], bytes[3])
}

fn read_payload(
    packet: &[u8],
    pos: usize,
    kind: RecordKind,
) -> Result<(Answer, usize), CodecError> {
    match kind {
        RecordKind::A => {
            let bytes = take(packet, pos, ADDR_LEN, "address payload")?;
            Ok((Answer::Address(read_addr(bytes)), pos + ADDR_LEN))
        }
        RecordKind::TXT => {
            let len = take(packet, pos, 1, "text length")?[0] as usize;
            let bytes = take(packet, pos + 1, len, "text payload")?;
            let text =
                std::str::from_utf8(bytes).map_err(|_| CodecError::InvalidUtf8("text payload"))?;
            Ok((Answer::text(text), pos + 1 + len))
        }
    }
}
