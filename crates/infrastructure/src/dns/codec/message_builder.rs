use super::kind_byte::{self, Direction, HEADER_LEN};
use fatcat_dns_domain::{
    Answer, QueryDescriptor, RecordKind, ResponseDescriptor, ValidationError, MAX_TEXT_LEN,
};

pub struct MessageBuilder;

impl MessageBuilder {
    /// `[tid:2][kind byte][domain][0x00]`
    pub fn build_query(query: &QueryDescriptor) -> Result<Vec<u8>, ValidationError> {
        check_domain(&query.domain)?;

        let mut packet = Vec::with_capacity(HEADER_LEN + query.domain.len() + 1);
        packet.extend_from_slice(&query.transaction_id.to_be_bytes());
        packet.push(kind_byte::pack(Direction::Query, query.kind, None));
        push_domain(&mut packet, &query.domain);
        Ok(packet)
    }

    /// `[tid:2][kind byte][domain][0x00][ttl:4][payload?][delegate:4?]`
    ///
    /// The payload is written only for `NoError`; an answer attached to a
    /// negative response is not encoded.
    pub fn build_response(response: &ResponseDescriptor) -> Result<Vec<u8>, ValidationError> {
        check_domain(&response.domain)?;

        let mut packet = Vec::with_capacity(HEADER_LEN + response.domain.len() + 1 + 4 + 1 + 255 + 4);
        packet.extend_from_slice(&response.transaction_id.to_be_bytes());
        packet.push(kind_byte::pack(
            Direction::Response,
            response.kind,
            Some(response.status),
        ));
        push_domain(&mut packet, &response.domain);
        packet.extend_from_slice(&response.ttl.to_be_bytes());

        if response.status.is_ok() {
            let answer = response
                .answer
                .as_ref()
                .ok_or(ValidationError::MissingAnswer)?;
            push_payload(&mut packet, response.kind, answer)?;
        }

        if let Some(delegate) = response.delegate {
            packet.extend_from_slice(&delegate.octets());
        }

        Ok(packet)
    }
}

fn check_domain(domain: &str) -> Result<(), ValidationError> {
    if domain.as_bytes().contains(&0) {
        return Err(ValidationError::DomainContainsNul);
    }
    Ok(())
}

fn push_domain(packet: &mut Vec<u8>, domain: &str) {
    packet.extend_from_slice(domain.as_bytes());
    packet.push(0);
}

fn push_payload(
    packet: &mut Vec<u8>,
    kind: RecordKind,
    answer: &Answer,
) -> Result<(), ValidationError> {
    match (kind, answer) {
        (RecordKind::A, Answer::Address(addr)) => {
            packet.extend_from_slice(&addr.octets());
        }
        (RecordKind::TXT, Answer::Text(text)) => {
            let bytes = text.as_bytes();
            if bytes.len() > MAX_TEXT_LEN {
                return Err(ValidationError::TextTooLong(bytes.len()));
            }
            packet.push(bytes.len() as u8);
            packet.extend_from_slice(bytes);
        }
        (kind, answer) => {
            return Err(ValidationError::UnsupportedKind {
                kind: kind.as_str(),
                answer: answer.kind().as_str(),
            });
        }
    }
    Ok(())
}
