//! Binary codec for the resolver wire protocol.
//!
//! ```text
//! Query:    [tid:u16 BE][0,kind:3,0000][domain utf8][0x00]
//! Response: [tid:u16 BE][1,kind:3,status:4][domain utf8][0x00][ttl:u32 BE][payload?][delegate:4?]
//! ```
//!
//! The payload is present only for NOERROR: 4 address bytes for A,
//! `[len:u8][utf8]` for TXT.

mod kind_byte;
pub mod message_builder;
pub mod query_parser;
pub mod response_parser;

pub use kind_byte::HEADER_LEN;
pub use message_builder::MessageBuilder;
pub use query_parser::QueryParser;
pub use response_parser::ResponseParser;

use fatcat_dns_domain::{
    Answer, CodecError, QueryDescriptor, RecordKind, ResponseDescriptor, ResponseStatus,
    ValidationError,
};
use std::net::Ipv4Addr;

pub use fatcat_dns_domain::{validate_transaction_id, validate_ttl};

pub fn encode_query(
    transaction_id: u16,
    domain: &str,
    kind: RecordKind,
) -> Result<Vec<u8>, ValidationError> {
    MessageBuilder::build_query(&QueryDescriptor::new(transaction_id, domain, kind))
}

pub fn encode_response(
    transaction_id: u16,
    domain: &str,
    kind: RecordKind,
    status: ResponseStatus,
    answer: Option<Answer>,
    ttl: u32,
    delegate: Option<Ipv4Addr>,
) -> Result<Vec<u8>, ValidationError> {
    MessageBuilder::build_response(&ResponseDescriptor {
        transaction_id,
        domain: domain.into(),
        kind,
        status,
        ttl,
        answer,
        delegate,
    })
}

pub fn decode_query(packet: &[u8]) -> Result<QueryDescriptor, CodecError> {
    QueryParser::parse(packet)
}

pub fn decode_response(packet: &[u8]) -> Result<ResponseDescriptor, CodecError> {
    ResponseParser::parse(packet)
}
