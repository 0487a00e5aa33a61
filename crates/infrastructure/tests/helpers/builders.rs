use fatcat_dns_domain::{Answer, RecordKind, ResponseStatus};
use fatcat_dns_infrastructure::dns::encode_response;
use std::net::Ipv4Addr;

/// Builds raw response datagrams for feeding the engine.
pub struct ResponsePacket {
    transaction_id: u16,
    domain: String,
    kind: RecordKind,
    status: ResponseStatus,
    answer: Option<Answer>,
    ttl: u32,
    delegate: Option<Ipv4Addr>,
}

impl ResponsePacket {
    pub fn new(transaction_id: u16, domain: &str, kind: RecordKind) -> Self {
        Self {
            transaction_id,
            domain: domain.to_string(),
            kind,
            status: ResponseStatus::NoError,
            answer: None,
            ttl: 300,
            delegate: None,
        }
    }

    pub fn address(mut self, addr: &str) -> Self {
        self.answer = Some(Answer::Address(addr.parse().unwrap()));
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.answer = Some(Answer::text(text));
        self
    }

    pub fn status(mut self, status: ResponseStatus) -> Self {
        self.status = status;
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn delegate(mut self, addr: &str) -> Self {
        self.delegate = Some(addr.parse().unwrap());
        self
    }

    pub fn encode(self) -> Vec<u8> {
        encode_response(
            self.transaction_id,
            &self.domain,
            self.kind,
            self.status,
            self.answer,
            self.ttl,
            self.delegate,
        )
        .unwrap()
    }
}
