#![allow(dead_code)]
use fatcat_dns_domain::{Answer, RecordKind, ResponseDescriptor, ResponseStatus};
use std::net::Ipv4Addr;
use std::sync::Arc;

pub struct ResponseBuilder {
    transaction_id: u16,
    domain: Arc<str>,
    kind: RecordKind,
    status: ResponseStatus,
    ttl: u32,
    answer: Option<Answer>,
    delegate: Option<Ipv4Addr>,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self {
            transaction_id: 42,
            domain: "site.test".into(),
            kind: RecordKind::A,
            status: ResponseStatus::NoError,
            ttl: 60,
            answer: Some(Answer::Address(Ipv4Addr::new(9, 9, 9, 9))),
            delegate: None,
        }
    }

    pub fn transaction_id(mut self, tid: u16) -> Self {
        self.transaction_id = tid;
        self
    }

    pub fn domain(mut self, domain: &str) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.kind = RecordKind::TXT;
        self.answer = Some(Answer::text(text));
        self
    }

    pub fn negative(mut self, status: ResponseStatus) -> Self {
        self.status = status;
        self.answer = None;
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn delegate(mut self, delegate: Ipv4Addr) -> Self {
        self.delegate = Some(delegate);
        self
    }

    pub fn build(self) -> ResponseDescriptor {
        ResponseDescriptor {
            transaction_id: self.transaction_id,
            domain: self.domain,
            kind: self.kind,
            status: self.status,
            ttl: self.ttl,
            answer: self.answer,
            delegate: self.delegate,
        }
    }
}

impl Default for ResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}
