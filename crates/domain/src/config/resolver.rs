use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;
use std::time::Duration;

/// Longest accepted wait for an upstream response.
pub const MAX_RESPONSE_TIMEOUT_SECS: u64 = 3600;

/// Largest UDP payload; receive buffers never need more.
pub const MAX_DATAGRAM_SIZE: usize = 65_535;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    #[serde(default = "default_resolver")]
    pub default_resolver: Ipv4Addr,

    #[serde(default = "default_service_port")]
    pub service_port: u16,

    #[serde(default = "default_response_timeout_secs")]
    pub response_timeout_secs: u64,

    /// Transaction ids are drawn uniformly from `0..transaction_id_space`.
    #[serde(default = "default_transaction_id_space")]
    pub transaction_id_space: u32,

    #[serde(default = "default_bind_address")]
    pub bind_address: Ipv4Addr,

    #[serde(default = "default_max_datagram_size")]
    pub max_datagram_size: usize,
}

impl ResolverConfig {
    pub fn response_timeout(&self) -> Duration {
        Duration::from_secs(self.response_timeout_secs.min(MAX_RESPONSE_TIMEOUT_SECS))
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            default_resolver: default_resolver(),
            service_port: default_service_port(),
            response_timeout_secs: default_response_timeout_secs(),
            transaction_id_space: default_transaction_id_space(),
            bind_address: default_bind_address(),
            max_datagram_size: default_max_datagram_size(),
        }
    }
}

fn default_resolver() -> Ipv4Addr {
    Ipv4Addr::new(140, 112, 30, 191)
}

fn default_service_port() -> u16 {
    53053
}

fn default_response_timeout_secs() -> u64 {
    4
}

fn default_transaction_id_space() -> u32 {
    256
}

fn default_bind_address() -> Ipv4Addr {
    Ipv4Addr::UNSPECIFIED
}

fn default_max_datagram_size() -> usize {
    512
}
