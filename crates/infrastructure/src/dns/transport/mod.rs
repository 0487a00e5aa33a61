pub mod udp;

use async_trait::async_trait;
use fatcat_dns_domain::DomainError;
use std::net::SocketAddr;

pub use udp::UdpSocketFactory;

/// Opens a fresh socket per outbound query.
#[async_trait]
pub trait SocketFactory: Send + Sync {
    async fn bind(&self) -> Result<Box<dyn DatagramSocket>, DomainError>;
}

/// One bound datagram endpoint. `recv_from` must be cancel safe: the engine
/// drops it when the response deadline passes.
#[async_trait]
pub trait DatagramSocket: Send + Sync {
    fn local_addr(&self) -> Option<SocketAddr>;

    async fn send_to(&self, bytes: &[u8], target: SocketAddr) -> Result<usize, DomainError>;

    /// Next inbound datagram and its source, whoever sent it.
    async fn recv_from(&self) -> Result<(Vec<u8>, SocketAddr), DomainError>;
}
