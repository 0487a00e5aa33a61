//! UDP transport: one ephemeral socket per query.
//!
//! Inbound datagrams are handed up unfiltered. Source addresses are reported
//! but never checked here.

use super::{DatagramSocket, SocketFactory};
use async_trait::async_trait;
use fatcat_dns_domain::config::MAX_DATAGRAM_SIZE;
use fatcat_dns_domain::DomainError;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use tokio::net::UdpSocket;
use tracing::debug;

pub struct UdpSocketFactory {
    bind_address: Ipv4Addr,
    max_datagram_size: usize,
}

impl UdpSocketFactory {
    pub fn new(bind_address: Ipv4Addr, max_datagram_size: usize) -> Self {
        Self {
            bind_address,
            max_datagram_size: max_datagram_size.min(MAX_DATAGRAM_SIZE),
        }
    }
}

#[async_trait]
impl SocketFactory for UdpSocketFactory {
    async fn bind(&self) -> Result<Box<dyn DatagramSocket>, DomainError> {
        // Port 0: the OS assigns an ephemeral port
        let bind_addr = SocketAddr::V4(SocketAddrV4::new(self.bind_address, 0));

        let socket = UdpSocket::bind(bind_addr).await.map_err(|e| {
            DomainError::IoError(format!("Failed to bind UDP socket on {}: {}", bind_addr, e))
        })?;

        Ok(Box::new(UdpDatagramSocket {
            socket,
            max_datagram_size: self.max_datagram_size,
        }))
    }
}

pub struct UdpDatagramSocket {
    socket: UdpSocket,
    max_datagram_size: usize,
}

#[async_trait]
impl DatagramSocket for UdpDatagramSocket {
    fn local_addr(&self) -> Option<SocketAddr> {
        self.socket.local_addr().ok()
    }

    async fn send_to(&self, bytes: &[u8], target: SocketAddr) -> Result<usize, DomainError> {
        let sent = self.socket.send_to(bytes, target).await.map_err(|e| {
            DomainError::IoError(format!("Failed to send UDP query to {}: {}", target, e))
        })?;

        debug!(server = %target, bytes_sent = sent, "UDP query sent");
        Ok(sent)
    }

    async fn recv_from(&self) -> Result<(Vec<u8>, SocketAddr), DomainError> {
        let mut recv_buf = vec![0u8; self.max_datagram_size];

        let (len, from) = self
            .socket
            .recv_from(&mut recv_buf)
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to receive UDP datagram: {}", e)))?;

        recv_buf.truncate(len);
        debug!(from = %from, bytes_received = len, "UDP datagram received");

        Ok((recv_buf, from))
    }
}
