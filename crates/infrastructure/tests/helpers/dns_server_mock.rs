use fatcat_dns_domain::QueryDescriptor;
use fatcat_dns_infrastructure::dns::decode_query;
use std::net::SocketAddr;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

type Responder = Box<dyn Fn(&QueryDescriptor) -> Vec<Vec<u8>> + Send + Sync>;

/// Loopback resolver. Every decodable query is answered with the datagrams
/// the responder returns, in order.
pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start<F>(responder: F) -> Result<Self, std::io::Error>
    where
        F: Fn(&QueryDescriptor) -> Vec<Vec<u8>> + Send + Sync + 'static,
    {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;
        let responder: Responder = Box::new(responder);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        let Ok((len, peer)) = result else { continue };
                        let Ok(query) = decode_query(&buf[..len]) else { continue };

                        for datagram in responder(&query) {
                            let _ = socket.send_to(&datagram, peer).await;
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
