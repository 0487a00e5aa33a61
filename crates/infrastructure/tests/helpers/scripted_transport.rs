use async_trait::async_trait;
use fatcat_dns_domain::DomainError;
use fatcat_dns_infrastructure::dns::{DatagramSocket, SocketFactory};
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

pub const SCRIPTED_LOCAL_ADDR: &str = "127.0.0.1:40000";

#[derive(Default)]
struct Script {
    inbound: VecDeque<(Vec<u8>, SocketAddr)>,
    sent: Vec<(Vec<u8>, SocketAddr)>,
    binds: usize,
    fail_bind: bool,
}

/// In-memory transport. Queued datagrams are delivered in order to whichever
/// socket reads next; once the queue is empty reads never complete.
#[derive(Clone, Default)]
pub struct ScriptedSockets {
    script: Arc<Mutex<Script>>,
}

impl ScriptedSockets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_datagram(&self, bytes: Vec<u8>, from: &str) {
        let from: SocketAddr = from.parse().unwrap();
        self.script.lock().unwrap().inbound.push_back((bytes, from));
    }

    pub fn fail_bind(&self) {
        self.script.lock().unwrap().fail_bind = true;
    }

    pub fn sent(&self) -> Vec<(Vec<u8>, SocketAddr)> {
        self.script.lock().unwrap().sent.clone()
    }

    pub fn binds(&self) -> usize {
        self.script.lock().unwrap().binds
    }

    pub fn pending(&self) -> usize {
        self.script.lock().unwrap().inbound.len()
    }
}

#[async_trait]
impl SocketFactory for ScriptedSockets {
    async fn bind(&self) -> Result<Box<dyn DatagramSocket>, DomainError> {
        let mut script = self.script.lock().unwrap();
        if script.fail_bind {
            return Err(DomainError::IoError("bind refused".into()));
        }
        script.binds += 1;

        Ok(Box::new(ScriptedSocket {
            script: self.script.clone(),
        }))
    }
}

struct ScriptedSocket {
    script: Arc<Mutex<Script>>,
}

#[async_trait]
impl DatagramSocket for ScriptedSocket {
    fn local_addr(&self) -> Option<SocketAddr> {
        SCRIPTED_LOCAL_ADDR.parse().ok()
    }

    async fn send_to(&self, bytes: &[u8], target: SocketAddr) -> Result<usize, DomainError> {
        self.script
            .lock()
            .unwrap()
            .sent
            .push((bytes.to_vec(), target));
        Ok(bytes.len())
    }

    async fn recv_from(&self) -> Result<(Vec<u8>, SocketAddr), DomainError> {
        let next = self.script.lock().unwrap().inbound.pop_front();
        match next {
            Some(datagram) => Ok(datagram),
            None => std::future::pending().await,
        }
    }
}
