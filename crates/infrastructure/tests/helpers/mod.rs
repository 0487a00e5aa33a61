#![allow(dead_code)]

mod builders;
mod dns_server_mock;
mod scripted_transport;

pub use builders::ResponsePacket;
pub use dns_server_mock::MockDnsServer;
pub use scripted_transport::{ScriptedSockets, SCRIPTED_LOCAL_ADDR};
