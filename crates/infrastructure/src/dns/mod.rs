pub mod cache;
pub mod codec;
pub mod resolver;
pub mod transport;

pub use cache::{AnswerCache, CacheHit, CacheKey, CacheMetricsSnapshot, Clock, ManualClock, SystemClock};
pub use codec::{decode_query, decode_response, encode_query, encode_response};
pub use resolver::{
    EngineSettings, FixedTransactionId, RandomTransactionIds, ResolutionEngine,
    TransactionIdSource,
};
pub use transport::{DatagramSocket, SocketFactory, UdpSocketFactory};
