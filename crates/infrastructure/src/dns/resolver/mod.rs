pub mod engine;
pub mod selection;
pub mod transaction_id;

pub use engine::{EngineSettings, ResolutionEngine};
pub use selection::select_next_hop;
pub use transaction_id::{FixedTransactionId, RandomTransactionIds, TransactionIdSource};
