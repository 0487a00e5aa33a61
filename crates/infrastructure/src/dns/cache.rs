//! In-memory answer cache with lazy expiry and an injected clock.

pub mod clock;
pub mod entry;
pub mod key;
pub mod metrics;
pub mod storage;

pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::{CacheEntry, PERMANENT};
pub use key::CacheKey;
pub use metrics::{CacheMetrics, CacheMetricsSnapshot};
pub use storage::{AnswerCache, CacheHit};
