pub mod cache;
pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;
pub mod server;

pub use cache::{CacheConfig, ParsedSeed, SeedEntry};
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use resolver::{ResolverConfig, MAX_DATAGRAM_SIZE, MAX_RESPONSE_TIMEOUT_SECS};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
