//! Fatcat DNS Domain Layer
pub mod config;
pub mod dns_message;
pub mod dns_query;
pub mod dns_record;
pub mod domain_name;
pub mod errors;
pub mod resolution;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_message::{
    validate_transaction_id, validate_ttl, QueryDescriptor, ResponseDescriptor,
};
pub use dns_query::DnsQuery;
pub use dns_record::{Answer, RecordKind, ResponseStatus, MAX_TEXT_LEN};
pub use errors::{CodecError, DomainError, ValidationError};
pub use resolution::{Resolution, ResolutionOrigin};
