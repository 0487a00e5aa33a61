use fatcat_dns_domain::{DnsQuery, RecordKind};
use std::fmt;

/// One parsed line of the session protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Resolve(DnsQuery),
    /// Blank line: the client is done.
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    InvalidInput,
    UnknownRecordType,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::InvalidInput => write!(f, "Invalid input!"),
            CommandError::UnknownRecordType => write!(f, "Unknown record type"),
        }
    }
}

impl SessionCommand {
    /// Parses `"<domain> <A|TXT>"`.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(SessionCommand::End);
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let [domain, record_type] = parts.as_slice() else {
            return Err(CommandError::InvalidInput);
        };

        let kind: RecordKind = record_type
            .parse()
            .map_err(|_| CommandError::UnknownRecordType)?;

        let query = DnsQuery::new(domain, kind);
        if query.domain.is_empty() {
            return Err(CommandError::InvalidInput);
        }

        Ok(SessionCommand::Resolve(query))
    }
}
