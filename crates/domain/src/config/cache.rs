use crate::dns_message::validate_ttl;
use crate::dns_record::{Answer, RecordKind};
use crate::domain_name;
use serde::{Deserialize, Serialize};

/// A cache entry installed at startup.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SeedEntry {
    pub domain: String,

    pub record_type: String,

    /// Absent for a negative (NXDOMAIN/NODATA) entry.
    #[serde(default)]
    pub answer: Option<String>,

    /// Absent for an entry that never expires.
    #[serde(default)]
    pub ttl: Option<u64>,
}

/// A seed after validation, ready to be inserted into the answer cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSeed {
    pub domain: String,
    pub kind: RecordKind,
    pub answer: Option<Answer>,
    pub ttl: Option<u32>,
}

impl SeedEntry {
    pub fn parse(&self) -> Result<ParsedSeed, String> {
        let domain = domain_name::normalize(&self.domain);
        if domain.is_empty() {
            return Err("Seed entry has an empty domain".to_string());
        }

        let kind: RecordKind = self.record_type.parse()?;

        let answer = match self.answer {
            Some(ref value) => Some(Answer::parse(kind, value)?),
            None => None,
        };

        let ttl = match self.ttl {
            Some(raw) => Some(validate_ttl(raw).map_err(|e| e.to_string())?),
            None => None,
        };

        Ok(ParsedSeed {
            domain,
            kind,
            answer,
            ttl,
        })
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    #[serde(default = "default_seeds")]
    pub seeds: Vec<SeedEntry>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            seeds: default_seeds(),
        }
    }
}

fn default_seeds() -> Vec<SeedEntry> {
    vec![SeedEntry {
        domain: "nasa.csie.org".to_string(),
        record_type: "A".to_string(),
        answer: None,
        ttl: None,
    }]
}
