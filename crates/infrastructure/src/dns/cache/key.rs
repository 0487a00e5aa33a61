use compact_str::CompactString;
use fatcat_dns_domain::RecordKind;
use std::hash::{Hash, Hasher};

/// Cache key. `domain` is expected to be normalized already.
#[derive(Clone, Debug, Eq)]
pub struct CacheKey {
    pub domain: CompactString,
    pub kind: RecordKind,
}

impl CacheKey {
    #[inline]
    pub fn new(domain: &str, kind: RecordKind) -> Self {
        Self {
            domain: CompactString::from(domain),
            kind,
        }
    }
}

impl Hash for CacheKey {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.domain.as_str().hash(state);
        self.kind.hash(state);
    }
}

impl PartialEq for CacheKey {
    #[inline]
    fn eq(&self, other: &CacheKey) -> bool {
        self.kind == other.kind && self.domain == other.domain
    }
}
