use fatcat_dns_domain::Answer;

/// Sentinel expiry for entries that never age out.
pub const PERMANENT: u64 = u64::MAX;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// `None` for NXDOMAIN / NODATA.
    pub answer: Option<Answer>,
    pub expires_at_secs: u64,
}

impl CacheEntry {
    pub fn new(answer: Option<Answer>, ttl: u32, now: u64) -> Self {
        Self {
            answer,
            expires_at_secs: now.saturating_add(ttl as u64),
        }
    }

    pub fn permanent(answer: Option<Answer>) -> Self {
        Self {
            answer,
            expires_at_secs: PERMANENT,
        }
    }

    #[inline]
    pub fn is_expired(&self, now: u64) -> bool {
        now >= self.expires_at_secs
    }

    #[inline]
    pub fn is_permanent(&self) -> bool {
        self.expires_at_secs == PERMANENT
    }

    /// Seconds left, floored at 0.
    ///
    /// Permanent entries report `u32::MAX`, the largest TTL the wire and
    /// the session output can carry.
    #[inline]
    pub fn remaining_ttl(&self, now: u64) -> u32 {
        if self.is_permanent() {
            return u32::MAX;
        }
        self.expires_at_secs
            .saturating_sub(now)
            .min(u32::MAX as u64) as u32
    }
}
