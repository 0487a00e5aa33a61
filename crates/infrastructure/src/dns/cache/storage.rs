use super::entry::CacheEntry;
use super::key::CacheKey;
use super::metrics::{CacheMetrics, CacheMetricsSnapshot};
use dashmap::DashMap;
use fatcat_dns_domain::{Answer, RecordKind};
use rustc_hash::FxBuildHasher;
use std::sync::atomic::Ordering as AtomicOrdering;
use tracing::debug;

/// Live cache entry returned by [`AnswerCache::lookup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheHit {
    /// `None` for a cached negative result.
    pub answer: Option<Answer>,
    pub remaining_ttl: u32,
}

impl CacheHit {
    pub fn is_negative(&self) -> bool {
        self.answer.is_none()
    }
}

/// TTL-bounded answers keyed by (domain, kind).
///
/// Expired entries are invisible to `lookup` whether or not they have been
/// swept. Writes are whole-entry overwrites on a sharded map, so concurrent
/// sessions can share one instance behind an `Arc`.
pub struct AnswerCache {
    entries: DashMap<CacheKey, CacheEntry, FxBuildHasher>,
    metrics: CacheMetrics,
}

impl Default for AnswerCache {
    fn default() -> Self {
        Self::new()
    }
}

impl AnswerCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::with_hasher(FxBuildHasher),
            metrics: CacheMetrics::default(),
        }
    }

    pub fn lookup(&self, domain: &str, kind: RecordKind, now: u64) -> Option<CacheHit> {
        let key = CacheKey::new(domain, kind);
        let hit = self.entries.get(&key).and_then(|entry| {
            if entry.is_expired(now) {
                None
            } else {
                Some(CacheHit {
                    answer: entry.answer.clone(),
                    remaining_ttl: entry.remaining_ttl(now),
                })
            }
        });

        let counter = if hit.is_some() {
            &self.metrics.hits
        } else {
            &self.metrics.misses
        };
        counter.fetch_add(1, AtomicOrdering::Relaxed);

        hit
    }

    pub fn insert(&self, domain: &str, kind: RecordKind, answer: Option<Answer>, ttl: u32, now: u64) {
        self.put(CacheKey::new(domain, kind), CacheEntry::new(answer, ttl, now));
    }

    pub fn insert_permanent(&self, domain: &str, kind: RecordKind, answer: Option<Answer>) {
        self.put(CacheKey::new(domain, kind), CacheEntry::permanent(answer));
    }

    fn put(&self, key: CacheKey, entry: CacheEntry) {
        self.entries.insert(key, entry);
        self.metrics.insertions.fetch_add(1, AtomicOrdering::Relaxed);
    }

    /// Drops every entry with `expires_at <= now`; returns how many went.
    pub fn sweep_expired(&self, now: u64) -> usize {
        let mut removed = 0usize;
        self.entries.retain(|_, entry| {
            let keep = !entry.is_expired(now);
            if !keep {
                removed += 1;
            }
            keep
        });

        if removed > 0 {
            self.metrics
                .swept
                .fetch_add(removed as u64, AtomicOrdering::Relaxed);
            debug!(removed, remaining = self.entries.len(), "Swept expired cache entries");
        }

        removed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn metrics(&self) -> CacheMetricsSnapshot {
        self.metrics.snapshot()
    }

    pub fn hit_rate(&self) -> f64 {
        self.metrics.hit_rate()
    }
}
