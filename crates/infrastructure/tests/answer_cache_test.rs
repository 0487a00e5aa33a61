use fatcat_dns_domain::{Answer, RecordKind};
use fatcat_dns_infrastructure::dns::cache::{AnswerCache, Clock, ManualClock};
use std::net::Ipv4Addr;
use std::sync::Arc;

fn addr(a: u8, b: u8, c: u8, d: u8) -> Option<Answer> {
    Some(Answer::Address(Ipv4Addr::new(a, b, c, d)))
}

#[test]
fn test_lookup_reports_remaining_ttl() {
    let cache = AnswerCache::new();
    cache.insert("fatcat.net", RecordKind::TXT, Some(Answer::text("hi")), 300, 1_000);

    let hit = cache.lookup("fatcat.net", RecordKind::TXT, 1_005).unwrap();
    assert_eq!(hit.answer, Some(Answer::text("hi")));
    assert_eq!(hit.remaining_ttl, 295);
}

#[test]
fn test_entry_expires_exactly_at_ttl() {
    let cache = AnswerCache::new();
    let t0 = 50;
    cache.insert("fatcat.net", RecordKind::A, addr(9, 9, 9, 9), 10, t0);

    let before = cache.lookup("fatcat.net", RecordKind::A, t0 + 9).unwrap();
    assert_eq!(before.remaining_ttl, 1);
    assert!(cache.lookup("fatcat.net", RecordKind::A, t0 + 10).is_none());
    assert!(cache.lookup("fatcat.net", RecordKind::A, t0 + 11).is_none());
}

#[test]
fn test_zero_ttl_is_never_visible() {
    let cache = AnswerCache::new();
    cache.insert("fatcat.net", RecordKind::A, addr(1, 1, 1, 1), 0, 10);
    assert!(cache.lookup("fatcat.net", RecordKind::A, 10).is_none());
}

#[test]
fn test_negative_entry_is_a_hit() {
    let cache = AnswerCache::new();
    cache.insert("nope.fatcat.net", RecordKind::TXT, None, 60, 0);

    let hit = cache.lookup("nope.fatcat.net", RecordKind::TXT, 30).unwrap();
    assert!(hit.is_negative());
    assert_eq!(hit.remaining_ttl, 30);
}

#[test]
fn test_kinds_are_separate_entries() {
    let cache = AnswerCache::new();
    cache.insert("fatcat.net", RecordKind::A, addr(1, 2, 3, 4), 60, 0);

    assert!(cache.lookup("fatcat.net", RecordKind::TXT, 0).is_none());
    assert!(cache.lookup("fatcat.net", RecordKind::A, 0).is_some());
}

#[test]
fn test_insert_overwrites() {
    let cache = AnswerCache::new();
    cache.insert("fatcat.net", RecordKind::A, addr(1, 1, 1, 1), 600, 0);
    cache.insert("fatcat.net", RecordKind::A, addr(2, 2, 2, 2), 5, 0);

    let hit = cache.lookup("fatcat.net", RecordKind::A, 1).unwrap();
    assert_eq!(hit.answer, addr(2, 2, 2, 2));
    assert_eq!(hit.remaining_ttl, 4);
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_permanent_entries_never_expire() {
    let cache = AnswerCache::new();
    cache.insert_permanent("nasa.csie.org", RecordKind::A, None);

    let hit = cache.lookup("nasa.csie.org", RecordKind::A, u64::MAX - 1).unwrap();
    assert!(hit.is_negative());
    assert_eq!(hit.remaining_ttl, u32::MAX);
    assert_eq!(cache.sweep_expired(u64::MAX - 1), 0);
}

#[test]
fn test_sweep_removes_only_expired_entries() {
    let cache = AnswerCache::new();
    cache.insert("old.net", RecordKind::A, addr(1, 1, 1, 1), 10, 0);
    cache.insert("older.net", RecordKind::TXT, None, 5, 0);
    cache.insert("fresh.net", RecordKind::A, addr(2, 2, 2, 2), 100, 0);

    let before: Vec<_> = ["old.net", "older.net", "fresh.net"]
        .iter()
        .map(|d| {
            cache
                .lookup(d, RecordKind::A, 10)
                .or_else(|| cache.lookup(d, RecordKind::TXT, 10))
        })
        .collect();

    assert_eq!(cache.sweep_expired(10), 2);
    assert_eq!(cache.len(), 1);

    let after: Vec<_> = ["old.net", "older.net", "fresh.net"]
        .iter()
        .map(|d| {
            cache
                .lookup(d, RecordKind::A, 10)
                .or_else(|| cache.lookup(d, RecordKind::TXT, 10))
        })
        .collect();

    assert_eq!(before, after);
    assert_eq!(cache.metrics().swept, 2);
}

#[test]
fn test_metrics_count_hits_misses_and_insertions() {
    let cache = AnswerCache::new();
    cache.insert("fatcat.net", RecordKind::A, addr(1, 1, 1, 1), 10, 0);
    cache.insert_permanent("nasa.csie.org", RecordKind::A, None);

    cache.lookup("fatcat.net", RecordKind::A, 1);
    cache.lookup("nasa.csie.org", RecordKind::A, 1);
    cache.lookup("missing.net", RecordKind::A, 1);

    let metrics = cache.metrics();
    assert_eq!(metrics.insertions, 2);
    assert_eq!(metrics.hits, 2);
    assert_eq!(metrics.misses, 1);
    assert!((cache.hit_rate() - 200.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_manual_clock_drives_expiry() {
    let clock = ManualClock::new(1_000);
    let cache = AnswerCache::new();
    cache.insert("fatcat.net", RecordKind::A, addr(1, 1, 1, 1), 3, clock.now_secs());

    clock.advance(2);
    assert!(cache.lookup("fatcat.net", RecordKind::A, clock.now_secs()).is_some());

    clock.advance(1);
    assert!(cache.lookup("fatcat.net", RecordKind::A, clock.now_secs()).is_none());
}

#[test]
fn test_manual_clock_set_jumps_both_ways() {
    let clock = ManualClock::new(1_000);
    let cache = AnswerCache::new();
    cache.insert("fatcat.net", RecordKind::A, addr(1, 1, 1, 1), 10, clock.now_secs());

    clock.set(5_000);
    assert!(cache.lookup("fatcat.net", RecordKind::A, clock.now_secs()).is_none());

    clock.set(1_004);
    let hit = cache.lookup("fatcat.net", RecordKind::A, clock.now_secs()).unwrap();
    assert_eq!(hit.remaining_ttl, 6);
}

#[test]
fn test_sweep_count_is_exact_under_concurrent_inserts() {
    let cache = Arc::new(AnswerCache::new());
    for i in 0..500u16 {
        cache.insert(&format!("stale{}.net", i), RecordKind::TXT, None, 1, 0);
    }

    let swept = std::thread::scope(|scope| {
        for worker in 0..4u8 {
            let cache = Arc::clone(&cache);
            scope.spawn(move || {
                for i in 0..200u8 {
                    let domain = format!("live{}.worker{}.net", i, worker);
                    cache.insert(&domain, RecordKind::A, addr(10, worker, 0, i), 600, 100);
                }
            });
        }

        let sweeper = Arc::clone(&cache);
        scope.spawn(move || sweeper.sweep_expired(100)).join().unwrap()
    });

    assert_eq!(swept, 500);
    assert_eq!(cache.metrics().swept, 500);
    assert_eq!(cache.len(), 800);
}

#[test]
fn test_permanent_entry_reports_max_ttl() {
    let cache = AnswerCache::new();
    cache.insert_permanent(
        "nasa.csie.org",
        RecordKind::A,
        addr(140, 112, 30, 191),
    );

    let hit = cache.lookup("nasa.csie.org", RecordKind::A, 1_700_000_000).unwrap();
    assert_eq!(hit.remaining_ttl, u32::MAX);
}

#[test]
fn test_concurrent_writers_do_not_lose_entries() {
    let cache = Arc::new(AnswerCache::new());

    std::thread::scope(|scope| {
        for worker in 0..8u8 {
            let cache = Arc::clone(&cache);
            scope.spawn(move || {
                for i in 0..100u8 {
                    let domain = format!("host{}.worker{}.net", i, worker);
                    cache.insert(&domain, RecordKind::A, addr(10, worker, 0, i), 60, 0);
                }
            });
        }
    });

    assert_eq!(cache.len(), 800);
    let hit = cache.lookup("host42.worker3.net", RecordKind::A, 1).unwrap();
    assert_eq!(hit.answer, addr(10, 3, 0, 42));
}
