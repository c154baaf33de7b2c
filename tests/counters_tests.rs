// CounterStore concurrency tests

use balancer_status::counters::CounterStore;
use std::sync::Arc;
use std::thread;

#[test]
fn test_snapshot_after_concurrent_increments_is_exact() {
    const THREADS: usize = 8;
    const CONNECTS_PER_THREAD: u64 = 1000;
    const DISCONNECTS_PER_THREAD: u64 = 400;

    let store = Arc::new(CounterStore::new());
    let mut handles = Vec::with_capacity(THREADS);
    for _ in 0..THREADS {
        let store = store.clone();
        handles.push(thread::spawn(move || {
            for _ in 0..CONNECTS_PER_THREAD {
                store.inc_connect();
            }
            for _ in 0..DISCONNECTS_PER_THREAD {
                store.inc_disconnect();
            }
        }));
    }
    for h in handles {
        h.join().unwrap();
    }

    let snapshot = store.snapshot();
    assert_eq!(snapshot.connects, THREADS as u64 * CONNECTS_PER_THREAD);
    assert_eq!(snapshot.disconnects, THREADS as u64 * DISCONNECTS_PER_THREAD);
    assert_eq!(
        snapshot.active_sockets(),
        (THREADS as u64 * (CONNECTS_PER_THREAD - DISCONNECTS_PER_THREAD)) as i64
    );
}

#[test]
fn test_snapshot_races_with_writers_without_tearing() {
    // Snapshots taken mid-flight must observe whole values; each tally is
    // monotonic, so every snapshot field must be <= the final total.
    const TOTAL: u64 = 50_000;
    let store = Arc::new(CounterStore::new());

    let writer = {
        let store = store.clone();
        thread::spawn(move || {
            for _ in 0..TOTAL {
                store.inc_connect();
                store.inc_endpoint_opened();
            }
        })
    };

    let mut last_connects = 0u64;
    while !writer.is_finished() {
        let s = store.snapshot();
        assert!(s.connects >= last_connects, "tally went backwards");
        assert!(s.connects <= TOTAL);
        assert!(s.endpoints_opened <= TOTAL);
        last_connects = s.connects;
    }
    writer.join().unwrap();

    let s = store.snapshot();
    assert_eq!(s.connects, TOTAL);
    assert_eq!(s.endpoints_opened, TOTAL);
    assert_eq!(s.disconnects, 0);
}

#[test]
fn test_active_sockets_is_connects_minus_disconnects() {
    let store = CounterStore::new();
    for _ in 0..5 {
        store.inc_connect();
    }
    for _ in 0..2 {
        store.inc_disconnect();
    }
    assert_eq!(store.snapshot().active_sockets(), 3);
}
