use chrono::{TimeDelta, TimeZone, Utc};
use pretty_assertions::assert_eq;
use std::collections::HashMap;
use wordcount_core::{Timestamp, Window, WindowedCounter};

fn now() -> Timestamp {
    Utc.timestamp_opt(1_700_000_000, 0).unwrap()
}

fn ago(secs: i64) -> Timestamp {
    now() - TimeDelta::seconds(secs)
}

fn expected(pairs: &[(&str, usize)]) -> HashMap<String, usize> {
    pairs
        .iter()
        .map(|(word, count)| (word.to_string(), *count))
        .collect()
}

#[test]
fn sliding_window_drops_old_entries() {
    let mut counter = WindowedCounter::default();
    counter.add("hello", ago(90));
    counter.add("there", ago(80));
    counter.add("world", ago(70));
    counter.add("hello", ago(30));
    counter.add("there", ago(25));
    counter.add("hello", ago(20));
    let _ = counter.render(now());
    counter.add("there", ago(10));
    counter.add("hi", now());

    assert_eq!(
        counter.snapshot(now()).clone(),
        expected(&[("hello", 2), ("there", 2), ("hi", 1)])
    );
    assert_eq!(counter.len_entries(), 5);
}

#[test]
fn ninety_seconds_out_thirty_seconds_in() {
    let mut counter = WindowedCounter::default();
    counter.add("stale", ago(90));
    counter.add("fresh", ago(30));

    assert_eq!(counter.snapshot(now()).clone(), expected(&[("fresh", 1)]));
}

#[test]
fn eviction_is_lazy() {
    let mut counter = WindowedCounter::default();
    counter.add("stale", ago(90));
    counter.add("fresh", now());

    // Nothing has queried the counter yet, so the stale entry is still held.
    assert_eq!(counter.counts().get("stale"), Some(&1));
    assert_eq!(counter.len_entries(), 2);

    counter.snapshot(now());
    assert_eq!(counter.counts().get("stale"), None);
    assert_eq!(counter.len_entries(), 1);
}

#[test]
fn later_snapshot_evicts_more() {
    let mut counter = WindowedCounter::default();
    counter.add("a", ago(50));
    counter.add("b", ago(10));

    assert_eq!(counter.snapshot(now()).len(), 2);
    assert_eq!(
        counter.snapshot(now() + TimeDelta::seconds(20)).clone(),
        expected(&[("b", 1)])
    );
    assert!(counter
        .snapshot(now() + TimeDelta::seconds(120))
        .is_empty());
    assert!(counter.is_empty());
}

#[test]
fn render_uses_snapshot() {
    let mut counter = WindowedCounter::new(Window::from_secs(60));
    counter.add("gone", ago(61));
    assert_eq!(counter.render(now()), "-- no entries --");
}

#[test]
fn reset_starts_counts_from_one() {
    let mut counter = WindowedCounter::default();
    counter.add("hello", ago(3));
    counter.add("hello", ago(2));
    counter.reset();
    counter.add("hello", ago(1));

    assert_eq!(counter.snapshot(now()).clone(), expected(&[("hello", 1)]));
}
