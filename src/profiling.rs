//! Simple profiling counters for understanding hot paths.
//!
//! Counters are process-wide and relaxed; they are shared by every list in
//! the process and are only meant for eyeballing search cost.

use std::sync::atomic::{AtomicU64, Ordering};

pub static DESCENTS: AtomicU64 = AtomicU64::new(0);
pub static DESCENT_STEPS: AtomicU64 = AtomicU64::new(0);
pub static HINT_HITS: AtomicU64 = AtomicU64::new(0);
pub static HINT_MISSES: AtomicU64 = AtomicU64::new(0);
pub static LEVEL_GROWTHS: AtomicU64 = AtomicU64::new(0);

/// Record one top-to-bottom search that moved `steps` times along a level.
#[inline]
pub fn descent(steps: u64) {
    DESCENTS.fetch_add(1, Ordering::Relaxed);
    DESCENT_STEPS.fetch_add(steps, Ordering::Relaxed);
}

#[inline]
pub fn hint_hit() {
    HINT_HITS.fetch_add(1, Ordering::Relaxed);
}

#[inline]
pub fn hint_miss() {
    HINT_MISSES.fetch_add(1, Ordering::Relaxed);
}

#[inline]
pub fn level_growth() {
    LEVEL_GROWTHS.fetch_add(1, Ordering::Relaxed);
}

pub fn reset() {
    DESCENTS.store(0, Ordering::Relaxed);
    DESCENT_STEPS.store(0, Ordering::Relaxed);
    HINT_HITS.store(0, Ordering::Relaxed);
    HINT_MISSES.store(0, Ordering::Relaxed);
    LEVEL_GROWTHS.store(0, Ordering::Relaxed);
}

pub fn report() -> String {
    let descents = DESCENTS.load(Ordering::Relaxed);
    let steps = DESCENT_STEPS.load(Ordering::Relaxed);
    let per_descent = if descents > 0 { steps as f64 / descents as f64 } else { 0.0 };

    let hits = HINT_HITS.load(Ordering::Relaxed);
    let misses = HINT_MISSES.load(Ordering::Relaxed);
    let hinted = hits + misses;
    let hit_rate = if hinted > 0 { hits as f64 / hinted as f64 * 100.0 } else { 0.0 };

    let growths = LEVEL_GROWTHS.load(Ordering::Relaxed);

    format!(
        "Descent: {} ({:.1} steps avg), Hint: {}/{} ({:.1}% hit), Level growth: {}",
        descents, per_descent, hits, hinted, hit_rate, growths
    )
}
