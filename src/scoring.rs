//! Neuron-loss scoring model.
//!
//! An untreated stroke destroys roughly 31,666 neurons per second out of a pool of
//! 19 million that can still be saved. The pool is exhausted a little after 600 seconds
//! (19_000_000 / 31_666 = 600.0126), so `neurons_saved(600.0)` still leaves 400.

pub const MAX_NEURONS: u64 = 19_000_000;
pub const NEURONS_LOST_PER_SECOND: u64 = 31_666;

/// Neurons still saveable after `reaction_secs` seconds. Negative or NaN input counts as 0s.
pub fn neurons_saved(reaction_secs: f64) -> f64 {
    let t = reaction_secs.max(0.0);
    let max = MAX_NEURONS as f64;
    let lost = (t * NEURONS_LOST_PER_SECOND as f64).min(max);
    (max - lost).max(0.0)
}

/// Whole-second variant used by the round timer.
pub fn neurons_saved_whole(secs: u32) -> u64 {
    let lost = (secs as u64)
        .saturating_mul(NEURONS_LOST_PER_SECOND)
        .min(MAX_NEURONS);
    MAX_NEURONS - lost
}
