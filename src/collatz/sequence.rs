//! Collatz walk math and the canvas layout derived from it. No wasm types so
//! the whole module tests natively.

/// Hard cap on sequence growth past the starting value.
pub const MAX_STEPS: usize = 1000;
/// Milliseconds between revealing consecutive nodes during animation.
pub const STEP_INTERVAL_MS: f64 = 300.0;
/// Largest starting number the page accepts.
pub const MAX_START: u64 = 10_000;
/// Starts with long or spiky trajectories, offered as quick picks.
pub const INTERESTING_STARTS: [u64; 8] = [27, 31, 41, 47, 71, 97, 871, 6171];

/// The 3n+1 walk from `n` down to 1, inclusive on both ends: halve when even,
/// triple-plus-one when odd. Capped at [`MAX_STEPS`] values past the start.
/// `n = 0` yields an empty sequence (the walk never reaches 1 from there).
pub fn collatz_sequence(n: u64) -> Vec<u64> {
    if n == 0 {
        return Vec::new();
    }
    let mut seq = vec![n];
    let mut current = n;
    let mut remaining = MAX_STEPS;
    while current != 1 && remaining > 0 {
        current = if current % 2 == 0 {
            current / 2
        } else {
            3 * current + 1
        };
        seq.push(current);
        remaining -= 1;
    }
    seq
}

/// Step count and peak value of a walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SequenceStats {
    pub steps: usize,
    pub max_value: u64,
}

pub fn sequence_stats(seq: &[u64]) -> SequenceStats {
    SequenceStats {
        steps: seq.len().saturating_sub(1),
        max_value: seq.iter().copied().max().unwrap_or(0),
    }
}

/// A sequence value placed on the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutNode {
    pub value: u64,
    pub x: f64,
    pub y: f64,
}

/// Place walk values left to right by sequence progress and vertically by
/// log-scaled value, larger values sitting higher. A single-value sequence
/// centers horizontally; a peak of 1 pins everything to the baseline.
pub fn layout_nodes(seq: &[u64], width: f64, height: f64, padding: f64) -> Vec<LayoutNode> {
    let max_w = width - padding * 2.0;
    let max_h = height - padding * 2.0;
    let max_value = seq.iter().copied().max().unwrap_or(0);
    let log_max = if max_value > 1 {
        (max_value as f64).ln()
    } else {
        0.0
    };

    seq.iter()
        .enumerate()
        .map(|(i, &value)| {
            let x_progress = if seq.len() > 1 {
                i as f64 / (seq.len() - 1) as f64
            } else {
                0.5
            };
            let normalized = if log_max > 0.0 {
                (value.max(1) as f64).ln() / log_max
            } else {
                0.0
            };
            LayoutNode {
                value,
                x: padding + x_progress * max_w,
                y: padding + (1.0 - normalized) * max_h,
            }
        })
        .collect()
}
