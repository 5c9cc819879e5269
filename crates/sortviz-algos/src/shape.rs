//! Fresh-array layouts.
//!
//! Values live on a 0–100 scale so a bar's height in percent is its value.
//! Generation is deterministic for a given RNG state; [`seeded_array`]
//! uses a `ChaCha8Rng` seeded from a `u64`, producing identical arrays for
//! identical seeds on every platform.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sortviz_core::{ArrayShape, Value};

/// Smallest value the random shape produces.
pub const MIN_RANDOM_VALUE: Value = 5;

/// Top of the value scale.
pub const MAX_VALUE: Value = 100;

/// Probability that a nearly-sorted element is perturbed.
const PERTURB_PROBABILITY: f64 = 0.05;

/// Amplitude of a nearly-sorted perturbation, before rounding.
const PERTURB_AMPLITUDE: f64 = 15.0;

/// Build an array of `len` values laid out as `shape`.
///
/// - `Random`: each value uniform in `5..=100`.
/// - `Reversed`: `round((len - i) * 100 / len)`, never increasing.
/// - `NearlySorted`: `round((i + 1) * 100 / len)`, with one element in
///   twenty shifted by `-7..=7`, never below 1.
///
/// Rounding takes halves upward, so an offset of -7.5 becomes -7.
pub fn generate_array<R: Rng>(shape: ArrayShape, len: usize, rng: &mut R) -> Vec<Value> {
    let step = if len == 0 {
        0.0
    } else {
        f64::from(MAX_VALUE) / len as f64
    };
    (0..len)
        .map(|i| match shape {
            ArrayShape::Random => rng.random_range(MIN_RANDOM_VALUE..=MAX_VALUE),
            ArrayShape::Reversed => round_half_up((len - i) as f64 * step) as Value,
            ArrayShape::NearlySorted => {
                let base = round_half_up((i + 1) as f64 * step);
                let offset = if rng.random_bool(PERTURB_PROBABILITY) {
                    round_half_up(PERTURB_AMPLITUDE * (rng.random::<f64>() - 0.5))
                } else {
                    0.0
                };
                (base + offset).max(1.0) as Value
            }
        })
        .collect()
}

/// Nearest integer, ties toward positive infinity.
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// [`generate_array`] with a fresh `ChaCha8Rng` seeded from `seed`.
///
/// # Examples
///
/// ```
/// use sortviz_algos::seeded_array;
/// use sortviz_core::ArrayShape;
///
/// let a = seeded_array(ArrayShape::Random, 60, 7);
/// let b = seeded_array(ArrayShape::Random, 60, 7);
/// assert_eq!(a, b);
/// assert!(a.iter().all(|v| (5..=100).contains(v)));
/// ```
pub fn seeded_array(shape: ArrayShape, len: usize, seed: u64) -> Vec<Value> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    generate_array(shape, len, &mut rng)
}
