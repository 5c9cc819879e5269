//! Benchmark profiles and utilities for the sortviz visualizer.
//!
//! Provides pre-built [`VisualizerConfig`] profiles for benchmarking and
//! examples:
//!
//! - [`reference_profile`]: 60 random elements, the interactive default
//! - [`stress_profile`]: 200 reversed elements, the worst case for the
//!   quadratic algorithms
//! - [`profile_arrays`]: one seeded array per shape

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use sortviz_algos::seeded_array;
use sortviz_core::{AlgorithmKind, ArrayShape, Value};
use sortviz_engine::{Speed, VisualizerConfig, MAX_ARRAY_SIZE};

/// Build a reference benchmark profile: 60 random elements, no delay.
pub fn reference_profile(algorithm: AlgorithmKind, seed: u64) -> VisualizerConfig {
    VisualizerConfig {
        size: 60,
        shape: ArrayShape::Random,
        algorithm,
        speed: Speed::DelayMs(0),
        seed,
    }
}

/// Build a stress benchmark profile: the largest accepted array, reversed.
///
/// Same pacing as [`reference_profile`]; bubble, selection and insertion
/// sort record their maximum number of actions on it.
pub fn stress_profile(algorithm: AlgorithmKind, seed: u64) -> VisualizerConfig {
    VisualizerConfig {
        size: MAX_ARRAY_SIZE,
        shape: ArrayShape::Reversed,
        ..reference_profile(algorithm, seed)
    }
}

/// One array of `len` elements per shape, generated from `seed`.
pub fn profile_arrays(len: usize, seed: u64) -> Vec<(ArrayShape, Vec<Value>)> {
    ArrayShape::ALL
        .into_iter()
        .map(|shape| (shape, seeded_array(shape, len, seed)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_are_valid() {
        for kind in AlgorithmKind::ALL {
            assert!(reference_profile(kind, 1).validate().is_ok());
            assert!(stress_profile(kind, 1).validate().is_ok());
        }
    }

    #[test]
    fn profile_arrays_cover_every_shape() {
        let arrays = profile_arrays(40, 9);
        assert_eq!(arrays.len(), ArrayShape::ALL.len());
        assert!(arrays.iter().all(|(_, values)| values.len() == 40));
    }
}
