//! Action-log generators for the sortviz sorting algorithms.
//!
//! Each algorithm is a unit struct implementing
//! [`SortAlgorithm`](sortviz_core::SortAlgorithm). Generators sort a
//! private copy of their input through a shared [`Recorder`], which takes
//! the snapshots and keeps the authoritative comparison/swap/write counts.
//!
//! # Recording order
//!
//! 1. [`BubbleSort`]: compare neighbours, swap when out of order, mark the
//!    tail sorted after each pass
//! 2. [`SelectionSort`]: scan for the minimum, swap it into place, mark it
//! 3. [`InsertionSort`]: shift larger elements right (recorded as swaps),
//!    then overwrite the hole with the key
//! 4. [`MergeSort`]: top-down; every merged element is an overwrite
//! 5. [`QuickSort`]: Lomuto partition around the last element
//!
//! The last three mark every index sorted once the array is in order.
//!
//! Array layouts for fresh runs live in [`shape`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod bubble;
pub mod catalog;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod recorder;
pub mod selection;
pub mod shape;

pub use bubble::BubbleSort;
pub use catalog::{algorithm, generate, pseudocode, Catalog};
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use recorder::Recorder;
pub use selection::SelectionSort;
pub use shape::{generate_array, seeded_array, MAX_VALUE, MIN_RANDOM_VALUE};
