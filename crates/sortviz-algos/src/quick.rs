//! Quicksort with Lomuto partitioning.
//!
//! The last element of each range is the pivot. Every element smaller than
//! the pivot is swapped forward, self-swaps included, and the pivot is then
//! swapped into place. The low side is always finished before the high
//! side; an explicit work stack keeps that order without recursing, so
//! sorted inputs of any length are safe.

use sortviz_core::{ActionLog, AlgorithmKind, SortAlgorithm, Value};

use crate::recorder::Recorder;

const PSEUDOCODE: &str = "choose pivot; partition; sort subarrays";

/// Quicksort generator.
#[derive(Clone, Copy, Debug, Default)]
pub struct QuickSort;

impl SortAlgorithm for QuickSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Quick
    }

    fn generate(&self, values: &[Value]) -> ActionLog {
        let mut rec = Recorder::new(self.kind(), values);
        let mut pending: Vec<(usize, usize)> = Vec::new();
        if rec.len() > 1 {
            pending.push((0, rec.len() - 1));
        }
        while let Some((low, high)) = pending.pop() {
            if low >= high {
                continue;
            }
            let pivot = partition(&mut rec, low, high);
            // Pushed high side first so the low side is popped next.
            pending.push((pivot + 1, high));
            if pivot > low {
                pending.push((low, pivot - 1));
            }
        }
        rec.mark_all_sorted();
        rec.finish()
    }

    fn pseudocode(&self) -> &'static str {
        PSEUDOCODE
    }
}

/// Partition `[low, high]` around `values[high]`; returns the pivot's slot.
fn partition(rec: &mut Recorder, low: usize, high: usize) -> usize {
    let pivot = rec.get(high);
    let mut slot = low;
    for j in low..high {
        rec.compare(j, high);
        if rec.get(j) < pivot {
            rec.swap(slot, j);
            slot += 1;
        }
    }
    rec.swap(slot, high);
    slot
}
