//! Insertion sort.
//!
//! Each larger element is shifted one slot right and recorded as a swap
//! of the two positions (the array briefly holds a duplicate). The key is
//! then written into the hole as an overwrite. Indices are marked sorted
//! only once the whole array is in order.

use sortviz_core::{ActionLog, AlgorithmKind, SortAlgorithm, Value};

use crate::recorder::Recorder;

const PSEUDOCODE: &str = "for i from 1 to n-1:\n  insert arr[i] into sorted left side";

/// Insertion sort generator.
#[derive(Clone, Copy, Debug, Default)]
pub struct InsertionSort;

impl SortAlgorithm for InsertionSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Insertion
    }

    fn generate(&self, values: &[Value]) -> ActionLog {
        let mut rec = Recorder::new(self.kind(), values);
        for i in 1..rec.len() {
            let key = rec.get(i);
            // `hole` is the slot the key will land in.
            let mut hole = i;
            while hole > 0 {
                rec.compare(hole - 1, hole);
                if rec.get(hole - 1) > key {
                    rec.shift(hole - 1, hole);
                    hole -= 1;
                } else {
                    break;
                }
            }
            rec.write(hole, key);
        }
        rec.mark_all_sorted();
        rec.finish()
    }

    fn pseudocode(&self) -> &'static str {
        PSEUDOCODE
    }
}
