//! Top-down merge sort.
//!
//! The range `[l, r]` splits at `m = (l + r) / 2`; the left half is sorted
//! before the right. Merging works from copies of both halves, so compared
//! indices are the halves' original positions (`l + i`, `m + 1 + j`) while
//! every placed element is recorded as an overwrite at its destination.
//! Ties take the left element, keeping the sort stable.

use sortviz_core::{ActionLog, AlgorithmKind, SortAlgorithm, Value};

use crate::recorder::Recorder;

const PSEUDOCODE: &str = "divide and merge sorted halves";

/// Merge sort generator.
#[derive(Clone, Copy, Debug, Default)]
pub struct MergeSort;

impl SortAlgorithm for MergeSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Merge
    }

    fn generate(&self, values: &[Value]) -> ActionLog {
        let mut rec = Recorder::new(self.kind(), values);
        if rec.len() > 1 {
            let last = rec.len() - 1;
            sort_range(&mut rec, 0, last);
        }
        rec.mark_all_sorted();
        rec.finish()
    }

    fn pseudocode(&self) -> &'static str {
        PSEUDOCODE
    }
}

/// Sort the inclusive range `[l, r]`. Depth is logarithmic in its length.
fn sort_range(rec: &mut Recorder, l: usize, r: usize) {
    if l >= r {
        return;
    }
    let m = l + (r - l) / 2;
    sort_range(rec, l, m);
    sort_range(rec, m + 1, r);
    merge(rec, l, m, r);
}

fn merge(rec: &mut Recorder, l: usize, m: usize, r: usize) {
    let left = rec.values()[l..=m].to_vec();
    let right = rec.values()[m + 1..=r].to_vec();
    let (mut i, mut j, mut k) = (0, 0, l);

    while i < left.len() && j < right.len() {
        rec.compare(l + i, m + 1 + j);
        if left[i] <= right[j] {
            rec.write(k, left[i]);
            i += 1;
        } else {
            rec.write(k, right[j]);
            j += 1;
        }
        k += 1;
    }
    for &value in &left[i..] {
        rec.write(k, value);
        k += 1;
    }
    for &value in &right[j..] {
        rec.write(k, value);
        k += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_element_example() {
        let log = MergeSort.generate(&[5, 3, 8, 1]);
        let actions: Vec<String> = log.actions().map(|a| a.to_string()).collect();
        assert_eq!(
            &actions[..12],
            &[
                "compare 0 1",
                "overwrite 0 [3, 3, 8, 1]",
                "overwrite 1 [3, 5, 8, 1]",
                "compare 2 3",
                "overwrite 2 [3, 5, 1, 1]",
                "overwrite 3 [3, 5, 1, 8]",
                "compare 0 2",
                "overwrite 0 [1, 5, 1, 8]",
                "compare 0 3",
                "overwrite 1 [1, 3, 1, 8]",
                "compare 1 3",
                "overwrite 2 [1, 3, 5, 8]",
            ]
        );
        assert_eq!(actions[12], "overwrite 3 [1, 3, 5, 8]");
        assert_eq!(actions.len(), 13 + 4);
        assert_eq!(log.totals().comparisons, 5);
        assert_eq!(log.totals().writes, 8);
        assert_eq!(log.totals().swaps, 0);
    }

    #[test]
    fn equal_keys_take_left_first() {
        // With equal keys the left half drains first: no right-side write
        // happens before the left element is placed.
        let log = MergeSort.generate(&[4, 4]);
        let actions: Vec<String> = log.actions().map(|a| a.to_string()).collect();
        assert_eq!(actions[0], "compare 0 1");
        assert_eq!(actions[1], "overwrite 0 [4, 4]");
        assert_eq!(actions[2], "overwrite 1 [4, 4]");
    }

    #[test]
    fn empty_and_singleton() {
        assert!(MergeSort.generate(&[]).is_empty());
        assert_eq!(MergeSort.generate(&[1]).len(), 1);
    }
}
