//! Lookup from [`AlgorithmKind`] or selector name to a generator.

use indexmap::IndexMap;
use sortviz_core::{ActionLog, AlgorithmKind, SortAlgorithm, Value};

use crate::bubble::BubbleSort;
use crate::insertion::InsertionSort;
use crate::merge::MergeSort;
use crate::quick::QuickSort;
use crate::selection::SelectionSort;

/// The generator for `kind`.
pub fn algorithm(kind: AlgorithmKind) -> &'static dyn SortAlgorithm {
    match kind {
        AlgorithmKind::Bubble => &BubbleSort,
        AlgorithmKind::Selection => &SelectionSort,
        AlgorithmKind::Insertion => &InsertionSort,
        AlgorithmKind::Merge => &MergeSort,
        AlgorithmKind::Quick => &QuickSort,
    }
}

/// Record the action log of sorting `values` with `kind`.
///
/// # Examples
///
/// ```
/// use sortviz_algos::generate;
/// use sortviz_core::AlgorithmKind;
///
/// let values = vec![3, 1, 2];
/// let log = generate(AlgorithmKind::Quick, &values);
/// assert_eq!(values, vec![3, 1, 2]);
/// assert_eq!(log.algorithm(), AlgorithmKind::Quick);
/// ```
pub fn generate(kind: AlgorithmKind, values: &[Value]) -> ActionLog {
    algorithm(kind).generate(values)
}

/// Display-only pseudocode for `kind`.
pub fn pseudocode(kind: AlgorithmKind) -> &'static str {
    algorithm(kind).pseudocode()
}

/// Registered algorithms keyed by selector name, in display order.
///
/// Control surfaces enumerate this to build their algorithm selector.
pub struct Catalog {
    entries: IndexMap<&'static str, &'static dyn SortAlgorithm>,
}

impl Catalog {
    /// A catalog holding all five algorithms.
    pub fn new() -> Self {
        let entries = AlgorithmKind::ALL
            .into_iter()
            .map(|kind| {
                let alg = algorithm(kind);
                (alg.name(), alg)
            })
            .collect();
        Self { entries }
    }

    /// Look up an algorithm by selector name.
    pub fn get(&self, name: &str) -> Option<&'static dyn SortAlgorithm> {
        self.entries.get(name).copied()
    }

    /// Iterate in display order.
    pub fn iter(&self) -> impl Iterator<Item = &'static dyn SortAlgorithm> + '_ {
        self.entries.values().copied()
    }

    /// Selector names in display order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Number of registered algorithms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.entries.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_matches_kind() {
        for kind in AlgorithmKind::ALL {
            assert_eq!(algorithm(kind).kind(), kind);
            assert_eq!(generate(kind, &[2, 1]).algorithm(), kind);
            assert!(!pseudocode(kind).is_empty());
        }
    }

    #[test]
    fn catalog_preserves_display_order() {
        let catalog = Catalog::new();
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, vec!["bubble", "selection", "insertion", "merge", "quick"]);
        assert_eq!(catalog.len(), 5);
        assert_eq!(
            catalog.get("merge").map(|a| a.kind()),
            Some(AlgorithmKind::Merge)
        );
        assert!(catalog.get("heap").is_none());
    }

    #[test]
    fn bubble_pseudocode_text() {
        assert_eq!(
            pseudocode(AlgorithmKind::Bubble),
            "for i in range n:\n  for j in range n-i-1:\n    compare j and j+1; swap if needed"
        );
    }
}
