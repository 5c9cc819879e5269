//! The array as the player currently shows it.

use indexmap::IndexSet;
use sortviz_core::{Action, Value};
use sortviz_render::{render, Frame};

/// Values, the action being shown, and the indices marked sorted.
///
/// Mutating actions replace the whole array with their snapshot, so the
/// shown values are always a state the algorithm actually passed through.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisualState {
    values: Vec<Value>,
    current: Option<Action>,
    sorted: IndexSet<usize>,
}

impl VisualState {
    /// A state showing `values` with nothing highlighted or sorted.
    pub fn new(values: &[Value]) -> Self {
        Self {
            values: values.to_vec(),
            current: None,
            sorted: IndexSet::new(),
        }
    }

    /// The shown values.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// The action most recently applied, if it is still highlighted.
    pub fn current(&self) -> Option<&Action> {
        self.current.as_ref()
    }

    /// Indices marked sorted, in marking order.
    pub fn sorted(&self) -> &IndexSet<usize> {
        &self.sorted
    }

    /// Whether every index is marked sorted.
    pub fn all_sorted(&self) -> bool {
        self.sorted.len() == self.values.len()
    }

    /// Show `action`.
    ///
    /// Indices with no element are skipped, as are snapshots whose length
    /// does not match the shown array.
    pub fn apply(&mut self, action: &Action) {
        match action {
            Action::Compare { .. } => {}
            Action::Swap { snapshot, .. } | Action::Overwrite { snapshot, .. } => {
                if snapshot.len() == self.values.len() {
                    self.values.copy_from_slice(snapshot);
                }
            }
            Action::SetSorted { index } => {
                if *index < self.values.len() {
                    self.sorted.insert(*index);
                }
            }
        }
        self.current = Some(action.clone());
    }

    /// Drop the transient highlight.
    pub fn clear_current(&mut self) {
        self.current = None;
    }

    /// Mark every index sorted.
    pub fn mark_all_sorted(&mut self) {
        self.sorted.extend(0..self.values.len());
    }

    /// The rendering instruction for this state.
    pub fn frame(&self) -> Frame {
        render(&self.values, self.current.as_ref(), &self.sorted)
    }
}
