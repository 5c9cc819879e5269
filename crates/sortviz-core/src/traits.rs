//! The sorting-algorithm abstraction.

use crate::action::{ActionLog, Value};
use crate::kind::AlgorithmKind;

/// A sorting routine re-expressed as an action-log generator.
///
/// Implementations must be pure: `generate` sorts a private copy of
/// `values` and returns the ordered record of every primitive step. The
/// same input always yields the same log.
///
/// # Examples
///
/// ```
/// use sortviz_core::{ActionLog, AlgorithmKind, SortAlgorithm, Value};
///
/// struct Nothing;
///
/// impl SortAlgorithm for Nothing {
///     fn kind(&self) -> AlgorithmKind { AlgorithmKind::Bubble }
///     fn generate(&self, values: &[Value]) -> ActionLog {
///         ActionLog::new(self.kind(), values.len(), Vec::new())
///     }
///     fn pseudocode(&self) -> &'static str { "" }
/// }
///
/// assert!(Nothing.generate(&[]).is_empty());
/// assert_eq!(Nothing.name(), "bubble");
/// ```
pub trait SortAlgorithm: Send + Sync {
    /// Which algorithm this is.
    fn kind(&self) -> AlgorithmKind;

    /// Selector name; defaults to the kind's name.
    fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Record every step of sorting a copy of `values`.
    fn generate(&self, values: &[Value]) -> ActionLog;

    /// Static pseudocode shown next to the animation.
    fn pseudocode(&self) -> &'static str;
}
