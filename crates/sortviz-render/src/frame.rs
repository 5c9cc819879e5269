//! Rendering instructions: bars, highlights and frames.

use smallvec::SmallVec;
use sortviz_core::{ActionKind, Value};

/// Class names of one bar. Never more than three.
pub type ClassList = SmallVec<[&'static str; 3]>;

/// Class carried by every bar.
pub const BAR_CLASS: &str = "bar";

/// Class of a bar whose index has been marked sorted.
pub const SORTED_CLASS: &str = "state-sorted";

/// Transient emphasis for the indices of the action being shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Highlight {
    /// The bar is being compared.
    Compare,
    /// The bar was just swapped.
    Swap,
    /// The bar was just written.
    Overwrite,
}

impl Highlight {
    /// The highlight an action kind produces. `SetSorted` has none; it
    /// shows up through the permanent sorted marker instead.
    pub fn for_kind(kind: ActionKind) -> Option<Self> {
        match kind {
            ActionKind::Compare => Some(Self::Compare),
            ActionKind::Swap => Some(Self::Swap),
            ActionKind::Overwrite => Some(Self::Overwrite),
            ActionKind::SetSorted => None,
        }
    }

    /// Style class for hosts that style bars by class name.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Compare => "state-compare",
            Self::Swap => "state-swap",
            Self::Overwrite => "state-overwrite",
        }
    }
}

/// How one element should be drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bar {
    /// The element's value.
    pub value: Value,
    /// Height in percent of the drawing area, in `0.0..=100.0`.
    pub height: f32,
    /// Emphasis from the current action, if it touches this index.
    pub highlight: Option<Highlight>,
    /// Whether the index has been marked sorted.
    pub sorted: bool,
}

impl Bar {
    /// Class names for this bar: `bar`, then the highlight, then
    /// `state-sorted`.
    pub fn classes(&self) -> ClassList {
        let mut classes = ClassList::new();
        classes.push(BAR_CLASS);
        if let Some(h) = self.highlight {
            classes.push(h.css_class());
        }
        if self.sorted {
            classes.push(SORTED_CLASS);
        }
        classes
    }
}

/// One rendering instruction for the whole array.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    /// One bar per element, in array order.
    pub bars: Vec<Bar>,
}

impl Frame {
    /// Number of bars.
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Whether the frame has no bars.
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Indices carrying a highlight, ascending.
    pub fn highlighted(&self) -> impl Iterator<Item = (usize, Highlight)> + '_ {
        self.bars
            .iter()
            .enumerate()
            .filter_map(|(i, b)| b.highlight.map(|h| (i, h)))
    }

    /// Number of bars marked sorted.
    pub fn sorted_count(&self) -> usize {
        self.bars.iter().filter(|b| b.sorted).count()
    }
}
