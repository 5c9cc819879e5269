//! The pure `(values, action, sorted) -> Frame` mapping.

use indexmap::IndexSet;
use sortviz_core::{Action, Value};

use crate::frame::{Bar, Frame, Highlight};

/// The value drawn at full height for `values`.
///
/// At least 100, so arrays on the default 0–100 scale draw each value as
/// its own percentage; larger values rescale the whole frame.
pub fn height_scale(values: &[Value]) -> Value {
    values.iter().copied().max().unwrap_or(0).max(100)
}

/// Height of `value` in percent of `scale`, clamped to `0.0..=100.0`.
pub fn height_percent(value: Value, scale: Value) -> f32 {
    if scale == 0 {
        return 0.0;
    }
    ((f64::from(value) / f64::from(scale)) * 100.0).clamp(0.0, 100.0) as f32
}

/// Map the current state to a rendering instruction.
///
/// `action` is the action being shown, if any; its indices get its kind's
/// highlight. `sorted` holds every index marked sorted so far. Indices
/// with no corresponding element are ignored.
///
/// # Examples
///
/// ```
/// use indexmap::IndexSet;
/// use sortviz_core::Action;
/// use sortviz_render::{render, Highlight};
///
/// let sorted: IndexSet<usize> = [2].into_iter().collect();
/// let frame = render(&[50, 20, 100], Some(&Action::Compare { a: 0, b: 1 }), &sorted);
///
/// assert_eq!(frame.bars[0].height, 50.0);
/// assert_eq!(frame.bars[1].highlight, Some(Highlight::Compare));
/// assert!(frame.bars[2].sorted);
/// ```
pub fn render(values: &[Value], action: Option<&Action>, sorted: &IndexSet<usize>) -> Frame {
    let scale = height_scale(values);
    let mut bars: Vec<Bar> = values
        .iter()
        .enumerate()
        .map(|(i, &value)| Bar {
            value,
            height: height_percent(value, scale),
            highlight: None,
            sorted: sorted.contains(&i),
        })
        .collect();

    if let Some(action) = action {
        if let Some(highlight) = Highlight::for_kind(action.kind()) {
            for index in action.indices() {
                if let Some(bar) = bars.get_mut(index) {
                    bar.highlight = Some(highlight);
                }
            }
        }
    }

    Frame { bars }
}
