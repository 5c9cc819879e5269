//! Text drawing of frames for terminal hosts.

use crate::frame::{Bar, Frame, Highlight};

/// Draws a [`Frame`] as a fixed number of text rows, one column per bar.
///
/// Bars fill from the bottom row up. Plain bars use `█`, sorted bars `#`,
/// and highlighted bars the first letter of their highlight (`c`, `s`,
/// `w`). A highlight wins over the sorted marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextCanvas {
    rows: usize,
}

impl TextCanvas {
    /// A canvas `rows` tall. Zero is raised to one.
    pub fn new(rows: usize) -> Self {
        Self { rows: rows.max(1) }
    }

    /// Height in rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of filled cells for `bar`. Non-zero heights always fill at
    /// least one cell so small values stay visible.
    pub fn filled(&self, bar: &Bar) -> usize {
        if bar.height <= 0.0 {
            return 0;
        }
        let cells = (f64::from(bar.height) / 100.0 * self.rows as f64).round() as usize;
        cells.clamp(1, self.rows)
    }

    /// Render `frame`, top row first.
    pub fn draw(&self, frame: &Frame) -> Vec<String> {
        let filled: Vec<usize> = frame.bars.iter().map(|b| self.filled(b)).collect();
        (0..self.rows)
            .map(|row| {
                let level = self.rows - row;
                frame
                    .bars
                    .iter()
                    .zip(&filled)
                    .map(|(bar, &n)| if n >= level { glyph(bar) } else { ' ' })
                    .collect()
            })
            .collect()
    }
}

impl Default for TextCanvas {
    fn default() -> Self {
        Self::new(16)
    }
}

fn glyph(bar: &Bar) -> char {
    match bar.highlight {
        Some(Highlight::Compare) => 'c',
        Some(Highlight::Swap) => 's',
        Some(Highlight::Overwrite) => 'w',
        None if bar.sorted => '#',
        None => '█',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render;
    use indexmap::IndexSet;
    use sortviz_core::Action;

    #[test]
    fn bars_fill_from_the_bottom() {
        let frame = render(&[25, 50, 100], None, &IndexSet::new());
        let rows = TextCanvas::new(4).draw(&frame);
        assert_eq!(rows, vec!["  █", "  █", " ██", "███"]);
    }

    #[test]
    fn highlight_wins_over_sorted() {
        let sorted: IndexSet<usize> = [0, 1].into_iter().collect();
        let frame = render(&[100, 100, 100], Some(&Action::Compare { a: 1, b: 2 }), &sorted);
        let rows = TextCanvas::new(1).draw(&frame);
        assert_eq!(rows, vec!["#cc"]);
    }

    #[test]
    fn tiny_values_stay_visible() {
        let frame = render(&[1, 0], None, &IndexSet::new());
        let canvas = TextCanvas::new(10);
        assert_eq!(canvas.filled(&frame.bars[0]), 1);
        assert_eq!(canvas.filled(&frame.bars[1]), 0);
    }

    #[test]
    fn zero_rows_is_one_row() {
        assert_eq!(TextCanvas::new(0).rows(), 1);
        assert_eq!(TextCanvas::new(0).draw(&Frame::default()), vec![String::new()]);
    }
}
