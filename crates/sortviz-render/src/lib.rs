//! Pure mapping from array state and actions to bar frames.
//!
//! [`render`] turns `(values, current action, sorted set)` into a
//! [`Frame`]: one [`Bar`] per element with its height in percent, the
//! transient [`Highlight`] of the action being shown, and the permanent
//! sorted marker. Nothing here holds state between calls.
//!
//! [`TextCanvas`] draws a frame as rows of text for terminal hosts.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod canvas;
pub mod frame;
pub mod render;

pub use canvas::TextCanvas;
pub use frame::{Bar, ClassList, Frame, Highlight, BAR_CLASS, SORTED_CLASS};
pub use render::{height_percent, height_scale, render};
