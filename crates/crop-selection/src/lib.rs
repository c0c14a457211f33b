//! # Crop Selection
//! Interactive selection engine for an image cropper.
//!
//! Tracks pointer drags and resizes, keeps the selection inside the image and
//! enforces aspect ratio and min/max dimension constraints. Rendering and
//! pointer capture belong to the host, which feeds image-local coordinates in
//! and receives rectangles back through [`SelectionListener`]s.
//!

#![warn(missing_docs)]

extern crate alloc;

pub use config::{Config, Constraints, Initial, Ratio, gcd};
pub use engine::SelectionEngine;
pub use geometry::{Axis, Bounds, Dimensions, Direction, Point, Rect, Sign};
pub use gesture::Gesture;
pub use handle::Handle;
pub use keyboard::{ArrowKey, FAST_NUDGE};
pub use listener::{Selection, SelectionEvent, SelectionListener, Shared};
pub use preview::{Preview, PreviewFrame};

pub(crate) use geometry::Span;

pub mod constrain;

mod config;
mod engine;
mod geometry;
mod gesture;
mod handle;
mod keyboard;
mod listener;
mod preview;
