//! # Crop Replay
//! Hosts a crop selection engine the way a page would, and replays recorded sessions against it.
//!

mod host;
mod replay;
mod script;
pub mod zoom;

pub use host::{Cropper, HostOptions, PointerEvent, Target, Viewport};
pub use replay::{Report, replay};
pub use script::{LoadError, SaveError, Script, ScriptEvent};
pub use zoom::{GraphZoom, TimeRange, ZoomListener};
