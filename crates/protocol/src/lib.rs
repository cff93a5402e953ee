//! Shared protocol types for servo-web
//!
//! Defines the control paths the browser panels send to the device server,
//! the transforms applied to slider values before they are shown, and the
//! panel presets that tie sliders, labels and paths together.

pub mod panel;
pub mod path;
pub mod transform;

pub use panel::*;
pub use path::*;
pub use transform::*;
