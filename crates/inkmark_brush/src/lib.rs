//! Inkmark Brush
//!
//! Freehand drawing layer placed over the photo. Strokes are captured as a
//! vector path while the finger is down and committed into a persistent
//! raster surface on release, either darkening what is below (pen) or
//! clearing it (eraser).
//!
//! Frames are drawn in two layers: the committed surface first, then the
//! in-progress path on top. An uncommitted stroke therefore never touches
//! the persistent surface and can be discarded cleanly.

pub mod attributes;
pub mod compositor;

pub use attributes::{BrushAttributes, BrushMode};
pub use compositor::{CaptureState, StrokeCompositor};
