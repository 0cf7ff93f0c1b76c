//! Inkmark Gesture Engine
//!
//! Turns raw multi-pointer touch streams into incremental affine updates for
//! one overlaid element at a time.
//!
//! - **Single-finger drag**: deltas in the element's local space, mapped
//!   through its current matrix before being added to the translation
//! - **Two-finger pinch**: scale by span ratio (clamped) and rotate by the
//!   signed angle between consecutive span vectors (normalized), about a
//!   moving pivot whose changes never move the element on screen
//! - **Drop zones**: release over the delete zone requests removal; release
//!   outside the photo snaps the element back
//! - **Tap to edit**: a text element released exactly where it was pressed
//!   requests editing

pub mod element;
pub mod engine;
pub mod host;
pub mod math;
pub mod pinch;
pub mod transform;
pub mod zone;

pub use element::{ElementContent, OverlayElement};
pub use engine::{GestureSettings, GestureTransformEngine};
pub use host::OverlayHost;
pub use math::{angle_between, normalize_degrees, ScaleLimits};
pub use pinch::{PinchTracker, PinchUpdate};
pub use transform::ElementTransform;
pub use zone::ScreenRegion;
