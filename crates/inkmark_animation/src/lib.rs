//! Inkmark Animation
//!
//! Timed value animations driven by the host's frame clock.
//!
//! # Features
//!
//! - **Easing**: standard polynomial curves
//! - **Tweens**: single-value transitions ticked in milliseconds, used for
//!   the snap-back of elements released outside the photo

pub mod easing;
pub mod tween;

pub use easing::Easing;
pub use tween::Tween;
