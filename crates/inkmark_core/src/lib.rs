//! Inkmark Core
//!
//! Shared vocabulary for the photo-annotation overlay:
//!
//! - **Element identity**: slot-map keys and explicit kind tags for overlaid
//!   text, emoji and image stickers
//! - **Touch input**: a platform-agnostic multi-pointer event model
//! - **Notifications**: the observer interface the gesture engine, the stroke
//!   compositor and the editor controller report through
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use inkmark_core::{Notification, NotificationLog, Notifier, ViewKind};
//!
//! let log = Rc::new(NotificationLog::new());
//! let notifier = Notifier::with_listener(log.clone());
//!
//! notifier.gesture_started(ViewKind::Brush);
//! assert_eq!(log.take(), vec![Notification::GestureStarted { kind: ViewKind::Brush }]);
//! ```

pub mod element;
pub mod events;
pub mod input;

pub use element::{ElementId, ElementKind, ViewKind};
pub use events::{EditorListener, Notification, NotificationLog, Notifier};
pub use input::{PointerId, TouchAction, TouchEvent, TouchPointer};
