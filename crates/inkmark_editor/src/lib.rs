//! Inkmark Editor
//!
//! Controller for a photo-annotation overlay. It places text, emoji and
//! image stickers over a photo, routes each element's touch stream into its
//! own gesture engine, owns the freehand brush layer and reports every
//! change to an optional [`EditorListener`].
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use inkmark_editor::{EditorConfig, Notification, NotificationLog, PhotoEditor, ViewKind};
//!
//! let mut editor = PhotoEditor::new(EditorConfig::default()).unwrap();
//! let log = Rc::new(NotificationLog::new());
//! editor.set_listener(log.clone());
//!
//! editor.add_text("hello", None);
//! editor.undo();
//!
//! assert_eq!(
//!     log.take(),
//!     vec![
//!         Notification::ElementAdded { kind: ViewKind::Text, total: 1 },
//!         Notification::ElementRemoved { total: 0 },
//!     ]
//! );
//! ```

pub mod config;
pub mod editor;
pub mod emoji;
pub mod error;

pub use config::{BrushConfig, EditorConfig, GestureConfig, RegionConfig};
pub use editor::PhotoEditor;
pub use emoji::decode_emoji_code;
pub use error::{EditorError, Result};

pub use inkmark_brush::{BrushAttributes, BrushMode, CaptureState, StrokeCompositor};
pub use inkmark_core::{
    EditorListener, ElementId, ElementKind, Notification, NotificationLog, Notifier, PointerId,
    TouchAction, TouchEvent, TouchPointer, ViewKind,
};
pub use inkmark_gesture::{ElementContent, ElementTransform, GestureSettings, OverlayElement};
pub use inkmark_paint::{Color, Point, RasterSurface, Rect, Size, Vector2D};
