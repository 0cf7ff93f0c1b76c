//! Change notifications
//!
//! The gesture engines, the stroke compositor and the editor controller all
//! report semantic events through one [`EditorListener`]. Registration is
//! optional: a [`Notifier`] without a listener silently drops everything.

use std::cell::RefCell;
use std::rc::Rc;

use inkmark_paint::Color;
use serde::{Serialize, Serializer};

use crate::element::ViewKind;

/// Observer for overlay changes.
///
/// All callbacks fire synchronously on the UI thread at the point where the
/// change happens. Every method has an empty default so implementors only
/// override what they care about.
pub trait EditorListener {
    /// An element was added; `total` is the element count afterwards
    fn on_element_added(&self, _kind: ViewKind, _total: usize) {}

    /// An element was removed; `total` is the element count afterwards
    fn on_element_removed(&self, _total: usize) {}

    fn on_gesture_start(&self, _kind: ViewKind) {}

    fn on_gesture_stop(&self, _kind: ViewKind) {}

    /// A text element was tapped without moving
    fn on_text_edit_requested(&self, _text: &str, _color: Color) {}
}

/// Cheaply clonable handle to the optional listener
#[derive(Clone, Default)]
pub struct Notifier {
    listener: Option<Rc<dyn EditorListener>>,
}

impl Notifier {
    /// Notifier that drops every notification
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listener(listener: Rc<dyn EditorListener>) -> Self {
        Self {
            listener: Some(listener),
        }
    }

    pub fn set_listener(&mut self, listener: Option<Rc<dyn EditorListener>>) {
        self.listener = listener;
    }

    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    fn deliver(&self, event: &'static str) -> Option<&Rc<dyn EditorListener>> {
        tracing::trace!(event, delivered = self.listener.is_some(), "notification");
        self.listener.as_ref()
    }

    pub fn element_added(&self, kind: ViewKind, total: usize) {
        if let Some(listener) = self.deliver("element_added") {
            listener.on_element_added(kind, total);
        }
    }

    pub fn element_removed(&self, total: usize) {
        if let Some(listener) = self.deliver("element_removed") {
            listener.on_element_removed(total);
        }
    }

    pub fn gesture_started(&self, kind: ViewKind) {
        if let Some(listener) = self.deliver("gesture_started") {
            listener.on_gesture_start(kind);
        }
    }

    pub fn gesture_stopped(&self, kind: ViewKind) {
        if let Some(listener) = self.deliver("gesture_stopped") {
            listener.on_gesture_stop(kind);
        }
    }

    pub fn text_edit_requested(&self, text: &str, color: Color) {
        if let Some(listener) = self.deliver("text_edit_requested") {
            listener.on_text_edit_requested(text, color);
        }
    }
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("has_listener", &self.has_listener())
            .finish()
    }
}

/// A recorded notification
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Notification {
    ElementAdded {
        kind: ViewKind,
        total: usize,
    },
    ElementRemoved {
        total: usize,
    },
    GestureStarted {
        kind: ViewKind,
    },
    GestureStopped {
        kind: ViewKind,
    },
    TextEditRequested {
        text: String,
        #[serde(serialize_with = "serialize_color")]
        color: Color,
    },
}

fn serialize_color<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&color.to_hex_string())
}

/// Listener that records every notification in order
#[derive(Debug, Default)]
pub struct NotificationLog {
    entries: RefCell<Vec<Notification>>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded notifications
    pub fn entries(&self) -> Vec<Notification> {
        self.entries.borrow().clone()
    }

    /// Drain the recorded notifications
    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.entries.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    fn push(&self, notification: Notification) {
        self.entries.borrow_mut().push(notification);
    }
}

impl EditorListener for NotificationLog {
    fn on_element_added(&self, kind: ViewKind, total: usize) {
        self.push(Notification::ElementAdded { kind, total });
    }

    fn on_element_removed(&self, total: usize) {
        self.push(Notification::ElementRemoved { total });
    }

    fn on_gesture_start(&self, kind: ViewKind) {
        self.push(Notification::GestureStarted { kind });
    }

    fn on_gesture_stop(&self, kind: ViewKind) {
        self.push(Notification::GestureStopped { kind });
    }

    fn on_text_edit_requested(&self, text: &str, color: Color) {
        self.push(Notification::TextEditRequested {
            text: text.to_string(),
            color,
        });
    }
}
