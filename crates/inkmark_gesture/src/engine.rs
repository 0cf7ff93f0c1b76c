//! Gesture transform engine
//!
//! One engine is bound to one overlaid element. It consumes that element's
//! touch stream and mutates the element's transform:
//!
//! - `Down` binds the active pointer, shows the delete zone, raises the element
//!   and reports a gesture start
//! - `Move` outside a pinch translates by the active pointer's local delta
//! - `PointerDown` / `PointerUp` start, re-pair or end the pinch, and rebind the
//!   active pointer when it is the one lifted
//! - `Up` drops the element (remove / snap back), hides the delete zone,
//!   reports a gesture stop and detects tap-to-edit on text
//! - `Cancel` unbinds everything without further reporting
//!
//! The previous local position is an anchor: it is set on `Down` and on
//! rebinding, not on every move. Local coordinates travel with the element, so
//! each move's delta is the finger's drift relative to the element.

use inkmark_core::{Notifier, PointerId, TouchAction, TouchEvent, ViewKind};
use inkmark_paint::Point;

use crate::element::OverlayElement;
use crate::host::OverlayHost;
use crate::math::ScaleLimits;
use crate::pinch::PinchTracker;

/// Tunables for a gesture engine
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSettings {
    pub scale_limits: ScaleLimits,
    /// Duration of the snap-back when released outside the canvas
    pub snap_back_ms: u32,
    /// Maximum release distance still counted as a tap. `0.0` means the
    /// release must land on exactly the press coordinates.
    pub tap_slop: f32,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            scale_limits: ScaleLimits::default(),
            snap_back_ms: 300,
            tap_slop: 0.0,
        }
    }
}

impl GestureSettings {
    fn is_tap(&self, down: Point, up: Point) -> bool {
        if self.tap_slop <= 0.0 {
            down == up
        } else {
            down.distance_to(up) <= self.tap_slop
        }
    }
}

#[derive(Debug, Default)]
pub struct GestureTransformEngine {
    settings: GestureSettings,
    active_pointer: Option<PointerId>,
    prev_local: Point,
    prev_raw: Point,
    pinch: PinchTracker,
    notifier: Notifier,
}

impl GestureTransformEngine {
    pub fn new(settings: GestureSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn with_notifier(mut self, notifier: Notifier) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn set_notifier(&mut self, notifier: Notifier) {
        self.notifier = notifier;
    }

    pub fn settings(&self) -> &GestureSettings {
        &self.settings
    }

    pub fn active_pointer(&self) -> Option<PointerId> {
        self.active_pointer
    }

    pub fn is_pinching(&self) -> bool {
        self.pinch.is_in_progress()
    }

    /// Feed one touch event for `element`. Always consumes the event.
    pub fn on_touch(
        &mut self,
        element: &mut OverlayElement,
        event: &TouchEvent,
        host: &mut dyn OverlayHost,
    ) -> bool {
        self.track_pinch(element, event);

        match event.action {
            TouchAction::Down => self.on_down(element, event, host),
            TouchAction::Move => self.on_move(element, event),
            TouchAction::Cancel => {
                tracing::debug!(pointer = ?self.active_pointer, "gesture cancelled");
                self.active_pointer = None;
            }
            TouchAction::Up => self.on_up(element, event, host),
            TouchAction::PointerUp => self.on_pointer_up(event),
            TouchAction::PointerDown => {}
        }

        true
    }

    fn on_down(
        &mut self,
        element: &mut OverlayElement,
        event: &TouchEvent,
        host: &mut dyn OverlayHost,
    ) {
        let Some(pointer) = event.action_pointer() else {
            return;
        };
        element.cancel_snap_back();
        self.prev_local = pointer.position;
        self.prev_raw = pointer.raw;
        self.active_pointer = Some(pointer.id);

        host.set_delete_zone_visible(true);
        host.bring_to_front(element.id());
        tracing::debug!(pointer = pointer.id, kind = ?element.kind(), "gesture start");
        self.notifier.gesture_started(ViewKind::from(element.kind()));
    }

    fn on_move(&mut self, element: &mut OverlayElement, event: &TouchEvent) {
        let Some(active) = self.active_pointer else {
            return;
        };
        let Some(pointer) = event.find(active) else {
            tracing::trace!(active, "active pointer missing from move");
            return;
        };
        if self.pinch.is_in_progress() {
            return;
        }
        let delta = pointer.position - self.prev_local;
        element.transform_mut().adjust_translation(delta);
        tracing::trace!(dx = delta.x, dy = delta.y, "drag");
    }

    fn on_up(&mut self, element: &mut OverlayElement, event: &TouchEvent, host: &mut dyn OverlayHost) {
        self.active_pointer = None;
        let Some(pointer) = event.action_pointer() else {
            return;
        };
        let release = pointer.raw;

        if host.delete_zone_bounds().contains(release) {
            tracing::debug!(x = release.x, y = release.y, "released over delete zone");
            host.on_element_remove_requested(element.id());
        } else if !host.canvas_bounds().contains(release) {
            element.start_snap_back(self.settings.snap_back_ms);
        }
        host.set_delete_zone_visible(false);
        self.notifier
            .gesture_stopped(ViewKind::from(element.kind()));

        if self.settings.is_tap(self.prev_raw, release) {
            if let Some((text, color)) = element.text_content() {
                tracing::debug!("text tapped");
                host.on_text_edit_requested(element.id(), text, color);
                self.notifier.text_edit_requested(text, color);
            }
        }
    }

    fn on_pointer_up(&mut self, event: &TouchEvent) {
        let Some(lifted) = event.action_pointer() else {
            return;
        };
        if Some(lifted.id) != self.active_pointer {
            return;
        }
        if let Some(next) = event.remaining_pointers().next() {
            self.prev_local = next.position;
            self.active_pointer = Some(next.id);
            tracing::debug!(from = lifted.id, to = next.id, "active pointer rebound");
        }
    }

    /// Drive the pinch tracker and apply scale/rotation frames. Runs before
    /// the drag handling so a pinch frame is never also applied as a drag.
    fn track_pinch(&mut self, element: &mut OverlayElement, event: &TouchEvent) {
        match event.action {
            TouchAction::PointerDown | TouchAction::PointerUp => {
                let mut remaining = event.remaining_pointers();
                match (remaining.next(), remaining.next()) {
                    (Some(first), Some(second)) => self.pinch.begin(first, second),
                    _ => self.pinch.end(),
                }
            }
            TouchAction::Move => {
                let Some((first_id, second_id)) = self.pinch.pointers() else {
                    return;
                };
                let (Some(first), Some(second)) = (event.find(first_id), event.find(second_id))
                else {
                    self.pinch.end();
                    return;
                };
                if let Some(update) = self.pinch.update(first, second) {
                    element.transform_mut().apply_pinch(
                        update.focus,
                        update.scale_factor,
                        update.angle,
                        self.settings.scale_limits,
                    );
                    tracing::trace!(
                        scale = element.transform().scale,
                        rotation = element.transform().rotation,
                        "pinch"
                    );
                }
            }
            TouchAction::Down | TouchAction::Up | TouchAction::Cancel => self.pinch.end(),
        }
    }
}
