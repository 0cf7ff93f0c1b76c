//! Two-finger pinch tracking
//!
//! Follows one pair of pointers by id and reports per-frame deltas: the span
//! ratio, the signed rotation between consecutive span vectors, and the focus
//! point (midpoint of the pair). The previous span vector is replaced after
//! every update so each frame reports only its own delta.
//!
//! Spans are measured between the raw screen positions. Local positions move
//! with the element's own scale and rotation, so a local span would feed each
//! frame's result back into the next one. Only the focus is local, since it
//! becomes the element's pivot.

use inkmark_core::{PointerId, TouchPointer};
use inkmark_paint::{Point, Vector2D};

use crate::math::angle_between;

/// Delta produced by one pinch frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchUpdate {
    /// Current span length / previous span length
    pub scale_factor: f32,
    /// Signed rotation in degrees since the previous frame
    pub angle: f32,
    /// Midpoint of the two pointers, in local space
    pub focus: Point,
}

#[derive(Clone, Copy, Debug)]
struct PinchPair {
    first: PointerId,
    second: PointerId,
    prev_span: Vector2D,
    focus: Point,
}

#[derive(Debug, Default)]
pub struct PinchTracker {
    pair: Option<PinchPair>,
}

impl PinchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_in_progress(&self) -> bool {
        self.pair.is_some()
    }

    /// Pivot captured at the start of the pinch or by the latest update
    pub fn focus(&self) -> Option<Point> {
        self.pair.map(|pair| pair.focus)
    }

    /// Ids of the tracked pair
    pub fn pointers(&self) -> Option<(PointerId, PointerId)> {
        self.pair.map(|pair| (pair.first, pair.second))
    }

    /// Start (or restart) tracking `first` and `second`
    pub fn begin(&mut self, first: &TouchPointer, second: &TouchPointer) {
        let span = second.raw - first.raw;
        let focus = first.position.midpoint(second.position);
        tracing::debug!(
            first = first.id,
            second = second.id,
            span = span.length(),
            "pinch begin"
        );
        self.pair = Some(PinchPair {
            first: first.id,
            second: second.id,
            prev_span: span,
            focus,
        });
    }

    /// Advance with the current positions of the tracked pair.
    ///
    /// Returns `None` when no pinch is in progress.
    pub fn update(&mut self, first: &TouchPointer, second: &TouchPointer) -> Option<PinchUpdate> {
        let pair = self.pair.as_mut()?;
        let span = second.raw - first.raw;
        let prev_len = pair.prev_span.length();
        let len = span.length();
        let scale_factor = if prev_len > 0.0 && len > 0.0 {
            len / prev_len
        } else {
            1.0
        };
        let angle = angle_between(pair.prev_span, span);
        let focus = first.position.midpoint(second.position);

        pair.prev_span = span;
        pair.focus = focus;

        Some(PinchUpdate {
            scale_factor,
            angle,
            focus,
        })
    }

    pub fn end(&mut self) {
        if self.pair.take().is_some() {
            tracing::debug!("pinch end");
        }
    }
}
