//! Touch input model
//!
//! Platform-agnostic mirror of a multi-pointer motion event. Every event
//! carries the full set of pointers currently on the screen, including the
//! pointer that is going down or lifting on this event.

use inkmark_paint::Point;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Pointer identifier, stable for the lifetime of one finger on the screen
pub type PointerId = i32;

/// A single pointer sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPointer {
    /// Pointer ID (for multi-touch)
    pub id: PointerId,
    /// Position in the receiving element's local, untransformed space
    pub position: Point,
    /// Position in global screen space
    pub raw: Point,
}

impl TouchPointer {
    pub fn new(id: PointerId, position: Point, raw: Point) -> Self {
        Self { id, position, raw }
    }

    /// Pointer whose local and screen positions coincide
    pub fn at(id: PointerId, x: f32, y: f32) -> Self {
        let p = Point::new(x, y);
        Self::new(id, p, p)
    }
}

/// Touch action kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TouchAction {
    /// First pointer went down
    Down,
    /// One or more pointers moved
    Move,
    /// Last pointer lifted
    Up,
    /// Gesture aborted by the input source
    Cancel,
    /// An additional pointer went down
    PointerDown,
    /// A non-last pointer lifted
    PointerUp,
}

/// A touch event delivered to one element or to the brush layer
#[derive(Debug, Clone)]
pub struct TouchEvent {
    pub action: TouchAction,
    /// Index into `pointers` of the pointer that triggered `action`
    pub action_index: usize,
    pub pointers: SmallVec<[TouchPointer; 4]>,
}

impl TouchEvent {
    pub fn new(action: TouchAction, action_index: usize, pointers: &[TouchPointer]) -> Self {
        Self {
            action,
            action_index,
            pointers: SmallVec::from_slice(pointers),
        }
    }

    /// Single-pointer event
    pub fn single(action: TouchAction, pointer: TouchPointer) -> Self {
        Self::new(action, 0, &[pointer])
    }

    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// The pointer that triggered this event
    pub fn action_pointer(&self) -> Option<&TouchPointer> {
        self.pointers.get(self.action_index)
    }

    /// First pointer in the event
    pub fn primary(&self) -> Option<&TouchPointer> {
        self.pointers.first()
    }

    pub fn find(&self, id: PointerId) -> Option<&TouchPointer> {
        self.pointers.iter().find(|p| p.id == id)
    }

    /// Pointers still on the screen after this event is processed
    pub fn remaining_pointers(&self) -> impl Iterator<Item = &TouchPointer> {
        let lifted = match self.action {
            TouchAction::Up | TouchAction::PointerUp => Some(self.action_index),
            _ => None,
        };
        self.pointers
            .iter()
            .enumerate()
            .filter(move |(i, _)| Some(*i) != lifted)
            .map(|(_, p)| p)
    }
}
