//! Element transform state
//!
//! The element's matrix maps its local, untransformed coordinates into the
//! coordinates of its laid-out box:
//!
//! `M = T(translation + pivot) * R(rotation) * S(scale) * T(-pivot)`

use inkmark_paint::{Point, Transform2D, Vector2D};

use crate::math::{normalize_degrees, ScaleLimits};

/// Transform owned by an overlaid element
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementTransform {
    /// Point about which scale and rotation apply, in local space
    pub pivot: Point,
    /// Uniform scale factor
    pub scale: f32,
    /// Rotation in degrees, within `(-180, 180]`
    pub rotation: f32,
    pub translation: Vector2D,
}

impl Default for ElementTransform {
    fn default() -> Self {
        Self::new(Point::ZERO)
    }
}

impl ElementTransform {
    pub fn new(pivot: Point) -> Self {
        Self {
            pivot,
            scale: 1.0,
            rotation: 0.0,
            translation: Vector2D::ZERO,
        }
    }

    pub fn matrix(&self) -> Transform2D {
        Transform2D::translate(
            self.translation.x + self.pivot.x,
            self.translation.y + self.pivot.y,
        )
        .multiply(&Transform2D::rotate_degrees(self.rotation))
        .multiply(&Transform2D::scale_uniform(self.scale))
        .multiply(&Transform2D::translate(-self.pivot.x, -self.pivot.y))
    }

    /// Add a local-space delta to the translation, expressed through the
    /// current rotation and scale
    pub fn adjust_translation(&mut self, delta: Vector2D) {
        let mapped = self.matrix().map_vector(delta);
        self.translation = self.translation + mapped;
    }

    /// Move the pivot while keeping every point of the element where it is on
    /// screen. The compensating translation is the drift of the local origin
    /// caused by the pivot change.
    pub fn set_pivot(&mut self, pivot: Point) {
        if self.pivot == pivot {
            return;
        }
        let before = self.matrix().map_point(Point::ZERO);
        self.pivot = pivot;
        let after = self.matrix().map_point(Point::ZERO);
        self.translation = self.translation - (after - before);
    }

    pub fn set_scale(&mut self, scale: f32, limits: ScaleLimits) {
        self.scale = limits.clamp(scale);
    }

    pub fn set_rotation(&mut self, degrees: f32) {
        self.rotation = normalize_degrees(degrees);
    }

    /// Apply one pinch frame: re-pivot, then scale and rotate.
    pub fn apply_pinch(&mut self, pivot: Point, scale_factor: f32, angle: f32, limits: ScaleLimits) {
        self.set_pivot(pivot);
        self.set_scale(self.scale * scale_factor, limits);
        self.set_rotation(self.rotation + angle);
    }
}
