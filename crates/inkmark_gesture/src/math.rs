//! Angle and scale saturation helpers

use inkmark_paint::Vector2D;

/// Wrap an angle in degrees into `(-180, 180]`
pub fn normalize_degrees(degrees: f32) -> f32 {
    let mut wrapped = degrees % 360.0;
    if wrapped > 180.0 {
        wrapped -= 360.0;
    } else if wrapped <= -180.0 {
        wrapped += 360.0;
    }
    wrapped
}

/// Signed angle in degrees that rotates `from` onto `to`.
///
/// Magnitude comes from the dot product (law of cosines), direction from the
/// cross product; positive is clockwise on a y-down screen. Degenerate
/// (zero-length) vectors yield `0.0`.
pub fn angle_between(from: Vector2D, to: Vector2D) -> f32 {
    let lengths = from.length() * to.length();
    if lengths == 0.0 || !lengths.is_finite() {
        return 0.0;
    }
    let cos = (from.dot(to) / lengths).clamp(-1.0, 1.0);
    let magnitude = cos.acos().to_degrees();
    let signed = if from.cross(to) < 0.0 {
        -magnitude
    } else {
        magnitude
    };
    normalize_degrees(signed)
}

/// Allowed scale range for an element
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLimits {
    pub min: f32,
    pub max: f32,
}

impl Default for ScaleLimits {
    fn default() -> Self {
        Self {
            min: 0.5,
            max: 10.0,
        }
    }
}

impl ScaleLimits {
    pub fn new(min: f32, max: f32) -> Self {
        Self {
            min: min.min(max),
            max: max.max(min),
        }
    }

    pub fn clamp(&self, scale: f32) -> f32 {
        if scale.is_nan() {
            return self.min;
        }
        scale.clamp(self.min, self.max)
    }
}
