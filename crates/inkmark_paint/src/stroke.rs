//! Stroke style and blend modes

use crate::color::Color;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    #[default]
    Round,
    Square,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineJoin {
    Miter,
    #[default]
    Round,
    Bevel,
}

/// Pixel-compositing rule used when a stroke lands on a surface
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlendMode {
    /// Keep the darker of source and destination per channel
    #[default]
    Darken,
    /// Clear destination pixels under the stroke
    Clear,
}

impl BlendMode {
    fn to_skia(self) -> tiny_skia::BlendMode {
        match self {
            BlendMode::Darken => tiny_skia::BlendMode::Darken,
            BlendMode::Clear => tiny_skia::BlendMode::Clear,
        }
    }
}

/// Immutable stroke attributes captured for one stroke
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
    pub blend: BlendMode,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 10.0,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            blend: BlendMode::Darken,
        }
    }
}

impl StrokeStyle {
    pub(crate) fn to_skia_paint(&self) -> tiny_skia::Paint<'static> {
        let mut paint = tiny_skia::Paint::default();
        paint.set_color(self.color.to_skia());
        paint.anti_alias = true;
        paint.blend_mode = self.blend.to_skia();
        paint
    }

    pub(crate) fn to_skia_stroke(&self) -> tiny_skia::Stroke {
        tiny_skia::Stroke {
            width: self.width.max(0.0),
            line_cap: match self.line_cap {
                LineCap::Butt => tiny_skia::LineCap::Butt,
                LineCap::Round => tiny_skia::LineCap::Round,
                LineCap::Square => tiny_skia::LineCap::Square,
            },
            line_join: match self.line_join {
                LineJoin::Miter => tiny_skia::LineJoin::Miter,
                LineJoin::Round => tiny_skia::LineJoin::Round,
                LineJoin::Bevel => tiny_skia::LineJoin::Bevel,
            },
            ..tiny_skia::Stroke::default()
        }
    }
}
