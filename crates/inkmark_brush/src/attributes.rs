//! Drawing attributes
//!
//! Pen and eraser widths are tracked independently so switching modes never
//! loses the other mode's size. A stroke never reads these directly; it takes
//! a [`StrokeStyle`] snapshot when it starts.

use inkmark_paint::{BlendMode, Color, LineCap, LineJoin, StrokeStyle};

pub const DEFAULT_PEN_WIDTH: f32 = 10.0;
pub const DEFAULT_ERASER_WIDTH: f32 = 100.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BrushMode {
    #[default]
    Draw,
    Erase,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrushAttributes {
    pub pen_width: f32,
    pub eraser_width: f32,
    pub pen_color: Color,
    pub mode: BrushMode,
}

impl Default for BrushAttributes {
    fn default() -> Self {
        Self {
            pen_width: DEFAULT_PEN_WIDTH,
            eraser_width: DEFAULT_ERASER_WIDTH,
            pen_color: Color::BLACK,
            mode: BrushMode::Draw,
        }
    }
}

impl BrushAttributes {
    /// Style of a pen stroke: darken-composite at the pen width
    pub fn pen(&self) -> StrokeStyle {
        StrokeStyle {
            color: self.pen_color,
            width: self.pen_width,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            blend: BlendMode::Darken,
        }
    }

    /// Style of an eraser stroke: clears destination pixels at the eraser width
    pub fn eraser(&self) -> StrokeStyle {
        StrokeStyle {
            width: self.eraser_width,
            blend: BlendMode::Clear,
            ..self.pen()
        }
    }

    /// Style selected by the current mode
    pub fn snapshot(&self) -> StrokeStyle {
        match self.mode {
            BrushMode::Draw => self.pen(),
            BrushMode::Erase => self.eraser(),
        }
    }
}
