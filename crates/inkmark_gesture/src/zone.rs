//! On-screen regions used for drop hit testing

use inkmark_paint::{Point, Rect, Size};

/// A widget's drawing area placed at an on-screen offset
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenRegion {
    pub size: Size,
    pub screen_offset: Point,
}

impl ScreenRegion {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            screen_offset: Point::new(x, y),
        }
    }

    /// Drawing area in the widget's own coordinates
    pub fn drawing_rect(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.size)
    }

    /// Drawing area translated by the on-screen offset
    pub fn screen_bounds(&self) -> Rect {
        self.drawing_rect()
            .offset(self.screen_offset.x, self.screen_offset.y)
    }

    pub fn contains(&self, screen_point: Point) -> bool {
        self.screen_bounds().contains(screen_point)
    }
}
