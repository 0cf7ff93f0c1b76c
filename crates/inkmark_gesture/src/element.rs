//! Overlaid elements

use inkmark_animation::{Easing, Tween};
use inkmark_core::{ElementId, ElementKind};
use inkmark_paint::{Color, Point, Rect, Size, Transform2D};

use crate::transform::ElementTransform;

/// What an element displays
#[derive(Clone, Debug, PartialEq)]
pub enum ElementContent {
    Text { text: String, color: Color },
    Emoji { glyph: String },
    /// Bitmap resolved by the host through `key`
    Image { key: String },
}

/// A text, emoji or image sticker placed over the photo
#[derive(Debug)]
pub struct OverlayElement {
    id: ElementId,
    kind: ElementKind,
    content: ElementContent,
    size: Size,
    /// Laid-out top-left corner in screen space
    origin: Point,
    transform: ElementTransform,
    snap_back: Option<Tween>,
}

impl OverlayElement {
    fn with_kind(
        id: ElementId,
        kind: ElementKind,
        content: ElementContent,
        size: Size,
        origin: Point,
    ) -> Self {
        Self {
            id,
            kind,
            content,
            size,
            origin,
            transform: ElementTransform::new(size.center()),
            snap_back: None,
        }
    }

    pub fn text(id: ElementId, text: impl Into<String>, color: Color, size: Size, origin: Point) -> Self {
        let content = ElementContent::Text {
            text: text.into(),
            color,
        };
        Self::with_kind(id, ElementKind::Text, content, size, origin)
    }

    pub fn emoji(id: ElementId, glyph: impl Into<String>, size: Size, origin: Point) -> Self {
        let content = ElementContent::Emoji {
            glyph: glyph.into(),
        };
        Self::with_kind(id, ElementKind::Emoji, content, size, origin)
    }

    pub fn image(id: ElementId, key: impl Into<String>, size: Size, origin: Point) -> Self {
        let content = ElementContent::Image { key: key.into() };
        Self::with_kind(id, ElementKind::Image, content, size, origin)
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn content(&self) -> &ElementContent {
        &self.content
    }

    /// Current text and color of a text element
    pub fn text_content(&self) -> Option<(&str, Color)> {
        match &self.content {
            ElementContent::Text { text, color } => Some((text.as_str(), *color)),
            _ => None,
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn transform(&self) -> &ElementTransform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut ElementTransform {
        &mut self.transform
    }

    /// Local space to screen space
    pub fn screen_matrix(&self) -> Transform2D {
        Transform2D::translate(self.origin.x, self.origin.y).multiply(&self.transform.matrix())
    }

    /// Screen point expressed in the element's local, untransformed space
    pub fn to_local(&self, screen: Point) -> Point {
        match self.screen_matrix().invert() {
            Some(inverse) => inverse.map_point(screen),
            None => screen - (self.origin - Point::ZERO),
        }
    }

    /// Axis-aligned screen bounds of the transformed element
    pub fn screen_bounds(&self) -> Rect {
        let m = self.screen_matrix();
        let Size { width, height } = self.size;
        Rect::bounding(&[
            m.map_point(Point::new(0.0, 0.0)),
            m.map_point(Point::new(width, 0.0)),
            m.map_point(Point::new(width, height)),
            m.map_point(Point::new(0.0, height)),
        ])
    }

    /// Animate the vertical translation back to zero
    pub fn start_snap_back(&mut self, duration_ms: u32) {
        let mut tween = Tween::new(
            self.transform.translation.y,
            0.0,
            duration_ms,
            Easing::AccelerateDecelerate,
        );
        tween.start();
        self.transform.translation.y = tween.value();
        self.snap_back = tween.is_playing().then_some(tween);
        tracing::debug!(duration_ms, "snap-back started");
    }

    pub fn cancel_snap_back(&mut self) {
        if self.snap_back.take().is_some() {
            tracing::debug!("snap-back cancelled");
        }
    }

    pub fn is_snapping_back(&self) -> bool {
        self.snap_back.is_some()
    }

    /// Advance animations; returns `true` while something is still moving
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        let Some(tween) = self.snap_back.as_mut() else {
            return false;
        };
        tween.tick(dt_ms);
        self.transform.translation.y = tween.value();
        if !tween.is_playing() {
            self.snap_back = None;
        }
        self.snap_back.is_some()
    }
}
