//! Stroke compositor
//!
//! Capture state machine:
//!
//! ```text
//! Disabled --set_enabled(true)--> Idle --Down--> Stroking --Up--> Idle
//!     ^                            |                |
//!     +------set_enabled(false)----+----------------+
//! ```
//!
//! Touch positions are in the brush layer's own coordinates, which coincide
//! with the raster surface's pixel grid.

use inkmark_core::{Notifier, TouchAction, TouchEvent, ViewKind};
use inkmark_paint::{Color, Path, Point, RasterSurface, Result, StrokeStyle};

use crate::attributes::{BrushAttributes, BrushMode};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CaptureState {
    /// Touch input is ignored
    Disabled,
    /// Listening for the next stroke
    Idle,
    /// A stroke is in progress, drawn with the style captured at its start
    Stroking(StrokeStyle),
}

#[derive(Debug)]
pub struct StrokeCompositor {
    surface: RasterSurface,
    path: Path,
    attributes: BrushAttributes,
    state: CaptureState,
    visible: bool,
    needs_redraw: bool,
    notifier: Notifier,
}

impl StrokeCompositor {
    /// Create a hidden, disabled compositor with a blank surface
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Self {
            surface: RasterSurface::new(width, height)?,
            path: Path::new(),
            attributes: BrushAttributes::default(),
            state: CaptureState::Disabled,
            visible: false,
            needs_redraw: false,
            notifier: Notifier::new(),
        })
    }

    pub fn with_attributes(mut self, attributes: BrushAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn set_notifier(&mut self, notifier: Notifier) {
        self.notifier = notifier;
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    pub fn is_enabled(&self) -> bool {
        self.state != CaptureState::Disabled
    }

    pub fn is_stroking(&self) -> bool {
        matches!(self.state, CaptureState::Stroking(_))
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn attributes(&self) -> &BrushAttributes {
        &self.attributes
    }

    /// Committed strokes only
    pub fn surface(&self) -> &RasterSurface {
        &self.surface
    }

    /// The stroke being drawn, empty between strokes
    pub fn current_path(&self) -> &Path {
        &self.path
    }

    /// Turn capture on or off.
    ///
    /// Enabling shows the layer and switches back to pen mode; committed
    /// content is kept. Disabling mid-stroke discards the uncommitted path.
    pub fn set_enabled(&mut self, enabled: bool) {
        if enabled {
            self.visible = true;
            self.attributes.mode = BrushMode::Draw;
            if self.state == CaptureState::Disabled {
                self.state = CaptureState::Idle;
            }
            tracing::debug!("brush capture enabled");
        } else {
            if self.is_stroking() {
                self.discard_stroke();
            }
            self.state = CaptureState::Disabled;
            tracing::debug!("brush capture disabled");
        }
    }

    pub fn pen_width(&self) -> f32 {
        self.attributes.pen_width
    }

    /// Set the pen width and switch to pen mode
    pub fn set_pen_width(&mut self, width: f32) {
        self.attributes.pen_width = width;
        self.attributes.mode = BrushMode::Draw;
    }

    pub fn eraser_width(&self) -> f32 {
        self.attributes.eraser_width
    }

    pub fn set_eraser_width(&mut self, width: f32) {
        self.attributes.eraser_width = width;
    }

    pub fn pen_color(&self) -> Color {
        self.attributes.pen_color
    }

    /// Set the pen color and switch to pen mode
    pub fn set_pen_color(&mut self, color: Color) {
        self.attributes.pen_color = color;
        self.attributes.mode = BrushMode::Draw;
    }

    pub fn mode(&self) -> BrushMode {
        self.attributes.mode
    }

    pub fn set_draw_mode(&mut self) {
        self.attributes.mode = BrushMode::Draw;
    }

    pub fn set_eraser_mode(&mut self) {
        self.attributes.mode = BrushMode::Erase;
    }

    /// Feed one touch event. Returns `false` only while disabled.
    pub fn on_touch(&mut self, event: &TouchEvent) -> bool {
        if !self.is_enabled() {
            return false;
        }
        let Some(point) = event.primary().map(|p| p.position) else {
            return true;
        };

        match event.action {
            TouchAction::Down => self.begin_stroke(point),
            TouchAction::Move => {
                if self.is_stroking() {
                    self.path.line_to(point);
                    self.needs_redraw = true;
                }
            }
            TouchAction::Up => {
                if let CaptureState::Stroking(style) = self.state {
                    self.commit_stroke(&style);
                }
            }
            TouchAction::Cancel => {
                if self.is_stroking() {
                    self.discard_stroke();
                }
            }
            TouchAction::PointerDown | TouchAction::PointerUp => {}
        }
        true
    }

    fn begin_stroke(&mut self, point: Point) {
        // A second down without an up: drop the unfinished stroke so starts
        // and stops stay paired
        if self.is_stroking() {
            self.discard_stroke();
        }
        let style = self.attributes.snapshot();
        self.path.reset();
        self.path.move_to(point);
        self.state = CaptureState::Stroking(style);
        self.needs_redraw = true;
        tracing::trace!(x = point.x, y = point.y, mode = ?self.attributes.mode, "stroke begin");
        self.notifier.gesture_started(ViewKind::Brush);
    }

    fn commit_stroke(&mut self, style: &StrokeStyle) {
        let drawn = self.surface.stroke_path(&self.path, style);
        tracing::debug!(segments = self.path.len(), drawn, blend = ?style.blend, "stroke committed");
        self.path.reset();
        self.state = CaptureState::Idle;
        self.needs_redraw = true;
        self.notifier.gesture_stopped(ViewKind::Brush);
    }

    fn discard_stroke(&mut self) {
        tracing::debug!(segments = self.path.len(), "stroke discarded");
        self.path.reset();
        self.state = CaptureState::Idle;
        self.needs_redraw = true;
        self.notifier.gesture_stopped(ViewKind::Brush);
    }

    /// Blank the committed surface. The stroke in progress is kept.
    pub fn clear(&mut self) {
        self.surface.clear();
        self.needs_redraw = true;
        tracing::debug!("brush surface cleared");
    }

    /// Recreate the surface at a new size. Committed content is lost.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if width == self.surface.width() && height == self.surface.height() {
            return Ok(());
        }
        self.surface = RasterSurface::new(width, height)?;
        self.needs_redraw = true;
        tracing::debug!(width, height, "brush surface resized");
        Ok(())
    }

    /// Returns and clears the pending redraw flag. Requests made since the
    /// last call coalesce into one.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Draw the committed surface, then the stroke in progress, into `target`
    pub fn render_into(&self, target: &mut RasterSurface) {
        target.clear();
        if !self.visible {
            return;
        }
        target.draw_surface(&self.surface);
        if let CaptureState::Stroking(style) = &self.state {
            target.stroke_path(&self.path, style);
        }
    }

    /// Render the current frame into a new surface
    pub fn render_frame(&self) -> Result<RasterSurface> {
        let mut frame = RasterSurface::new(self.surface.width(), self.surface.height())?;
        self.render_into(&mut frame);
        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkmark_core::{Notification, NotificationLog, TouchPointer};
    use std::rc::Rc;

    fn touch(action: TouchAction, x: f32, y: f32) -> TouchEvent {
        TouchEvent::single(action, TouchPointer::at(0, x, y))
    }

    fn stroke(compositor: &mut StrokeCompositor, from: (f32, f32), to: (f32, f32)) {
        compositor.on_touch(&touch(TouchAction::Down, from.0, from.1));
        compositor.on_touch(&touch(TouchAction::Move, to.0, to.1));
        compositor.on_touch(&touch(TouchAction::Up, to.0, to.1));
    }

    fn enabled(width: u32, height: u32) -> StrokeCompositor {
        let mut compositor = StrokeCompositor::new(width, height).unwrap();
        compositor.set_enabled(true);
        compositor
    }

    #[test]
    fn test_starts_hidden_and_disabled() {
        let compositor = StrokeCompositor::new(10, 10).unwrap();
        assert!(!compositor.is_enabled());
        assert!(!compositor.is_visible());
        assert!(StrokeCompositor::new(0, 10).is_err());
    }

    #[test]
    fn test_disabled_ignores_touches() {
        let mut compositor = StrokeCompositor::new(32, 32).unwrap();
        assert!(!compositor.on_touch(&touch(TouchAction::Down, 2.0, 16.0)));
        assert!(!compositor.on_touch(&touch(TouchAction::Move, 30.0, 16.0)));
        assert!(!compositor.on_touch(&touch(TouchAction::Up, 30.0, 16.0)));
        assert!(compositor.surface().is_blank());
        assert!(!compositor.take_redraw_request());
    }

    #[test]
    fn test_stroke_commits_on_up() {
        let mut compositor = enabled(32, 32);
        compositor.on_touch(&touch(TouchAction::Down, 2.0, 16.0));
        compositor.on_touch(&touch(TouchAction::Move, 30.0, 16.0));
        assert!(compositor.surface().is_blank());
        assert_eq!(compositor.current_path().len(), 2);

        compositor.on_touch(&touch(TouchAction::Up, 30.0, 16.0));
        assert!(!compositor.surface().is_blank());
        assert!(compositor.current_path().is_empty());
        assert_eq!(compositor.state(), CaptureState::Idle);
    }

    #[test]
    fn test_frame_shows_uncommitted_stroke() {
        let mut compositor = enabled(32, 32);
        compositor.on_touch(&touch(TouchAction::Down, 2.0, 16.0));
        compositor.on_touch(&touch(TouchAction::Move, 30.0, 16.0));

        let frame = compositor.render_frame().unwrap();
        assert_eq!(frame.pixel(16, 16).map(|p| p[3]), Some(255));
        assert!(compositor.surface().is_blank());
    }

    #[test]
    fn test_clear_after_strokes_matches_fresh_surface() {
        let mut compositor = enabled(40, 40);
        let fresh = RasterSurface::new(40, 40).unwrap();
        for y in [5.0, 15.0, 25.0] {
            stroke(&mut compositor, (0.0, y), (40.0, y));
        }
        compositor.set_eraser_mode();
        compositor.set_eraser_width(4.0);
        stroke(&mut compositor, (0.0, 15.0), (40.0, 15.0));
        assert!(!compositor.surface().is_blank());

        compositor.clear();
        assert_eq!(compositor.surface().data(), fresh.data());
        assert!(compositor.take_redraw_request());
    }

    #[test]
    fn test_eraser_clears_committed_pixels() {
        let mut compositor = enabled(40, 40);
        compositor.set_pen_width(12.0);
        stroke(&mut compositor, (0.0, 20.0), (40.0, 20.0));
        assert_eq!(compositor.surface().pixel(20, 20).map(|p| p[3]), Some(255));

        compositor.set_eraser_width(30.0);
        compositor.set_eraser_mode();
        stroke(&mut compositor, (0.0, 20.0), (40.0, 20.0));
        assert_eq!(compositor.surface().pixel(20, 20), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_mode_round_trip_preserves_pen() {
        let mut compositor = enabled(8, 8);
        compositor.set_pen_width(7.5);
        compositor.set_pen_color(Color::RED);
        let before = compositor.attributes().pen();

        compositor.set_eraser_mode();
        assert_eq!(compositor.attributes().snapshot().width, 100.0);
        compositor.set_draw_mode();

        assert_eq!(compositor.attributes().snapshot(), before);
        assert_eq!(compositor.pen_width(), 7.5);
        assert_eq!(compositor.pen_color(), Color::RED);
    }

    #[test]
    fn test_pen_setters_leave_erase_mode() {
        let mut compositor = enabled(8, 8);
        compositor.set_eraser_mode();
        compositor.set_pen_color(Color::RED);
        assert_eq!(compositor.mode(), BrushMode::Draw);

        compositor.set_eraser_mode();
        compositor.set_eraser_width(50.0);
        assert_eq!(compositor.mode(), BrushMode::Erase);
        compositor.set_pen_width(3.0);
        assert_eq!(compositor.mode(), BrushMode::Draw);
    }

    #[test]
    fn test_attributes_snapshot_at_stroke_start() {
        let mut compositor = enabled(8, 8);
        compositor.on_touch(&touch(TouchAction::Down, 1.0, 1.0));
        compositor.set_pen_width(42.0);
        let CaptureState::Stroking(style) = compositor.state() else {
            panic!("expected a stroke in progress");
        };
        assert_eq!(style.width, 10.0);
    }

    #[test]
    fn test_enable_resets_to_pen_and_keeps_content() {
        let mut compositor = enabled(32, 32);
        stroke(&mut compositor, (0.0, 16.0), (32.0, 16.0));
        compositor.set_eraser_mode();
        compositor.set_enabled(false);
        assert!(compositor.is_visible());

        compositor.set_enabled(true);
        assert_eq!(compositor.mode(), BrushMode::Draw);
        assert!(!compositor.surface().is_blank());
    }

    #[test]
    fn test_notifications() {
        let log = Rc::new(NotificationLog::new());
        let mut compositor = enabled(16, 16);
        compositor.set_notifier(Notifier::with_listener(log.clone()));

        stroke(&mut compositor, (1.0, 8.0), (15.0, 8.0));
        assert_eq!(
            log.take(),
            vec![
                Notification::GestureStarted {
                    kind: ViewKind::Brush
                },
                Notification::GestureStopped {
                    kind: ViewKind::Brush
                },
            ]
        );
    }

    #[test]
    fn test_cancel_discards_stroke() {
        let log = Rc::new(NotificationLog::new());
        let mut compositor = enabled(16, 16);
        compositor.set_notifier(Notifier::with_listener(log.clone()));

        compositor.on_touch(&touch(TouchAction::Down, 1.0, 8.0));
        compositor.on_touch(&touch(TouchAction::Move, 15.0, 8.0));
        compositor.on_touch(&touch(TouchAction::Cancel, 15.0, 8.0));

        assert!(compositor.surface().is_blank());
        assert!(compositor.current_path().is_empty());
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_repeated_down_restarts_stroke() {
        let log = Rc::new(NotificationLog::new());
        let mut compositor = enabled(16, 16);
        compositor.set_notifier(Notifier::with_listener(log.clone()));

        compositor.on_touch(&touch(TouchAction::Down, 1.0, 4.0));
        compositor.on_touch(&touch(TouchAction::Move, 15.0, 4.0));
        compositor.on_touch(&touch(TouchAction::Down, 1.0, 12.0));
        assert_eq!(compositor.current_path().len(), 1);
        compositor.on_touch(&touch(TouchAction::Up, 1.0, 12.0));

        assert_eq!(
            log.take(),
            vec![
                Notification::GestureStarted { kind: ViewKind::Brush },
                Notification::GestureStopped { kind: ViewKind::Brush },
                Notification::GestureStarted { kind: ViewKind::Brush },
                Notification::GestureStopped { kind: ViewKind::Brush },
            ]
        );
        // Nothing of the abandoned stroke was committed
        assert_eq!(compositor.surface().pixel(8, 4).map(|p| p[3]), Some(0));
    }

    #[test]
    fn test_disable_mid_stroke_discards() {
        let mut compositor = enabled(16, 16);
        compositor.on_touch(&touch(TouchAction::Down, 1.0, 8.0));
        compositor.on_touch(&touch(TouchAction::Move, 15.0, 8.0));
        compositor.set_enabled(false);
        compositor.on_touch(&touch(TouchAction::Up, 15.0, 8.0));
        assert!(compositor.surface().is_blank());
        assert_eq!(compositor.state(), CaptureState::Disabled);
    }

    #[test]
    fn test_clear_keeps_stroke_in_progress() {
        let mut compositor = enabled(16, 16);
        compositor.on_touch(&touch(TouchAction::Down, 1.0, 8.0));
        compositor.on_touch(&touch(TouchAction::Move, 15.0, 8.0));
        compositor.clear();
        assert_eq!(compositor.current_path().len(), 2);
        compositor.on_touch(&touch(TouchAction::Up, 15.0, 8.0));
        assert!(!compositor.surface().is_blank());
    }

    #[test]
    fn test_resize_drops_content() {
        let mut compositor = enabled(16, 16);
        stroke(&mut compositor, (1.0, 8.0), (15.0, 8.0));
        compositor.resize(24, 12).unwrap();
        assert_eq!(compositor.surface().width(), 24);
        assert!(compositor.surface().is_blank());
        assert!(compositor.resize(0, 12).is_err());
    }

    #[test]
    fn test_secondary_pointer_is_consumed_but_ignored() {
        let mut compositor = enabled(16, 16);
        compositor.on_touch(&touch(TouchAction::Down, 1.0, 8.0));
        let second = TouchEvent::new(
            TouchAction::PointerDown,
            1,
            &[TouchPointer::at(0, 1.0, 8.0), TouchPointer::at(1, 10.0, 10.0)],
        );
        assert!(compositor.on_touch(&second));
        assert_eq!(compositor.current_path().len(), 1);
    }
}
