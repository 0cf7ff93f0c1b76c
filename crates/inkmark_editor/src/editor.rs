//! Photo editor controller
//!
//! Owns the overlaid elements (each with its own gesture engine), the brush
//! layer and the delete-zone widget state. Touch streams are routed here and
//! forwarded to the right engine; removal and edit requests raised by an
//! engine are queued on the stage and applied once the engine returns.

use std::rc::Rc;

use inkmark_brush::{BrushMode, StrokeCompositor};
use inkmark_core::{
    EditorListener, ElementId, ElementKind, Notifier, PointerId, TouchAction, TouchEvent,
    TouchPointer,
};
use inkmark_gesture::{GestureTransformEngine, OverlayElement, OverlayHost, ScreenRegion};
use inkmark_paint::{Color, Point, RasterSurface, Rect, Size};
use slotmap::SlotMap;

use crate::config::EditorConfig;
use crate::emoji::decode_emoji_code;
use crate::error::{EditorError, Result};

/// Layout size of one text glyph; fonts are resolved by the host
const TEXT_GLYPH_SIZE: Size = Size::new(24.0, 48.0);
const EMOJI_SIZE: Size = Size::new(64.0, 64.0);
const DEFAULT_TEXT_COLOR: Color = Color::WHITE;

struct ElementSlot {
    element: OverlayElement,
    engine: GestureTransformEngine,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StageRequest {
    BringToFront(ElementId),
    Remove(ElementId),
    EditText(ElementId),
}

/// Host side of the gesture engines: drop regions, the delete-zone widget
/// and the queue of requests to apply after an engine call.
///
/// A delete-zone drop is reported as soon as the engine raises it, before the
/// engine's gesture-stop, and the element is detached afterwards.
#[derive(Debug)]
struct Stage {
    canvas: Rect,
    delete_zone: ScreenRegion,
    delete_zone_visible: bool,
    requests: Vec<StageRequest>,
    /// Element count as seen by the engine call in flight
    element_count: usize,
    notifier: Notifier,
}

impl OverlayHost for Stage {
    fn delete_zone_bounds(&self) -> Rect {
        self.delete_zone.screen_bounds()
    }

    fn canvas_bounds(&self) -> Rect {
        self.canvas
    }

    fn set_delete_zone_visible(&mut self, visible: bool) {
        self.delete_zone_visible = visible;
    }

    fn bring_to_front(&mut self, id: ElementId) {
        self.requests.push(StageRequest::BringToFront(id));
    }

    fn on_element_remove_requested(&mut self, id: ElementId) {
        if self.requests.contains(&StageRequest::Remove(id)) {
            return;
        }
        self.element_count = self.element_count.saturating_sub(1);
        tracing::info!(?id, total = self.element_count, "element dropped on delete zone");
        self.notifier.element_removed(self.element_count);
        self.requests.push(StageRequest::Remove(id));
    }

    fn on_text_edit_requested(&mut self, id: ElementId, _text: &str, _color: Color) {
        self.requests.push(StageRequest::EditText(id));
    }
}

pub struct PhotoEditor {
    config: EditorConfig,
    elements: SlotMap<ElementId, ElementSlot>,
    /// Insertion order, oldest first; drives undo
    added: Vec<ElementId>,
    /// Paint order, bottom first
    draw_order: Vec<ElementId>,
    stage: Stage,
    brush: StrokeCompositor,
    notifier: Notifier,
    needs_redraw: bool,
}

impl PhotoEditor {
    pub fn new(config: EditorConfig) -> Result<Self> {
        config.validate()?;
        let (width, height) = config.surface_size();
        let brush = StrokeCompositor::new(width, height)?.with_attributes(config.brush.attributes());
        let stage = Stage {
            canvas: config.canvas.rect(),
            delete_zone: config.delete_zone.region(),
            delete_zone_visible: false,
            requests: Vec::new(),
            element_count: 0,
            notifier: Notifier::new(),
        };
        tracing::info!(width, height, "photo editor created");
        Ok(Self {
            config,
            elements: SlotMap::with_key(),
            added: Vec::new(),
            draw_order: Vec::new(),
            stage,
            brush,
            notifier: Notifier::new(),
            needs_redraw: false,
        })
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Register the observer for the editor, every element engine and the
    /// brush layer
    pub fn set_listener(&mut self, listener: Rc<dyn EditorListener>) {
        self.notifier.set_listener(Some(listener));
        self.share_notifier();
    }

    pub fn clear_listener(&mut self) {
        self.notifier.set_listener(None);
        self.share_notifier();
    }

    fn share_notifier(&mut self) {
        for slot in self.elements.values_mut() {
            slot.engine.set_notifier(self.notifier.clone());
        }
        self.brush.set_notifier(self.notifier.clone());
        self.stage.notifier = self.notifier.clone();
    }

    // Elements

    /// Place an image sticker resolved by the host through `key`
    pub fn add_image(&mut self, key: &str, width: f32, height: f32) -> ElementId {
        let size = Size::new(width.max(0.0), height.max(0.0));
        let origin = self.centered_origin(size);
        self.insert(|id| OverlayElement::image(id, key, size, origin))
    }

    /// Place a text element; `None` uses the default text color
    pub fn add_text(&mut self, text: &str, color: Option<Color>) -> ElementId {
        let size = text_size(text);
        let origin = self.centered_origin(size);
        let color = color.unwrap_or(DEFAULT_TEXT_COLOR);
        self.insert(|id| OverlayElement::text(id, text, color, size, origin))
    }

    /// Place an emoji given as a `U+1F600` style code
    pub fn add_emoji(&mut self, code: &str) -> Result<ElementId> {
        let glyph = decode_emoji_code(code)?;
        let origin = self.centered_origin(EMOJI_SIZE);
        Ok(self.insert(|id| OverlayElement::emoji(id, glyph, EMOJI_SIZE, origin)))
    }

    fn insert(&mut self, build: impl FnOnce(ElementId) -> OverlayElement) -> ElementId {
        let settings = self.config.gesture.settings();
        let notifier = self.notifier.clone();
        let id = self.elements.insert_with_key(|id| ElementSlot {
            element: build(id),
            engine: GestureTransformEngine::new(settings).with_notifier(notifier),
        });
        self.added.push(id);
        self.draw_order.push(id);
        self.needs_redraw = true;

        let kind = self.elements[id].element.kind();
        tracing::info!(?kind, total = self.elements.len(), "element added");
        self.notifier.element_added(kind.into(), self.elements.len());
        id
    }

    fn centered_origin(&self, size: Size) -> Point {
        let center = self.stage.canvas.center();
        Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0)
    }

    /// Remove the most recently added element still present
    pub fn undo(&mut self) -> bool {
        match self.added.last().copied() {
            Some(id) => self.remove_element(id),
            None => {
                tracing::debug!("nothing to undo");
                false
            }
        }
    }

    /// Remove `id` and notify. Absent elements are ignored.
    pub fn remove_element(&mut self, id: ElementId) -> bool {
        if !self.detach(id) {
            tracing::debug!(?id, "remove ignored: element not present");
            return false;
        }
        tracing::info!(?id, total = self.elements.len(), "element removed");
        self.notifier.element_removed(self.elements.len());
        true
    }

    fn detach(&mut self, id: ElementId) -> bool {
        if self.elements.remove(id).is_none() {
            return false;
        }
        self.added.retain(|other| *other != id);
        self.draw_order.retain(|other| *other != id);
        self.needs_redraw = true;
        true
    }

    /// Remove every element and blank the brush layer
    pub fn clear_all(&mut self) {
        let removed = self.elements.len();
        self.elements.clear();
        self.added.clear();
        self.draw_order.clear();
        self.stage.delete_zone_visible = false;
        self.brush.clear();
        self.needs_redraw = true;
        tracing::info!(removed, "all elements cleared");
        if removed > 0 {
            self.notifier.element_removed(0);
        }
    }

    /// Blank the brush layer only
    pub fn clear_brush(&mut self) {
        self.brush.clear();
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn element(&self, id: ElementId) -> Option<&OverlayElement> {
        self.elements.get(id).map(|slot| &slot.element)
    }

    /// Id of the `index`-th element in insertion order
    pub fn element_id_at(&self, index: usize) -> Result<ElementId> {
        self.added
            .get(index)
            .copied()
            .ok_or(EditorError::UnknownElement)
    }

    /// Elements bottom to top
    pub fn elements_in_draw_order(&self) -> impl Iterator<Item = &OverlayElement> + '_ {
        self.draw_order
            .iter()
            .filter_map(|id| self.elements.get(*id))
            .map(|slot| &slot.element)
    }

    pub fn is_delete_zone_visible(&self) -> bool {
        self.stage.delete_zone_visible
    }

    // Input

    /// Route a touch event to the engine of `id`. Positions must already be
    /// in the element's local space.
    pub fn handle_element_touch(&mut self, id: ElementId, event: &TouchEvent) -> bool {
        self.stage.element_count = self.elements.len();
        let Some(slot) = self.elements.get_mut(id) else {
            tracing::warn!(?id, action = ?event.action, "touch for unknown element");
            return false;
        };
        let handled = slot.engine.on_touch(&mut slot.element, event, &mut self.stage);
        self.needs_redraw = true;
        self.apply_stage_requests();
        handled
    }

    /// Route a touch event given in screen coordinates. Local positions are
    /// derived through the element's current transform.
    pub fn handle_element_touch_screen(
        &mut self,
        id: ElementId,
        action: TouchAction,
        action_index: usize,
        screen_points: &[(PointerId, Point)],
    ) -> bool {
        let Some(slot) = self.elements.get(id) else {
            tracing::warn!(?id, ?action, "touch for unknown element");
            return false;
        };
        let pointers: Vec<TouchPointer> = screen_points
            .iter()
            .map(|&(pointer, raw)| TouchPointer::new(pointer, slot.element.to_local(raw), raw))
            .collect();
        let event = TouchEvent::new(action, action_index, &pointers);
        self.handle_element_touch(id, &event)
    }

    /// Route a touch event to the brush layer
    pub fn handle_brush_touch(&mut self, event: &TouchEvent) -> bool {
        self.brush.on_touch(event)
    }

    fn apply_stage_requests(&mut self) {
        for request in std::mem::take(&mut self.stage.requests) {
            match request {
                StageRequest::BringToFront(id) => {
                    if let Some(pos) = self.draw_order.iter().position(|other| *other == id) {
                        let id = self.draw_order.remove(pos);
                        self.draw_order.push(id);
                    }
                }
                StageRequest::Remove(id) => {
                    self.detach(id);
                }
                StageRequest::EditText(id) => {
                    let is_text = self
                        .element(id)
                        .is_some_and(|element| element.kind() == ElementKind::Text);
                    // Handed back to the host for editing; it re-adds the result
                    if is_text && self.detach(id) {
                        tracing::info!(?id, "text element taken for editing");
                    }
                }
            }
        }
    }

    // Frames

    /// Advance element animations
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        let mut animating = false;
        for slot in self.elements.values_mut() {
            if !slot.element.is_snapping_back() {
                continue;
            }
            animating |= slot.element.tick(dt_ms);
            self.needs_redraw = true;
        }
        animating
    }

    /// Returns and clears the coalesced redraw flag
    pub fn take_redraw_request(&mut self) -> bool {
        let brush = self.brush.take_redraw_request();
        std::mem::take(&mut self.needs_redraw) | brush
    }

    /// Brush layer frame: committed strokes with the stroke in progress on top
    pub fn render_frame(&self) -> Result<RasterSurface> {
        Ok(self.brush.render_frame()?)
    }

    pub fn brush(&self) -> &StrokeCompositor {
        &self.brush
    }

    // Brush settings

    pub fn set_brush_drawing_mode(&mut self, enabled: bool) {
        self.brush.set_enabled(enabled);
    }

    pub fn brush_drawing_mode(&self) -> bool {
        self.brush.is_enabled()
    }

    pub fn brush_size(&self) -> f32 {
        self.brush.pen_width()
    }

    pub fn set_brush_size(&mut self, size: f32) {
        self.brush.set_pen_width(size);
    }

    pub fn eraser_size(&self) -> f32 {
        self.brush.eraser_width()
    }

    pub fn set_eraser_size(&mut self, size: f32) {
        self.brush.set_eraser_width(size);
    }

    pub fn brush_color(&self) -> Color {
        self.brush.pen_color()
    }

    pub fn set_brush_color(&mut self, color: Color) {
        self.brush.set_pen_color(color);
    }

    /// Switch the brush to the eraser
    pub fn brush_eraser(&mut self) {
        self.brush.set_eraser_mode();
    }

    pub fn brush_mode(&self) -> BrushMode {
        self.brush.mode()
    }

    /// Resize the photo canvas. Brush content is discarded.
    pub fn resize_canvas(&mut self, width: f32, height: f32) -> Result<()> {
        let canvas = Rect::new(self.stage.canvas.x, self.stage.canvas.y, width, height);
        self.brush
            .resize(width.ceil().max(0.0) as u32, height.ceil().max(0.0) as u32)?;
        self.stage.canvas = canvas;
        self.config.canvas.width = width;
        self.config.canvas.height = height;
        Ok(())
    }
}

fn text_size(text: &str) -> Size {
    let columns = text
        .lines()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0)
        .max(1);
    let rows = text.lines().count().max(1);
    Size::new(
        TEXT_GLYPH_SIZE.width * columns as f32,
        TEXT_GLYPH_SIZE.height * rows as f32,
    )
}

impl std::fmt::Debug for PhotoEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhotoEditor")
            .field("elements", &self.elements.len())
            .field("brush", &self.brush)
            .field("stage", &self.stage)
            .finish()
    }
}
