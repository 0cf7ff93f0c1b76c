//! Capabilities the gesture engine needs from the element's owner

use inkmark_core::ElementId;
use inkmark_paint::{Color, Rect};

/// Implemented by the controller that owns the overlaid elements and the
/// delete-zone widget.
///
/// The engine never removes or reorders elements itself; it asks the host.
pub trait OverlayHost {
    /// Screen rectangle of the delete zone
    fn delete_zone_bounds(&self) -> Rect;

    /// Screen rectangle of the photo canvas
    fn canvas_bounds(&self) -> Rect;

    fn set_delete_zone_visible(&mut self, visible: bool);

    /// Move the element to the top of the draw order
    fn bring_to_front(&mut self, id: ElementId);

    /// The element was dropped on the delete zone
    fn on_element_remove_requested(&mut self, id: ElementId);

    /// A text element was tapped
    fn on_text_edit_requested(&mut self, id: ElementId, text: &str, color: Color);
}
