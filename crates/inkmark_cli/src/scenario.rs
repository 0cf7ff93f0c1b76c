//! Touch scenarios for replay
//!
//! A scenario is a JSON document with a list of steps. Element touches name
//! their target by index in insertion order and give screen coordinates:
//!
//! ```json
//! { "steps": [
//!     { "type": "add_text", "text": "hello", "color": "#FF0000" },
//!     { "type": "touch", "element": 0, "action": "down", "pointers": [{ "id": 0, "x": 540, "y": 720 }] },
//!     { "type": "touch", "element": 0, "action": "up", "pointers": [{ "id": 0, "x": 540, "y": 720 }] }
//! ] }
//! ```

use std::io::Write;
use std::path::Path;
use std::rc::Rc;

use anyhow::{Context, Result};
use inkmark_editor::{
    Color, NotificationLog, PhotoEditor, Point, PointerId, TouchAction, TouchEvent, TouchPointer,
};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub steps: Vec<Step>,
}

impl Scenario {
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json(&raw)
    }

    /// Run every step against `editor`, writing each notification and then a
    /// summary of the remaining elements to `out` as JSON lines
    pub fn run(&self, editor: &mut PhotoEditor, out: &mut impl Write) -> Result<()> {
        let log = Rc::new(NotificationLog::new());
        editor.set_listener(log.clone());

        for (index, step) in self.steps.iter().enumerate() {
            tracing::debug!(index, ?step, "step");
            step.apply(editor)
                .with_context(|| format!("Step {index} failed"))?;
            for notification in log.take() {
                writeln!(out, "{}", serde_json::to_string(&notification)?)?;
            }
        }

        let elements: Vec<_> = editor
            .elements_in_draw_order()
            .map(|element| {
                let transform = element.transform();
                let bounds = element.screen_bounds();
                json!({
                    "kind": element.kind(),
                    "scale": transform.scale,
                    "rotation": transform.rotation,
                    "translation": [transform.translation.x, transform.translation.y],
                    "bounds": [bounds.x, bounds.y, bounds.width, bounds.height],
                })
            })
            .collect();
        writeln!(out, "{}", json!({ "elements": elements }))?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PointerSample {
    pub id: PointerId,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Step {
    AddText {
        text: String,
        /// `#RRGGBB` or `#RRGGBBAA`
        #[serde(default)]
        color: Option<String>,
    },
    AddEmoji {
        code: String,
    },
    AddImage {
        key: String,
        width: f32,
        height: f32,
    },
    /// Touch on an element, screen coordinates
    Touch {
        element: usize,
        action: TouchAction,
        #[serde(default)]
        action_index: usize,
        pointers: Vec<PointerSample>,
    },
    /// Touch on the brush layer
    Brush {
        action: TouchAction,
        x: f32,
        y: f32,
    },
    BrushMode {
        enabled: bool,
    },
    BrushSize {
        size: f32,
    },
    Eraser,
    Undo,
    Clear,
    Tick {
        ms: f32,
        #[serde(default = "default_frames")]
        frames: u32,
    },
}

fn default_frames() -> u32 {
    1
}

impl Step {
    fn apply(&self, editor: &mut PhotoEditor) -> Result<()> {
        match self {
            Step::AddText { text, color } => {
                let color = color.as_deref().map(Color::parse_hex).transpose()?;
                editor.add_text(text, color);
            }
            Step::AddEmoji { code } => {
                editor.add_emoji(code)?;
            }
            Step::AddImage { key, width, height } => {
                editor.add_image(key, *width, *height);
            }
            Step::Touch {
                element,
                action,
                action_index,
                pointers,
            } => {
                let id = editor.element_id_at(*element)?;
                let points: Vec<_> = pointers
                    .iter()
                    .map(|p| (p.id, Point::new(p.x, p.y)))
                    .collect();
                editor.handle_element_touch_screen(id, *action, *action_index, &points);
            }
            Step::Brush { action, x, y } => {
                let event = TouchEvent::single(*action, TouchPointer::at(0, *x, *y));
                editor.handle_brush_touch(&event);
            }
            Step::BrushMode { enabled } => editor.set_brush_drawing_mode(*enabled),
            Step::BrushSize { size } => editor.set_brush_size(*size),
            Step::Eraser => editor.brush_eraser(),
            Step::Undo => {
                editor.undo();
            }
            Step::Clear => editor.clear_all(),
            Step::Tick { ms, frames } => {
                for _ in 0..*frames {
                    editor.tick(*ms);
                }
            }
        }
        Ok(())
    }
}
