//! Element identity and kind tags

use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    /// Unique identifier for an overlaid element
    pub struct ElementId;
}

/// Kind of an overlaid element, fixed when the element is created
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Image,
    Text,
    Emoji,
}

/// Kind reported through notifications; adds the brush layer to the element kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    Image,
    Text,
    Emoji,
    Brush,
}

impl From<ElementKind> for ViewKind {
    fn from(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Image => ViewKind::Image,
            ElementKind::Text => ViewKind::Text,
            ElementKind::Emoji => ViewKind::Emoji,
        }
    }
}
