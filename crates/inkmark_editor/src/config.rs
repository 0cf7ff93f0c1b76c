//! Editor configuration (inkmark.toml)

use std::fs;
use std::path::Path;

use inkmark_brush::{BrushAttributes, BrushMode};
use inkmark_gesture::{GestureSettings, ScaleLimits, ScreenRegion};
use inkmark_paint::{Color, Rect};
use serde::{Deserialize, Serialize};

use crate::error::{EditorError, Result};

/// Top-level editor configuration
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct EditorConfig {
    /// Screen rectangle of the photo; also the brush surface size
    #[serde(default = "default_canvas")]
    pub canvas: RegionConfig,
    /// Screen rectangle of the delete drop zone
    #[serde(default = "default_delete_zone")]
    pub delete_zone: RegionConfig,
    #[serde(default)]
    pub brush: BrushConfig,
    #[serde(default)]
    pub gesture: GestureConfig,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas: default_canvas(),
            delete_zone: default_delete_zone(),
            brush: BrushConfig::default(),
            gesture: GestureConfig::default(),
        }
    }
}

/// A screen rectangle
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct RegionConfig {
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl RegionConfig {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn region(&self) -> ScreenRegion {
        ScreenRegion::new(self.x, self.y, self.width, self.height)
    }
}

fn default_canvas() -> RegionConfig {
    RegionConfig {
        x: 0.0,
        y: 0.0,
        width: 1080.0,
        height: 1440.0,
    }
}

fn default_delete_zone() -> RegionConfig {
    RegionConfig {
        x: 480.0,
        y: 1560.0,
        width: 120.0,
        height: 120.0,
    }
}

/// Brush defaults
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct BrushConfig {
    #[serde(default = "default_pen_width")]
    pub pen_width: f32,
    #[serde(default = "default_eraser_width")]
    pub eraser_width: f32,
    /// `0xRRGGBB` or `0xRRGGBBAA`
    #[serde(default)]
    pub pen_color: u32,
}

fn default_pen_width() -> f32 {
    10.0
}

fn default_eraser_width() -> f32 {
    100.0
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            pen_width: default_pen_width(),
            eraser_width: default_eraser_width(),
            pen_color: 0x000000,
        }
    }
}

impl BrushConfig {
    pub fn attributes(&self) -> BrushAttributes {
        BrushAttributes {
            pen_width: self.pen_width,
            eraser_width: self.eraser_width,
            pen_color: Color::from_hex(self.pen_color),
            mode: BrushMode::Draw,
        }
    }
}

/// Gesture tunables
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct GestureConfig {
    #[serde(default = "default_min_scale")]
    pub min_scale: f32,
    #[serde(default = "default_max_scale")]
    pub max_scale: f32,
    #[serde(default = "default_snap_back_ms")]
    pub snap_back_ms: u32,
    /// Release distance still counted as a tap; `0.0` requires exact equality
    #[serde(default)]
    pub tap_slop: f32,
}

fn default_min_scale() -> f32 {
    0.5
}

fn default_max_scale() -> f32 {
    10.0
}

fn default_snap_back_ms() -> u32 {
    300
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            min_scale: default_min_scale(),
            max_scale: default_max_scale(),
            snap_back_ms: default_snap_back_ms(),
            tap_slop: 0.0,
        }
    }
}

impl GestureConfig {
    pub fn settings(&self) -> GestureSettings {
        GestureSettings {
            scale_limits: ScaleLimits::new(self.min_scale, self.max_scale),
            snap_back_ms: self.snap_back_ms,
            tap_slop: self.tap_slop,
        }
    }
}

impl EditorConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: EditorConfig =
            toml::from_str(input).map_err(|e| EditorError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            EditorError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| EditorError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.canvas.width >= 1.0 && self.canvas.height >= 1.0) {
            return Err(EditorError::Config(format!(
                "canvas must be at least 1x1, got {}x{}",
                self.canvas.width, self.canvas.height
            )));
        }
        if !(self.delete_zone.width >= 0.0 && self.delete_zone.height >= 0.0) {
            return Err(EditorError::Config(
                "delete_zone size must not be negative".to_string(),
            ));
        }
        let gesture = &self.gesture;
        if !(gesture.min_scale > 0.0 && gesture.min_scale <= gesture.max_scale) {
            return Err(EditorError::Config(format!(
                "scale limits must satisfy 0 < min_scale <= max_scale, got {}..{}",
                gesture.min_scale, gesture.max_scale
            )));
        }
        if !(gesture.tap_slop >= 0.0) {
            return Err(EditorError::Config(
                "tap_slop must not be negative".to_string(),
            ));
        }
        if !(self.brush.pen_width >= 0.0 && self.brush.eraser_width >= 0.0) {
            return Err(EditorError::Config(
                "brush widths must not be negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Brush surface size in whole pixels
    pub fn surface_size(&self) -> (u32, u32) {
        (
            self.canvas.width.ceil() as u32,
            self.canvas.height.ceil() as u32,
        )
    }
}
