//! Persistent raster surface
//!
//! A premultiplied RGBA8 pixel buffer backed by a `tiny-skia` pixmap. The
//! surface only changes through [`RasterSurface::stroke_path`],
//! [`RasterSurface::draw_surface`] and [`RasterSurface::clear`].

use tiny_skia::{Pixmap, PixmapPaint, Transform};

use crate::error::{PaintError, Result};
use crate::path::Path;
use crate::stroke::StrokeStyle;

pub struct RasterSurface {
    pixmap: Pixmap,
}

impl RasterSurface {
    /// Allocate a fully transparent surface
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap =
            Pixmap::new(width, height).ok_or(PaintError::InvalidSurfaceSize { width, height })?;
        tracing::trace!(width, height, "raster surface allocated");
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Raw premultiplied RGBA8 bytes, row-major
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Premultiplied `[r, g, b, a]` at `(x, y)`
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixmap
            .pixel(x, y)
            .map(|p| [p.red(), p.green(), p.blue(), p.alpha()])
    }

    /// True when every pixel is fully transparent
    pub fn is_blank(&self) -> bool {
        self.pixmap.data().iter().all(|&byte| byte == 0)
    }

    /// Fill the whole surface with transparent pixels
    pub fn clear(&mut self) {
        self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
    }

    /// Stroke `path` onto the surface. Returns `false` when the path has no
    /// segment to render.
    pub fn stroke_path(&mut self, path: &Path, style: &StrokeStyle) -> bool {
        let Some(skia_path) = path.to_skia() else {
            return false;
        };
        self.pixmap.stroke_path(
            &skia_path,
            &style.to_skia_paint(),
            &style.to_skia_stroke(),
            Transform::identity(),
            None,
        );
        true
    }

    /// Composite `source` over this surface at the origin
    pub fn draw_surface(&mut self, source: &RasterSurface) {
        self.pixmap.draw_pixmap(
            0,
            0,
            source.pixmap.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
    }
}

impl std::fmt::Debug for RasterSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterSurface")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}
