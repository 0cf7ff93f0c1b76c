//! Inkmark Paint
//!
//! Leaf crate shared by the gesture engine, the stroke compositor and the
//! editor controller.
//!
//! # Features
//!
//! - Geometry primitives (points, vectors, sizes, rectangles)
//! - 2D affine transforms with point/vector mapping and inversion
//! - Freehand stroke paths built from move-to/line-to commands
//! - Stroke styles with draw (darken) and erase (clear) blend modes
//! - A persistent raster surface backed by `tiny-skia`

pub mod color;
pub mod error;
pub mod path;
pub mod primitives;
pub mod stroke;
pub mod surface;
pub mod transform;

pub use color::Color;
pub use error::{PaintError, Result};
pub use path::{Path, PathCommand};
pub use primitives::{Point, Rect, Size, Vector2D};
pub use stroke::{BlendMode, LineCap, LineJoin, StrokeStyle};
pub use surface::RasterSurface;
pub use transform::Transform2D;
