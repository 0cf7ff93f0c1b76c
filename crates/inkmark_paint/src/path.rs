//! Freehand stroke paths

use smallvec::SmallVec;

use crate::primitives::{Point, Rect};

/// Path command
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
}

/// A stroke path accumulated from touch input.
///
/// Unlike an immutable shape path, a stroke grows one command at a time while
/// the finger moves and is reset as soon as it has been committed.
#[derive(Clone, Debug, Default)]
pub struct Path {
    commands: SmallVec<[PathCommand; 64]>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Start a new sub-path at `point`
    pub fn move_to(&mut self, point: Point) {
        self.commands.push(PathCommand::MoveTo(point));
    }

    /// Append a segment to `point`; starts a sub-path if none is open
    pub fn line_to(&mut self, point: Point) {
        if self.commands.is_empty() {
            self.commands.push(PathCommand::MoveTo(point));
        } else {
            self.commands.push(PathCommand::LineTo(point));
        }
    }

    /// Discard every command
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Bounds of the path's control points
    pub fn bounds(&self) -> Rect {
        let points: SmallVec<[Point; 64]> = self
            .commands
            .iter()
            .map(|cmd| match *cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p,
            })
            .collect();
        Rect::bounding(&points)
    }

    /// Convert to a `tiny-skia` path; `None` when there is no segment to stroke
    pub(crate) fn to_skia(&self) -> Option<tiny_skia::Path> {
        let mut builder = tiny_skia::PathBuilder::new();
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => builder.move_to(p.x, p.y),
                PathCommand::LineTo(p) => builder.line_to(p.x, p.y),
            }
        }
        builder.finish()
    }
}
