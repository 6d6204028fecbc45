// Rectangle math for floating windows
// Drag and resize are pure functions of (start rect, pointer delta), so they run without a webview

pub mod drag;
pub mod resize;

pub use drag::{apply_drag, DragBounds, DEFAULT_HANDLE_HEIGHT, DEFAULT_MIN_VISIBLE_FRACTION};
pub use resize::{apply_resize, ResizeEdge};

use serde::{Deserialize, Serialize};

/// A pointer position or offset in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset from `origin` to this point
    pub fn delta_from(&self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Raise each dimension to at least the matching dimension of `min`
    pub fn at_least(&self, min: Size) -> Size {
        Size::new(self.width.max(min.width), self.height.max(min.height))
    }
}

/// Represents a window rectangle: top-left offset plus size
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_parts(position: Point, size: Size) -> Self {
        Self::new(position.x, position.y, size.width, size.height)
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn translated(&self, delta: Point) -> Rect {
        Rect::new(self.x + delta.x, self.y + delta.y, self.width, self.height)
    }
}
