// Pointer gestures: one drag or resize in flight at a time

use crate::geometry::{apply_drag, apply_resize, DragBounds, Point, Rect, ResizeEdge, Size};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureKind {
    Drag,
    Resize(ResizeEdge),
}

/// A pointer-down that has not seen its pointer-up yet
#[derive(Debug, Clone, PartialEq)]
pub struct Gesture {
    pub window_id: String,
    pub kind: GestureKind,
    /// Pointer position at pointer-down
    pub origin: Point,
    /// Window rect at pointer-down
    pub start_rect: Rect,
}

impl Gesture {
    pub fn delta(&self, pointer: Point) -> Point {
        pointer.delta_from(self.origin)
    }

    /// Rect the window would have if the pointer were released at `pointer`
    pub fn preview(&self, pointer: Point, drag: &DragBounds, min: Size) -> Rect {
        let delta = self.delta(pointer);
        match self.kind {
            GestureKind::Drag => apply_drag(self.start_rect, delta, drag),
            GestureKind::Resize(edge) => apply_resize(self.start_rect, edge, delta, min),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_follows_pointer_from_origin() {
        let gesture = Gesture {
            window_id: "w".to_string(),
            kind: GestureKind::Drag,
            origin: Point::new(200.0, 60.0),
            start_rect: Rect::new(50.0, 50.0, 400.0, 300.0),
        };
        let bounds = DragBounds::new(Size::new(1920.0, 1080.0), 0.25, 32.0);
        let rect = gesture.preview(Point::new(260.0, 100.0), &bounds, Size::new(300.0, 200.0));
        assert_eq!(rect, Rect::new(110.0, 90.0, 400.0, 300.0));
    }

    #[test]
    fn test_resize_preview_uses_edge() {
        let gesture = Gesture {
            window_id: "w".to_string(),
            kind: GestureKind::Resize(ResizeEdge::SE),
            origin: Point::new(450.0, 350.0),
            start_rect: Rect::new(50.0, 50.0, 400.0, 300.0),
        };
        let bounds = DragBounds::new(Size::default(), 0.25, 32.0);
        let rect = gesture.preview(Point::new(0.0, 0.0), &bounds, Size::new(300.0, 200.0));
        assert_eq!(rect, Rect::new(50.0, 50.0, 300.0, 200.0));
    }
}
