// Drag translation with viewport clamping

use super::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_VISIBLE_FRACTION: f64 = 0.25;
pub const DEFAULT_HANDLE_HEIGHT: f64 = 32.0;

/// Limits applied to a dragged window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragBounds {
    /// Visible desktop area. A zero dimension means "not measured yet" and disables clamping on that axis.
    pub viewport: Size,
    /// Share of the window width that must stay inside the viewport (0.0..=1.0)
    pub min_visible_fraction: f64,
    /// Height of the title bar used as drag handle
    pub handle_height: f64,
}

impl DragBounds {
    /// Non-finite limits fall back to the defaults; `f64::clamp` panics on NaN bounds
    pub fn new(viewport: Size, min_visible_fraction: f64, handle_height: f64) -> Self {
        let min_visible_fraction = if min_visible_fraction.is_finite() {
            min_visible_fraction.clamp(0.0, 1.0)
        } else {
            DEFAULT_MIN_VISIBLE_FRACTION
        };
        let handle_height = if handle_height.is_finite() {
            handle_height.max(0.0)
        } else {
            DEFAULT_HANDLE_HEIGHT
        };

        Self {
            viewport,
            min_visible_fraction,
            handle_height,
        }
    }
}

/// Move `start` by the pointer `delta`, keeping the window reachable.
///
/// Horizontally at least `min_visible_fraction` of the width stays on screen.
/// Vertically the title bar never leaves the viewport, so the window can always be grabbed again.
pub fn apply_drag(start: Rect, delta: Point, bounds: &DragBounds) -> Rect {
    let mut moved = start.translated(delta);

    if bounds.viewport.width > 0.0 {
        let visible = start.width * bounds.min_visible_fraction;
        let min_x = visible - start.width;
        let max_x = (bounds.viewport.width - visible).max(min_x);
        moved.x = moved.x.clamp(min_x, max_x);
    }

    if bounds.viewport.height > 0.0 {
        let max_y = (bounds.viewport.height - bounds.handle_height).max(0.0);
        moved.y = moved.y.clamp(0.0, max_y);
    }

    moved
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> DragBounds {
        DragBounds::new(Size::new(1280.0, 800.0), 0.25, 32.0)
    }

    #[test]
    fn test_drag_inside_viewport_is_plain_translation() {
        let start = Rect::new(50.0, 50.0, 400.0, 300.0);
        let moved = apply_drag(start, Point::new(120.0, -20.0), &bounds());
        assert_eq!(moved, Rect::new(170.0, 30.0, 400.0, 300.0));
    }

    #[test]
    fn test_drag_keeps_fraction_of_width_on_left_edge() {
        let start = Rect::new(50.0, 50.0, 400.0, 300.0);
        let moved = apply_drag(start, Point::new(-5000.0, 0.0), &bounds());
        // 25% of 400 = 100px must remain visible
        assert_eq!(moved.x, -300.0);
        assert_eq!(moved.x + moved.width, 100.0);
    }

    #[test]
    fn test_drag_keeps_fraction_of_width_on_right_edge() {
        let start = Rect::new(50.0, 50.0, 400.0, 300.0);
        let moved = apply_drag(start, Point::new(5000.0, 0.0), &bounds());
        assert_eq!(moved.x, 1180.0);
    }

    #[test]
    fn test_drag_keeps_title_bar_reachable() {
        let start = Rect::new(50.0, 50.0, 400.0, 300.0);

        let up = apply_drag(start, Point::new(0.0, -500.0), &bounds());
        assert_eq!(up.y, 0.0);

        let down = apply_drag(start, Point::new(0.0, 5000.0), &bounds());
        assert_eq!(down.y, 768.0);
    }

    #[test]
    fn test_drag_without_viewport_is_unclamped() {
        let start = Rect::new(0.0, 0.0, 400.0, 300.0);
        let open = DragBounds::new(Size::default(), 0.25, 32.0);
        let moved = apply_drag(start, Point::new(-900.0, -900.0), &open);
        assert_eq!(moved.position(), Point::new(-900.0, -900.0));
    }

    #[test]
    fn test_nan_limits_fall_back_to_defaults() {
        let start = Rect::new(50.0, 50.0, 400.0, 300.0);
        let broken = DragBounds::new(Size::new(1280.0, 800.0), f64::NAN, f64::NAN);
        assert_eq!(broken, bounds());

        let moved = apply_drag(start, Point::new(-5000.0, 5000.0), &broken);
        assert_eq!(moved.position(), Point::new(-300.0, 768.0));
    }

    #[test]
    fn test_drag_never_changes_size() {
        let start = Rect::new(10.0, 10.0, 420.0, 520.0);
        let moved = apply_drag(start, Point::new(3.0, 7.0), &bounds());
        assert_eq!(moved.size(), start.size());
    }
}
