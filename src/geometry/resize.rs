// Edge and corner resizing with a minimum size floor

use super::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Which handle the pointer grabbed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeEdge {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl ResizeEdge {
    fn north(&self) -> bool {
        matches!(self, ResizeEdge::N | ResizeEdge::NE | ResizeEdge::NW)
    }

    fn south(&self) -> bool {
        matches!(self, ResizeEdge::S | ResizeEdge::SE | ResizeEdge::SW)
    }

    fn east(&self) -> bool {
        matches!(self, ResizeEdge::E | ResizeEdge::NE | ResizeEdge::SE)
    }

    fn west(&self) -> bool {
        matches!(self, ResizeEdge::W | ResizeEdge::NW | ResizeEdge::SW)
    }
}

/// Resize `start` by dragging `edge` by `delta`.
///
/// West and north edges move the origin. Once the floor is reached the origin only moves
/// by the amount the size actually changed, so the opposite edge stays anchored.
pub fn apply_resize(start: Rect, edge: ResizeEdge, delta: Point, min: Size) -> Rect {
    let mut out = start;

    if edge.east() {
        out.width = (start.width + delta.x).max(min.width);
    }
    if edge.west() {
        out.width = (start.width - delta.x).max(min.width);
        out.x = start.x - (out.width - start.width);
    }
    if edge.south() {
        out.height = (start.height + delta.y).max(min.height);
    }
    if edge.north() {
        out.height = (start.height - delta.y).max(min.height);
        out.y = start.y - (out.height - start.height);
    }

    // A start rect already below the floor is lifted on the untouched axis too
    let floored = out.size().at_least(min);
    out.width = floored.width;
    out.height = floored.height;

    out
}
