use super::catalog::WindowKind;
use crate::geometry::{Point, Rect, ResizeEdge, Size};
use serde::{Deserialize, Serialize};

/// What the pointer is currently doing to a window
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Default)]
#[serde(tag = "type")]
pub enum Interaction {
    #[default]
    Idle,
    Dragging,
    Resizing { edge: ResizeEdge },
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct WindowHandle {
    pub id: String,               // Unique UUID
    pub kind: WindowKind,         // Which app this window hosts
    pub title: String,            // Window Title
    pub position: Point,          // Top-left offset in px
    pub size: Size,               // Current size, never below the configured minimum
    pub z_order: u64,             // Stacking order, highest is frontmost
    pub interaction: Interaction, // Idle, Dragging, Resizing
}

impl WindowHandle {
    pub fn rect(&self) -> Rect {
        Rect::from_parts(self.position, self.size)
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.position = rect.position();
        self.size = rect.size();
    }
}
