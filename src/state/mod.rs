use std::collections::HashMap;
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use self::catalog::WindowKind;
use self::dock::{derive_dock, DockEntry};
use self::interaction::{Gesture, GestureKind};
use self::window::{Interaction, WindowHandle};
use self::z_order::ZOrderCounter;
use crate::config::WindowConfig;
use crate::geometry::{apply_drag, apply_resize, Point, Rect, ResizeEdge, Size};

pub mod catalog;
pub mod dock;
pub mod interaction;
pub mod window;
pub mod z_order;

/// What a launch request ended up doing
#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum OpenOutcome {
    /// A new window was created
    Opened { window: WindowHandle },
    /// An existing single-instance window was raised
    Focused { window: WindowHandle },
    /// The launcher drawer was toggled instead of opening a window
    LauncherToggled { open: bool },
}

impl OpenOutcome {
    pub fn window(&self) -> Option<&WindowHandle> {
        match self {
            OpenOutcome::Opened { window } | OpenOutcome::Focused { window } => Some(window),
            OpenOutcome::LauncherToggled { .. } => None,
        }
    }
}

/// Everything the frontend needs to redraw the desktop
#[derive(Clone, Serialize, Debug)]
pub struct DeskSnapshot {
    pub windows: Vec<WindowHandle>, // Back to front
    pub dock: Vec<DockEntry>,
    pub launcher_open: bool,
}

pub struct WindowManager {
    windows: HashMap<String, WindowHandle>,
    open_order: Vec<String>, // IDs in the order they were opened, drives cascading and the dock
    dock: Vec<DockEntry>,
    z_counter: ZOrderCounter,
    gesture: Option<Gesture>,
    launcher_open: bool,
    viewport: Size,
    config: WindowConfig,
}

impl WindowManager {
    pub fn new(config: WindowConfig) -> Self {
        Self {
            windows: HashMap::new(),
            open_order: Vec::new(),
            dock: derive_dock(std::iter::empty()),
            z_counter: ZOrderCounter::new(config.z_base),
            gesture: None,
            launcher_open: false,
            viewport: Size::default(),
            config,
        }
    }

    /// Bring an existing single-instance window to the front, or open a new one.
    /// Launchpad toggles the launcher drawer.
    pub fn open_or_focus(&mut self, kind: WindowKind) -> OpenOutcome {
        if kind == WindowKind::Launchpad {
            return OpenOutcome::LauncherToggled {
                open: self.toggle_launcher(),
            };
        }

        if kind.is_single_instance() {
            let existing = self
                .open_order
                .iter()
                .find(|id| self.windows.get(*id).map(|w| w.kind) == Some(kind))
                .cloned();

            if let Some(id) = existing {
                if let Some(window) = self.focus(&id) {
                    return OpenOutcome::Focused { window };
                }
            }
        }

        OpenOutcome::Opened {
            window: self.spawn(kind),
        }
    }

    /// Always spawn a fresh window for multi-instance kinds.
    /// Single-instance kinds behave like `open_or_focus`.
    pub fn open_new(&mut self, kind: WindowKind) -> OpenOutcome {
        if kind == WindowKind::Launchpad || kind.is_single_instance() {
            return self.open_or_focus(kind);
        }

        OpenOutcome::Opened {
            window: self.spawn(kind),
        }
    }

    fn spawn(&mut self, kind: WindowKind) -> WindowHandle {
        let info = kind.info();
        let offset = self.open_order.len() as f64 * self.config.cascade_step;
        let origin = self.config.base_origin + offset;

        let window = WindowHandle {
            id: Uuid::new_v4().to_string(),
            kind,
            title: info.title.to_string(),
            position: Point::new(origin, origin),
            size: info.default_size.at_least(self.config.min_size()),
            z_order: self.z_counter.next(),
            interaction: Interaction::Idle,
        };

        info!(id = %window.id, ?kind, z = window.z_order, "Window opened");

        self.windows.insert(window.id.clone(), window.clone());
        self.open_order.push(window.id.clone());
        self.refresh_dock();

        window
    }

    /// Raise a window above every other one
    pub fn focus(&mut self, id: &str) -> Option<WindowHandle> {
        let win = self.windows.get_mut(id)?;
        win.z_order = self.z_counter.next();
        debug!(id, z = win.z_order, "Window focused");
        Some(win.clone())
    }

    /// Close a window and drop it from the dock.
    /// Returns None if it was already closed, so a duplicate close signal is harmless.
    pub fn close(&mut self, id: &str) -> Option<WindowHandle> {
        let removed = self.windows.remove(id)?;

        if let Some(index) = self.open_order.iter().position(|x| x == id) {
            self.open_order.remove(index);
        }

        if self.gesture.as_ref().map(|g| g.window_id.as_str()) == Some(id) {
            self.gesture = None;
        }

        self.refresh_dock();
        info!(id, kind = ?removed.kind, "Window closed");

        Some(removed)
    }

    /// Commit a finished drag of `delta` pixels
    pub fn on_drag_end(&mut self, id: &str, delta: Point) -> Option<WindowHandle> {
        let bounds = self.config.drag_bounds(self.viewport);
        let win = self.windows.get_mut(id)?;
        let rect = apply_drag(win.rect(), delta, &bounds);
        win.set_rect(rect);
        win.interaction = Interaction::Idle;
        debug!(id, x = rect.x, y = rect.y, "Drag committed");
        Some(win.clone())
    }

    /// Commit a finished resize of `edge` by `delta` pixels
    pub fn on_resize_end(&mut self, id: &str, edge: ResizeEdge, delta: Point) -> Option<WindowHandle> {
        let min = self.config.min_size();
        let win = self.windows.get_mut(id)?;
        let rect = apply_resize(win.rect(), edge, delta, min);
        win.set_rect(rect);
        win.interaction = Interaction::Idle;
        debug!(id, width = rect.width, height = rect.height, "Resize committed");
        Some(win.clone())
    }

    // ===== Pointer gestures =====

    /// Pointer pressed on a title bar: raise the window and start dragging
    pub fn pointer_down_drag(&mut self, id: &str, pointer: Point) -> Option<WindowHandle> {
        self.begin_gesture(id, GestureKind::Drag, pointer)?;
        self.focus(id)
    }

    /// Pointer pressed on a resize handle
    pub fn pointer_down_resize(&mut self, id: &str, edge: ResizeEdge, pointer: Point) -> Option<WindowHandle> {
        self.begin_gesture(id, GestureKind::Resize(edge), pointer)
    }

    fn begin_gesture(&mut self, id: &str, kind: GestureKind, pointer: Point) -> Option<WindowHandle> {
        // Unknown ids leave any live gesture untouched
        if !self.windows.contains_key(id) {
            return None;
        }

        // A press while another gesture is live replaces it
        self.cancel_gesture();

        let win = self.windows.get_mut(id)?;
        win.interaction = match kind {
            GestureKind::Drag => Interaction::Dragging,
            GestureKind::Resize(edge) => Interaction::Resizing { edge },
        };

        self.gesture = Some(Gesture {
            window_id: id.to_string(),
            kind,
            origin: pointer,
            start_rect: win.rect(),
        });

        Some(win.clone())
    }

    /// Live rect for the window under the active gesture. Ignored without a gesture.
    pub fn pointer_move(&self, pointer: Point) -> Option<(String, Rect)> {
        let gesture = self.gesture.as_ref()?;
        let rect = gesture.preview(
            pointer,
            &self.config.drag_bounds(self.viewport),
            self.config.min_size(),
        );
        Some((gesture.window_id.clone(), rect))
    }

    /// Commit the active gesture. A release without a matching press is ignored.
    pub fn pointer_up(&mut self, pointer: Point) -> Option<WindowHandle> {
        let gesture = self.gesture.take()?;
        let delta = gesture.delta(pointer);
        match gesture.kind {
            GestureKind::Drag => self.on_drag_end(&gesture.window_id, delta),
            GestureKind::Resize(edge) => self.on_resize_end(&gesture.window_id, edge, delta),
        }
    }

    /// Drop the active gesture without moving anything
    pub fn cancel_gesture(&mut self) {
        if let Some(gesture) = self.gesture.take() {
            if let Some(win) = self.windows.get_mut(&gesture.window_id) {
                win.interaction = Interaction::Idle;
            }
        }
    }

    pub fn active_gesture(&self) -> Option<&Gesture> {
        self.gesture.as_ref()
    }

    // ===== Launcher drawer =====

    pub fn toggle_launcher(&mut self) -> bool {
        self.launcher_open = !self.launcher_open;
        debug!(open = self.launcher_open, "Launcher toggled");
        self.launcher_open
    }

    pub fn close_launcher(&mut self) {
        self.launcher_open = false;
    }

    pub fn launcher_open(&self) -> bool {
        self.launcher_open
    }

    /// App picked from the drawer: close the drawer, then open or focus the app
    pub fn launch_from_drawer(&mut self, kind: WindowKind) -> OpenOutcome {
        self.close_launcher();
        if kind == WindowKind::Launchpad {
            return OpenOutcome::LauncherToggled { open: false };
        }
        self.open_or_focus(kind)
    }

    // ===== Queries =====

    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    pub fn get(&self, id: &str) -> Option<&WindowHandle> {
        self.windows.get(id)
    }

    pub fn open_count(&self) -> usize {
        self.windows.len()
    }

    pub fn frontmost(&self) -> Option<&WindowHandle> {
        self.windows.values().max_by_key(|w| w.z_order)
    }

    /// All open windows, back to front
    pub fn windows(&self) -> Vec<WindowHandle> {
        let mut all: Vec<WindowHandle> = self.windows.values().cloned().collect();
        all.sort_by_key(|w| w.z_order);
        all
    }

    pub fn dock(&self) -> &[DockEntry] {
        &self.dock
    }

    pub fn snapshot(&self) -> DeskSnapshot {
        DeskSnapshot {
            windows: self.windows(),
            dock: self.dock.clone(),
            launcher_open: self.launcher_open,
        }
    }

    fn refresh_dock(&mut self) {
        let windows = &self.windows;
        self.dock = derive_dock(self.open_order.iter().filter_map(|id| windows.get(id)));
    }
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new(WindowConfig::default())
    }
}
