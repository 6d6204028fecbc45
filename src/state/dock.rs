// Dock contents, derived from the open window set

use super::catalog::WindowKind;
use super::window::WindowHandle;
use serde::Serialize;

#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct DockEntry {
    pub kind: WindowKind,
    pub icon: String,
    pub label: String,
    pub pinned: bool,
    pub open_count: usize,
}

impl DockEntry {
    fn for_kind(kind: WindowKind, open_count: usize) -> Self {
        let info = kind.info();
        Self {
            kind,
            icon: info.icon.to_string(),
            label: info.label.to_string(),
            pinned: kind.is_pinned(),
            open_count,
        }
    }
}

/// Pinned entries first, then one entry per distinct open kind in the order it was first opened.
/// `windows` must be in open order.
pub fn derive_dock<'a, I>(windows: I) -> Vec<DockEntry>
where
    I: IntoIterator<Item = &'a WindowHandle>,
{
    let mut entries: Vec<DockEntry> = WindowKind::PINNED
        .iter()
        .map(|kind| DockEntry::for_kind(*kind, 0))
        .collect();

    for window in windows {
        match entries.iter_mut().find(|e| e.kind == window.kind) {
            Some(entry) => entry.open_count += 1,
            None => entries.push(DockEntry::for_kind(window.kind, 1)),
        }
    }

    entries
}
