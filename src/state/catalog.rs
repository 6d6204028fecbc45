// Fixed catalog of desktop apps: dock icon, label, title, default size and instancing policy

use crate::geometry::Size;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WindowKind {
    /// Not a window: opens the launcher drawer
    Launchpad,
    Gallery,
    Notepad,
    Tetris,
    Settings,
    SoundcloudPlayer,
    About,
    StyleGuide,
    Login,
    MintCta,
    Calculator,
    MemoryMatch,
    Snake,
    Poll,
    SlotMachine,
    Pong,
    Minesweeper,
    #[serde(rename = "game_2048")]
    Game2048,
    Breakout,
    FlappyRaven,
    NftShowcase,
    Leaderboard,
    RarityChecker,
    Roadmap,
    Mono,
    /// Generic floating window
    Float,
}

/// Whether launching a kind reuses its open window or always spawns another one
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Instancing {
    Single,
    Multi,
}

#[derive(Clone, Copy, Serialize, Debug, PartialEq)]
pub struct KindInfo {
    pub icon: &'static str,
    pub label: &'static str,
    pub title: &'static str,
    pub default_size: Size,
    pub instancing: Instancing,
}

const fn single(icon: &'static str, label: &'static str, title: &'static str, w: f64, h: f64) -> KindInfo {
    KindInfo {
        icon,
        label,
        title,
        default_size: Size { width: w, height: h },
        instancing: Instancing::Single,
    }
}

const fn multi(icon: &'static str, label: &'static str, title: &'static str, w: f64, h: f64) -> KindInfo {
    KindInfo {
        instancing: Instancing::Multi,
        ..single(icon, label, title, w, h)
    }
}

impl WindowKind {
    pub const ALL: [WindowKind; 26] = [
        WindowKind::Launchpad,
        WindowKind::Gallery,
        WindowKind::Notepad,
        WindowKind::Tetris,
        WindowKind::Settings,
        WindowKind::SoundcloudPlayer,
        WindowKind::About,
        WindowKind::StyleGuide,
        WindowKind::Login,
        WindowKind::MintCta,
        WindowKind::Calculator,
        WindowKind::MemoryMatch,
        WindowKind::Snake,
        WindowKind::Poll,
        WindowKind::SlotMachine,
        WindowKind::Pong,
        WindowKind::Minesweeper,
        WindowKind::Game2048,
        WindowKind::Breakout,
        WindowKind::FlappyRaven,
        WindowKind::NftShowcase,
        WindowKind::Leaderboard,
        WindowKind::RarityChecker,
        WindowKind::Roadmap,
        WindowKind::Mono,
        WindowKind::Float,
    ];

    /// Kinds that always have a dock entry, open or not
    pub const PINNED: [WindowKind; 2] = [WindowKind::Launchpad, WindowKind::Settings];

    pub fn info(&self) -> KindInfo {
        match self {
            WindowKind::Launchpad => single("apps", "Launch Pad", "Launch Pad", 500.0, 400.0),
            WindowKind::Gallery => single("photo", "Gallery", "Gallery", 600.0, 400.0),
            WindowKind::Notepad => multi("description", "Notepad", "Markdown Notepad", 600.0, 500.0),
            WindowKind::Tetris => multi("videogame_asset", "Tetris", "Tetris", 400.0, 850.0),
            WindowKind::Settings => single("settings", "Settings", "Settings", 600.0, 400.0),
            WindowKind::SoundcloudPlayer => single("music_note", "Music", "ASMR Radio", 600.0, 400.0),
            WindowKind::About => multi("info", "About", "About", 865.0, 600.0),
            WindowKind::StyleGuide => single("colors-swatch", "Styles", "Style Guide", 700.0, 600.0),
            WindowKind::Login => single("login", "Login", "Login", 450.0, 350.0),
            WindowKind::MintCta => single("diamond", "Mint", "Get Nevermore", 450.0, 550.0),
            WindowKind::Calculator => single("calculate", "Calculator", "ALGO Calculator", 380.0, 450.0),
            WindowKind::MemoryMatch => single("memory", "Memory Match", "Memory Match", 500.0, 550.0),
            WindowKind::Snake => single("snake", "Snake", "Snake", 380.0, 480.0),
            WindowKind::Poll => single("poll", "Poll", "Community Poll", 400.0, 450.0),
            WindowKind::SlotMachine => single("casino", "Slot Machine", "Slot Machine", 420.0, 480.0),
            WindowKind::Pong => single("sports_esports", "Pong", "Pong", 450.0, 420.0),
            WindowKind::Minesweeper => single("grid_on", "Minesweeper", "Minesweeper", 420.0, 520.0),
            WindowKind::Game2048 => single("view_module", "2048", "2048", 380.0, 520.0),
            WindowKind::Breakout => single("breakfast_dining", "Breakout", "Breakout", 450.0, 580.0),
            WindowKind::FlappyRaven => single("flight", "Flappy Raven", "Flappy Raven", 370.0, 600.0),
            WindowKind::NftShowcase => single("collections", "NFT Showcase", "NFT Showcase", 600.0, 500.0),
            WindowKind::Leaderboard => single("leaderboard", "Leaderboard", "Leaderboard", 500.0, 500.0),
            WindowKind::RarityChecker => single("star_rate", "Rarity Checker", "Rarity Checker", 450.0, 500.0),
            WindowKind::Roadmap => multi("map", "Roadmap", "Roadmap", 800.0, 600.0),
            WindowKind::Mono => single("work_outline", "Mono", "Mono", 865.0, 600.0),
            WindowKind::Float => multi("web_asset", "Window", "Floating Window", 400.0, 300.0),
        }
    }

    pub fn is_single_instance(&self) -> bool {
        self.info().instancing == Instancing::Single
    }

    pub fn is_pinned(&self) -> bool {
        WindowKind::PINNED.contains(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_from_id(id: &str) -> Option<WindowKind> {
        serde_json::from_value(serde_json::json!(id)).ok()
    }

    #[test]
    fn test_kind_ids_match_frontend() {
        assert_eq!(kind_from_id("game_2048"), Some(WindowKind::Game2048));
        assert_eq!(kind_from_id("flappy_raven"), Some(WindowKind::FlappyRaven));
        assert_eq!(kind_from_id("soundcloud_player"), Some(WindowKind::SoundcloudPlayer));
        assert_eq!(kind_from_id("solitaire"), None);
        assert_eq!(
            serde_json::to_value(WindowKind::MintCta).unwrap(),
            serde_json::json!("mint_cta")
        );
    }

    #[test]
    fn test_instancing_policy() {
        assert!(WindowKind::Gallery.is_single_instance());
        assert!(WindowKind::Settings.is_single_instance());
        assert!(!WindowKind::Float.is_single_instance());
        assert!(!WindowKind::Notepad.is_single_instance());
    }

    #[test]
    fn test_pinned_kinds() {
        assert!(WindowKind::Launchpad.is_pinned());
        assert!(WindowKind::Settings.is_pinned());
        assert!(!WindowKind::Gallery.is_pinned());
    }

    #[test]
    fn test_every_kind_has_a_usable_default_size() {
        for kind in WindowKind::ALL {
            let size = kind.info().default_size;
            assert!(size.width > 0.0 && size.height > 0.0, "{:?}", kind);
        }
    }
}
