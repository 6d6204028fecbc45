// Pure drag/resize geometry
pub mod geometry;

// Window manager state: open set, z-order, dock, pointer gestures
pub mod state;

// Leaderboard client with demo fallback
#[path = "scoreBoard/mod.rs"]
pub mod score_board;

// JSON blobs persisted in the app data directory
#[path = "localStore/mod.rs"]
pub mod local_store;

pub mod config;
pub mod error;
pub mod logging;

// Native shell commands and events
#[cfg(feature = "desktop")]
mod desktop;

#[cfg(feature = "desktop")]
pub use desktop::run;
