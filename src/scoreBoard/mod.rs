// Leaderboard client for the portal backend
// Reads the public leaderboard routes and falls back to demo data when the backend is unreachable

pub mod client;
pub mod demo;
pub mod types;

pub use client::LeaderboardClient;
pub use types::*;
