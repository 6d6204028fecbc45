// Wire types for the leaderboard API and the views handed to the frontend

use crate::error::DeskError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Games that can appear on the leaderboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GameName {
    #[serde(rename = "tetris")]
    Tetris,
    #[serde(rename = "snake")]
    Snake,
    #[serde(rename = "memory_match")]
    MemoryMatch,
    #[serde(rename = "pong")]
    Pong,
    #[serde(rename = "minesweeper")]
    Minesweeper,
    #[serde(rename = "2048")]
    Game2048,
    #[serde(rename = "breakout")]
    Breakout,
    #[serde(rename = "flappy_raven")]
    FlappyRaven,
    #[serde(rename = "slot_machine")]
    SlotMachine,
}

impl GameName {
    pub const ALL: [GameName; 9] = [
        GameName::Tetris,
        GameName::Snake,
        GameName::MemoryMatch,
        GameName::Pong,
        GameName::Minesweeper,
        GameName::Game2048,
        GameName::Breakout,
        GameName::FlappyRaven,
        GameName::SlotMachine,
    ];

    /// Games on the global board; slot machine credits are not ranked there
    pub const GLOBAL_BOARD: [GameName; 8] = [
        GameName::Tetris,
        GameName::Snake,
        GameName::MemoryMatch,
        GameName::Pong,
        GameName::Minesweeper,
        GameName::Game2048,
        GameName::Breakout,
        GameName::FlappyRaven,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GameName::Tetris => "tetris",
            GameName::Snake => "snake",
            GameName::MemoryMatch => "memory_match",
            GameName::Pong => "pong",
            GameName::Minesweeper => "minesweeper",
            GameName::Game2048 => "2048",
            GameName::Breakout => "breakout",
            GameName::FlappyRaven => "flappy_raven",
            GameName::SlotMachine => "slot_machine",
        }
    }

    /// Minesweeper records a clear time, where smaller wins
    pub fn lower_is_better(&self) -> bool {
        matches!(self, GameName::Minesweeper)
    }
}

impl FromStr for GameName {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameName::ALL
            .iter()
            .copied()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| DeskError::UnknownGame(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub player_name: Option<String>,
    pub wallet_address: String,
    pub score: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Body of `GET /leaderboard/:game`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardResponse {
    pub entries: Vec<LeaderboardEntry>,
    #[serde(default)]
    pub user_rank: Option<u32>,
    #[serde(default)]
    pub user_best_score: Option<i64>,
}

/// One element of `GET /leaderboard`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameLeaderboard {
    pub game: String,
    pub entries: Vec<LeaderboardEntry>,
}

/// Where a leaderboard view came from
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum LeaderboardSource {
    Live,
    /// Backend failed; `reason` is shown inline by the frontend
    Demo { reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardView {
    pub game: GameName,
    pub entries: Vec<LeaderboardEntry>,
    pub user_rank: Option<u32>,
    pub user_best_score: Option<i64>,
    pub source: LeaderboardSource,
}

impl LeaderboardView {
    pub fn is_demo(&self) -> bool {
        matches!(self.source, LeaderboardSource::Demo { .. })
    }
}
