use super::demo::demo_entries;
use super::types::{GameLeaderboard, GameName, LeaderboardResponse, LeaderboardSource, LeaderboardView};
use crate::config::LeaderboardConfig;
use crate::error::{DeskError, DeskResult};
use std::time::Duration;
use tracing::{debug, warn};

const WALLET_HEADER: &str = "X-Wallet-Address";
const FALLBACK_MESSAGE: &str = "Failed to load leaderboard. Showing demo data.";

/// HTTP client for the public leaderboard routes
#[derive(Debug, Clone)]
pub struct LeaderboardClient {
    http: reqwest::Client,
    api_base: String,
    limit: u32,
}

impl LeaderboardClient {
    pub fn new(config: &LeaderboardConfig) -> DeskResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self::with_http(http, config))
    }

    /// Use a preconfigured HTTP client (proxies, TLS roots, ...)
    pub fn with_http(http: reqwest::Client, config: &LeaderboardConfig) -> Self {
        Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            limit: config.limit,
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Fetch one game's leaderboard
    ///
    /// # Arguments
    /// * `game` - Which board to load
    /// * `wallet_address` - Connected wallet, if any; lets the backend report the user's rank
    pub async fn try_fetch_game(
        &self,
        game: GameName,
        wallet_address: Option<&str>,
    ) -> DeskResult<LeaderboardResponse> {
        let url = format!(
            "{}/leaderboard/{}?limit={}",
            self.api_base,
            game.as_str(),
            self.limit
        );

        let mut request = self.http.get(&url);
        if let Some(wallet) = wallet_address {
            request = request.header(WALLET_HEADER, wallet);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(DeskError::Status(response.status().as_u16()));
        }

        let body = response.json::<LeaderboardResponse>().await?;
        debug!(game = game.as_str(), entries = body.entries.len(), "Leaderboard loaded");
        Ok(body)
    }

    /// Fetch one game's leaderboard, falling back to demo data on any failure.
    /// Never fails: the view's `source` says whether the data is live.
    pub async fn fetch_game(&self, game: GameName, wallet_address: Option<&str>) -> LeaderboardView {
        match self.try_fetch_game(game, wallet_address).await {
            Ok(body) => LeaderboardView {
                game,
                entries: body.entries,
                user_rank: body.user_rank,
                user_best_score: body.user_best_score,
                source: LeaderboardSource::Live,
            },
            Err(e) => {
                warn!(game = game.as_str(), error = %e, "Leaderboard unavailable, using demo data");
                LeaderboardView {
                    game,
                    entries: demo_entries(),
                    user_rank: None,
                    user_best_score: None,
                    source: LeaderboardSource::Demo {
                        reason: FALLBACK_MESSAGE.to_string(),
                    },
                }
            }
        }
    }

    /// Top entries of every game
    pub async fn try_fetch_all(&self) -> DeskResult<Vec<GameLeaderboard>> {
        let url = format!("{}/leaderboard", self.api_base);
        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(DeskError::Status(response.status().as_u16()));
        }
        Ok(response.json::<Vec<GameLeaderboard>>().await?)
    }

    /// Top entries of every ranked game, or demo boards for them when the backend fails
    pub async fn fetch_all(&self) -> Vec<GameLeaderboard> {
        match self.try_fetch_all().await {
            Ok(boards) => boards,
            Err(e) => {
                warn!(error = %e, "Global leaderboard unavailable, using demo data");
                GameName::GLOBAL_BOARD
                    .iter()
                    .map(|game| GameLeaderboard {
                        game: game.as_str().to_string(),
                        entries: demo_entries(),
                    })
                    .collect()
            }
        }
    }
}
