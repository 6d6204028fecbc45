use super::blob_store::{is_valid_key, LocalStore};
use crate::error::{DeskError, DeskResult};
use crate::score_board::GameName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;

pub const BEST_SCORES_KEY: &str = "best_scores";

/// Result of submitting a finished game's score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub best: i64,
    pub is_new_best: bool,
}

/// Table slot for a game, or for one variant of it (minesweeper keeps a time per difficulty)
fn score_slot(game: GameName, variant: Option<&str>) -> DeskResult<String> {
    match variant {
        None => Ok(game.as_str().to_string()),
        Some(v) if is_valid_key(v) => Ok(format!("{}:{}", game.as_str(), v)),
        Some(v) => Err(DeskError::InvalidKey(v.to_string())),
    }
}

fn beats(game: GameName, candidate: i64, current: i64) -> bool {
    if game.lower_is_better() {
        candidate < current
    } else {
        candidate > current
    }
}

impl LocalStore {
    async fn best_score_table(&self) -> DeskResult<BTreeMap<String, i64>> {
        let Some(value) = self.read_blob(BEST_SCORES_KEY).await? else {
            return Ok(BTreeMap::new());
        };
        // A table of the wrong shape counts as empty
        Ok(serde_json::from_value(value).unwrap_or_default())
    }

    pub async fn best_score(&self, game: GameName, variant: Option<&str>) -> DeskResult<Option<i64>> {
        let slot = score_slot(game, variant)?;
        Ok(self.best_score_table().await?.get(&slot).copied())
    }

    /// Record a finished game. Keeps the better of the stored and submitted
    /// score; for minesweeper that is the lower time.
    ///
    /// `variant` splits a game's record, e.g. `Some("hard")` for a minesweeper difficulty.
    pub async fn record_score(
        &self,
        game: GameName,
        variant: Option<&str>,
        score: i64,
    ) -> DeskResult<ScoreRecord> {
        let slot = score_slot(game, variant)?;
        let _guard = self.write_lock.lock().await;

        let mut table = self.best_score_table().await?;
        let previous = table.get(&slot).copied();

        let is_new_best = match previous {
            None => true,
            Some(current) => beats(game, score, current),
        };
        if !is_new_best {
            return Ok(ScoreRecord {
                best: previous.unwrap_or(score),
                is_new_best,
            });
        }

        table.insert(slot.clone(), score);
        self.write_blob(BEST_SCORES_KEY, &serde_json::to_value(&table)?)
            .await?;

        info!(slot = %slot, score, "New best score");
        Ok(ScoreRecord {
            best: score,
            is_new_best,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_first_score_is_best() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());

        assert_eq!(store.best_score(GameName::Snake, None).await.unwrap(), None);
        let record = store.record_score(GameName::Snake, None, 12).await.unwrap();
        assert_eq!(record, ScoreRecord { best: 12, is_new_best: true });
        assert_eq!(store.best_score(GameName::Snake, None).await.unwrap(), Some(12));
    }

    #[tokio::test]
    async fn test_higher_is_better() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());

        store.record_score(GameName::Tetris, None, 1000).await.unwrap();
        let worse = store.record_score(GameName::Tetris, None, 400).await.unwrap();
        assert_eq!(worse, ScoreRecord { best: 1000, is_new_best: false });

        let better = store.record_score(GameName::Tetris, None, 1500).await.unwrap();
        assert!(better.is_new_best);
        assert_eq!(store.best_score(GameName::Tetris, None).await.unwrap(), Some(1500));
    }

    #[tokio::test]
    async fn test_minesweeper_keeps_lowest_time() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());

        store.record_score(GameName::Minesweeper, None, 90).await.unwrap();
        assert!(!store.record_score(GameName::Minesweeper, None, 120).await.unwrap().is_new_best);
        assert!(store.record_score(GameName::Minesweeper, None, 45).await.unwrap().is_new_best);
        assert_eq!(store.best_score(GameName::Minesweeper, None).await.unwrap(), Some(45));
    }

    #[tokio::test]
    async fn test_difficulties_tracked_independently() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());

        store.record_score(GameName::Minesweeper, Some("hard"), 240).await.unwrap();
        let easy = store.record_score(GameName::Minesweeper, Some("easy"), 10).await.unwrap();
        assert!(easy.is_new_best);

        assert_eq!(store.best_score(GameName::Minesweeper, Some("hard")).await.unwrap(), Some(240));
        assert_eq!(store.best_score(GameName::Minesweeper, Some("easy")).await.unwrap(), Some(10));
        assert_eq!(store.best_score(GameName::Minesweeper, Some("medium")).await.unwrap(), None);
        assert_eq!(store.best_score(GameName::Minesweeper, None).await.unwrap(), None);

        let slower_hard = store.record_score(GameName::Minesweeper, Some("hard"), 300).await.unwrap();
        assert_eq!(slower_hard, ScoreRecord { best: 240, is_new_best: false });
    }

    #[tokio::test]
    async fn test_invalid_variant_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        let err = store
            .record_score(GameName::Minesweeper, Some("../hard"), 5)
            .await
            .unwrap_err();
        assert!(matches!(err, DeskError::InvalidKey(_)));
    }

    #[tokio::test]
    async fn test_tie_is_not_new_best() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        store.record_score(GameName::Pong, None, 7).await.unwrap();
        assert!(!store.record_score(GameName::Pong, None, 7).await.unwrap().is_new_best);
    }

    #[tokio::test]
    async fn test_games_tracked_separately() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());

        store.record_score(GameName::Game2048, None, 2048).await.unwrap();
        store.record_score(GameName::Breakout, None, 300).await.unwrap();

        let table = store.read_blob(BEST_SCORES_KEY).await.unwrap().unwrap();
        assert_eq!(table, json!({ "2048": 2048, "breakout": 300 }));
    }

    #[tokio::test]
    async fn test_malformed_table_treated_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        store.write_blob(BEST_SCORES_KEY, &json!(["nope"])).await.unwrap();

        assert_eq!(store.best_score(GameName::Snake, None).await.unwrap(), None);
        assert!(store.record_score(GameName::Snake, None, 3).await.unwrap().is_new_best);
    }
}
