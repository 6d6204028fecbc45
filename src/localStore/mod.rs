// Client-side persisted state: JSON blobs under <app_data>/store/<key>.json
// Replaces the browser's localStorage for best scores, poll votes and the cached gallery page

pub mod best_scores;
pub mod blob_store;

pub use best_scores::{ScoreRecord, BEST_SCORES_KEY};
pub use blob_store::LocalStore;
