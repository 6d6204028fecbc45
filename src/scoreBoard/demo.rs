// Fixed leaderboard shown when the backend cannot be reached

use super::types::LeaderboardEntry;

const DEMO_ROWS: [(Option<&str>, &str, i64); 10] = [
    (Some("RavenMaster"), "DEMO1...ABC", 9999),
    (Some("NevermoreNinja"), "DEMO2...DEF", 8750),
    (Some("CryptoKing"), "DEMO3...GHI", 7500),
    (Some("AlgoWhale"), "DEMO4...JKL", 6200),
    (Some("BlockchainBird"), "DEMO5...MNO", 5100),
    (None, "DEMO6...PQR", 4800),
    (Some("NFTCollector"), "DEMO7...STU", 4200),
    (Some("PixelPioneer"), "DEMO8...VWX", 3900),
    (None, "DEMO9...YZA", 3500),
    (Some("GameOnChain"), "DEMO10...BCD", 3100),
];

pub fn demo_entries() -> Vec<LeaderboardEntry> {
    DEMO_ROWS
        .iter()
        .enumerate()
        .map(|(i, (name, wallet, score))| LeaderboardEntry {
            rank: i as u32 + 1,
            player_name: name.map(str::to_string),
            wallet_address: wallet.to_string(),
            score: *score,
            created_at: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_is_ranked_by_score() {
        let entries = demo_entries();
        assert_eq!(entries.len(), 10);
        assert_eq!(entries[0].rank, 1);
        assert_eq!(entries[9].rank, 10);
        assert!(entries.windows(2).all(|w| w[0].score > w[1].score));
    }
}
