/// HTTP endpoint paths.
pub mod endpoints {
    pub const HEALTH: &str = "/health";
    pub const SUBMIT: &str = "/submit";
    pub const SCORES: &str = "/scores";
    pub const INDEX: &str = "/";
    pub const LEADERBOARD: &str = "/leaderboard";
}

/// Query limits applied by the façade before reaching the store.
pub mod limits {
    /// Records returned by `/scores` when no limit is given.
    pub const DEFAULT_SCORES_LIMIT: usize = 10;
    /// Ceiling on the `/scores` limit.
    pub const MAX_SCORES_LIMIT: usize = 50;
    /// Rows shown per category on the HTML leaderboard.
    pub const LEADERBOARD_ROWS: usize = 50;
}
