use std::time::Duration;

/// Tunables for the instant search controller.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Quiescence window a query must survive before a lookup fires.
    pub debounce: Duration,
    /// Queries shorter than this (trimmed, in chars) never hit the network.
    pub min_query_len: usize,
    /// Upper bound on results kept for the dropdown.
    pub result_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(300),
            min_query_len: 2,
            result_limit: 20,
        }
    }
}
