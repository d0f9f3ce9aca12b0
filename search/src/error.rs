use thiserror::Error;

/// Failure classes for a search lookup.
///
/// The controller treats all three identically: clear results, log, wait for
/// the next keystroke. No retries.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("search endpoint returned status {0}")]
    Status(u16),

    #[error("malformed search payload: {0}")]
    Payload(String),
}
