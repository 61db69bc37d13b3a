use thiserror::Error;

/// Failure at the fetch boundary.
///
/// Every `DataSource` call returns `Result<T, FetchError>`. The scheduler
/// never lets one of these escape: it is logged and turned into a fallback
/// message for the affected region only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Transport failure or non-2xx HTTP status.
    #[error("Network error: {0}")]
    Network(String),

    /// Response body was not the JSON we expected.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Response identity does not match the request (e.g. wrong ticker).
    #[error("Data mismatch: requested {requested} but received {received}")]
    DataMismatch { requested: String, received: String },
}

/// Unified error type for the rest of trade-tracker-core.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Fetch ───────────────────────────────────────────────────────
    #[error(transparent)]
    Fetch(#[from] FetchError),

    // ── Configuration ───────────────────────────────────────────────
    #[error("Configuration error: {0}")]
    Config(String),

    // ── Business Logic ──────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Export failed: {0}")]
    Export(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Parse(e.to_string())
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        // reqwest errors embed the full URL; drop the query string.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        if e.is_decode() {
            FetchError::Parse(sanitized)
        } else {
            FetchError::Network(sanitized)
        }
    }
}

impl From<config::ConfigError> for CoreError {
    fn from(e: config::ConfigError) -> Self {
        CoreError::Config(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Fetch(FetchError::from(e))
    }
}
