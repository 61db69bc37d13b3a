/// Read-only endpoints of the dashboard API.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Portfolio summary of the default profile
    Portfolio,
    /// Portfolio summary of a named profile
    ProfilePortfolio(String),
    /// Single-stock detail
    Stock(String),
    /// Quote of the day
    Quote,
    /// Portfolio vs. S&P 500 comparison
    IndexComparison,
}

impl Endpoint {
    /// Path relative to the API base, always starting with `/`.
    pub fn path(&self) -> String {
        match self {
            Endpoint::Portfolio => "/portfolio".to_string(),
            Endpoint::ProfilePortfolio(id) => format!("/portfolio/{id}"),
            Endpoint::Stock(ticker) => format!("/stock/{}", ticker.to_uppercase()),
            Endpoint::Quote => "/nancy-quote".to_string(),
            Endpoint::IndexComparison => "/sp500-comparison".to_string(),
        }
    }

    /// Full URL under `base` (a trailing slash on `base` is ignored).
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}
