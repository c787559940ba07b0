//! Yahoo Finance chart endpoint settings

pub struct YahooConfig {
    pub base_url: &'static str,
    /// Look-back window requested from the chart endpoint
    pub range: &'static str,
    pub interval: &'static str,
    /// Yahoo rejects requests without a browser-looking agent
    pub user_agent: &'static str,
    pub timeout_ms: u64,
}

pub const YAHOO: YahooConfig = YahooConfig {
    base_url: "https://query1.finance.yahoo.com",
    range: "3mo",
    interval: "1d",
    user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    timeout_ms: 10_000,
};
