use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct MarketResponse {
    pub status: Status,
    #[serde(default)]
    pub data: Option<Market>,
}

#[derive(Debug, Deserialize)]
pub struct MarketsResponse {
    pub status: Status,
    #[serde(default)]
    pub data: Vec<Market>,
}

#[derive(Debug, Deserialize)]
pub struct Market {
    pub shortcode: String,
    /// Canonical slug. The slug carried in a URL may be stale relative to
    /// this one and is never used for lookups.
    pub slug: String,
    pub question: String,
    pub volume: f64,
    pub liquidity: Option<f64>,
    pub outcomes: Vec<MarketOutcome>,
}

#[derive(Debug, Deserialize)]
pub struct MarketOutcome {
    /// Side as free text from the backend; normalized to `Side` at the
    /// display boundary.
    pub outcome: String,
    pub price: f64,
}

#[derive(Debug, Deserialize)]
pub struct NotificationCountResponse {
    pub count: u64,
}

#[derive(Debug, Deserialize)]
pub struct Status {
    pub error_code: i32,
    pub error_message: Option<String>,
}
