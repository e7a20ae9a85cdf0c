use anyhow::Result;
use crate::models::market::{Market, MarketResponse, MarketsResponse, NotificationCountResponse};
use itertools::Itertools;
use crate::services::logger::log_error;

/// Fetches a single market by its canonical shortcode. The slug part of a
/// composite URL id never reaches the backend.
pub async fn fetch_market(site_url: &str, shortcode: &str) -> Result<Market> {
    let client = reqwest::Client::new();
    let url = format!("{}/api/markets/{}", site_url.trim_end_matches('/'), shortcode);

    let response = client.get(&url).send().await?;
    let response_text = response.text().await?;

    match serde_json::from_str::<MarketResponse>(&response_text) {
        Ok(parsed) => {
            if parsed.status.error_code != 0 {
                let error_msg = parsed.status.error_message.unwrap_or_default();
                log_error("API Error", &error_msg)?;
                anyhow::bail!("API Error: {}", error_msg);
            }
            match parsed.data {
                Some(market) => Ok(market),
                None => anyhow::bail!("Market not found: {}", shortcode),
            }
        }
        Err(e) => {
            log_error("Parse Error", &e.to_string())?;
            anyhow::bail!("Failed to parse market response: {}", e)
        }
    }
}

/// Fetches several markets in one call, for the watchlist view.
pub async fn fetch_markets(site_url: &str, shortcodes: &[String]) -> Result<Vec<Market>> {
    let client = reqwest::Client::new();
    let url = format!("{}/api/markets", site_url.trim_end_matches('/'));
    let codes = shortcodes.iter()
        .map(|code| code.as_str())
        .join(",");

    let response = client
        .get(&url)
        .query(&[("shortcodes", codes.as_str())])
        .send()
        .await?;

    let response_text = response.text().await?;

    match serde_json::from_str::<MarketsResponse>(&response_text) {
        Ok(parsed) => {
            if parsed.status.error_code != 0 {
                let error_msg = parsed.status.error_message.unwrap_or_default();
                log_error("API Error", &error_msg)?;
                anyhow::bail!("API Error: {}", error_msg);
            }
            Ok(parsed.data)
        }
        Err(e) => {
            log_error("Parse Error", &e.to_string())?;
            anyhow::bail!("Failed to parse markets response: {}", e)
        }
    }
}

/// Fetches the unread notification count for the current session.
///
/// Recovers locally: any failure (network, auth, parse) is logged and the
/// count falls back to 0 so the display never blocks on this endpoint.
pub async fn fetch_notification_count(site_url: &str, session_token: Option<&str>) -> u64 {
    match try_fetch_notification_count(site_url, session_token).await {
        Ok(count) => count,
        Err(e) => {
            log_error("Notification Fetch Error", &e.to_string()).unwrap_or(());
            0
        }
    }
}

async fn try_fetch_notification_count(site_url: &str, session_token: Option<&str>) -> Result<u64> {
    let client = reqwest::Client::new();
    let url = format!("{}/api/notifications/count", site_url.trim_end_matches('/'));

    let mut request = client.get(&url);
    if let Some(token) = session_token {
        request = request.bearer_auth(token);
    }

    let response = request.send().await?;
    let parsed = response.json::<NotificationCountResponse>().await?;
    Ok(parsed.count)
}
