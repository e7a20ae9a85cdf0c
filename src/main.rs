use std::env;
use std::fs;
use anyhow::Result;

mod models;
mod services;
mod utils;

use models::config::Config;
use models::market::MarketOutcome;
use models::outcome::Side;
use services::{api, logger};
use utils::formatters::format_number;
use utils::market_id::parse_market_id;
use utils::urls::market_url;

#[tokio::main]
async fn main() -> Result<()> {
    let config = load_config()?;

    let res = run(&config).await;
    if let Err(err) = &res {
        logger::log_error("Application Error", &format!("{:?}", err))?;
    }
    res
}

/// Reads `config.json` from the working directory. A missing file means
/// defaults; a present but malformed file is an error.
fn load_config() -> Result<Config> {
    match fs::read_to_string("config.json") {
        Ok(config_str) => Ok(serde_json::from_str(&config_str)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Config::default()),
        Err(e) => Err(e.into()),
    }
}

async fn run(config: &Config) -> Result<()> {
    match env::args().nth(1) {
        Some(id) => show_market(config, &id).await?,
        None => show_watchlist(config).await?,
    }

    let count =
        api::fetch_notification_count(&config.site_url, config.session_token.as_deref()).await;
    println!("Notifications: {}", count);

    Ok(())
}

async fn show_market(config: &Config, id: &str) -> Result<()> {
    let parsed = parse_market_id(id);
    let market = api::fetch_market(&config.site_url, parsed.shortcode).await?;

    // The slug in the URL is display-only and may be stale; the lookup above
    // went by shortcode alone.
    if !parsed.slug_matches(&market.slug) {
        logger::log_info(
            "Stale Slug",
            &format!(
                "URL slug for {} diverges from canonical slug '{}'",
                parsed.shortcode, market.slug
            ),
        )?;
        println!(
            "Canonical URL: {}",
            market_url(&config.site_url, &market.shortcode, &market.slug)
        );
    }

    println!("{}", market.question);
    println!("Volume:    {}", format_number(market.volume));
    if let Some(liquidity) = market.liquidity {
        println!("Liquidity: {}", format_number(liquidity));
    }
    for outcome in &market.outcomes {
        println!("  {}", format_outcome(outcome));
    }

    Ok(())
}

async fn show_watchlist(config: &Config) -> Result<()> {
    if config.watchlist.is_empty() {
        println!("Watchlist is empty. Pass a market id or add shortcodes to config.json.");
        return Ok(());
    }

    let markets = api::fetch_markets(&config.site_url, &config.watchlist).await?;
    for market in &markets {
        println!(
            "{:<12} {:>12}  {}",
            market.shortcode,
            format_number(market.volume),
            market.question
        );
    }

    Ok(())
}

fn format_outcome(outcome: &MarketOutcome) -> String {
    match outcome.outcome.parse::<Side>() {
        Ok(side) => format!(
            "{} {:<3} {}",
            side.glyph(),
            side.to_string(),
            format_number(outcome.price)
        ),
        Err(_) => format!("  {:<3} {}", outcome.outcome, format_number(outcome.price)),
    }
}
