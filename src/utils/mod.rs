pub mod formatters;
pub mod market_id;
pub mod urls;
