pub mod api;
pub mod logger;
