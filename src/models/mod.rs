pub mod config;
pub mod market;
pub mod outcome;
