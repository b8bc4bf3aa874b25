//! Configuration ingestion for the javsp scraper: load `config.ini`, apply
//! command-line overrides and normalize everything into typed settings.

pub mod cli;
pub mod config;
pub mod logging;
pub mod normalize;
