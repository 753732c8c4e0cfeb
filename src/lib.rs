//! Maps Business Scraper - desktop client for the Google Maps business
//! scraping service.
//!
//! The GUI collects a search term and result limit, posts them to the
//! service's `/scrape` endpoint, renders the returned business records, and
//! exports them to a spreadsheet.

pub mod app;
pub mod client;
pub mod constants;
pub mod export;
pub mod settings;
pub mod theme;
pub mod types;
pub mod ui;
pub mod utils;
