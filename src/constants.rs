//! Application constants and configuration

/// Base URL of the scraping service (the backend's default dev bind).
/// Overridable in settings.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000";

/// Result limit used when the limit field is empty or unparseable.
pub const DEFAULT_TOTAL: u32 = 1000;

/// Shown when the server reports a failure without an `error` field.
pub const GENERIC_SCRAPE_ERROR: &str = "An unknown error occurred.";

/// Export filename prefix; the sanitized search term is appended.
pub const EXPORT_FILE_PREFIX: &str = "Hasil_Scraping_Google_Maps_";

/// Worksheet name of the exported workbook.
pub const SHEET_NAME: &str = "Businesses";

pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Placeholder strings for record fields the scraper could not fill.
/// Display-only; exports leave these cells blank instead.
pub mod placeholders {
    pub const NO_NAME: &str = "No name available";
    pub const NO_ADDRESS: &str = "No address available";
    pub const NO_WEBSITE: &str = "No website available";
    pub const NO_PHONE: &str = "No phone available";
    pub const NO_REVIEWS_COUNT: &str = "No reviews count available";
    pub const NO_RATING: &str = "No rating available";
    pub const NO_COORDINATE: &str = "N/A";
}
