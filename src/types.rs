//! Wire types for the scrape endpoint and the in-memory result model.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{placeholders, DEFAULT_TOTAL};

/// Request body for `POST /scrape`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrapeRequest {
    pub search_for: String,
    pub total: u32,
}

/// Client-side validation failure. Messages are shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a search term.")]
    EmptyTerm,
    #[error("Please enter a valid positive number for total results.")]
    NegativeLimit,
}

impl ScrapeRequest {
    /// Builds a request from raw form text.
    ///
    /// The search term is trimmed and must be non-empty. The limit is lenient:
    /// an empty, unparseable, or zero limit falls back to [`DEFAULT_TOTAL`],
    /// while an explicit negative number is rejected. The asymmetry between
    /// the two fields is deliberate and matches the backend's own validation.
    pub fn parse(term: &str, limit: &str) -> Result<Self, ValidationError> {
        let term = term.trim();
        if term.is_empty() {
            return Err(ValidationError::EmptyTerm);
        }

        let total = match limit.trim().parse::<i64>() {
            Ok(n) if n > 0 => n.min(i64::from(u32::MAX)) as u32,
            Ok(n) if n < 0 => return Err(ValidationError::NegativeLimit),
            // 0 counts as "not provided", like the rest of the unparseable cases
            _ => DEFAULT_TOTAL,
        };

        Ok(Self {
            search_for: term.to_owned(),
            total,
        })
    }
}

/// Successful response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ScrapeResponse {
    #[serde(default)]
    pub businesses: Vec<Business>,
}

/// Error envelope returned on non-2xx responses.
/// `details` carries the server-side exception text on internal errors.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

/// A backend value that arrives as either a number or a string.
///
/// The scraper emits `""` for numeric fields it could not read, so the
/// numeric-ish fields of [`Business`] cannot deserialize as plain numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Num(f64),
    Text(String),
}

impl Scalar {
    /// True when the value should be treated as absent: empty string or
    /// numeric zero (the original frontend tested fields for JS falsiness).
    pub fn is_blank(&self) -> bool {
        match self {
            Scalar::Num(n) => *n == 0.0,
            Scalar::Text(s) => s.trim().is_empty(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Whole numbers print without a trailing ".0" so review counts
            // round-trip as "128", not "128.0".
            Scalar::Num(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            Scalar::Num(n) => write!(f, "{n}"),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

/// One scraped business record. Every field is optional and untrusted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Business {
    pub name: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
    pub phone_number: Option<String>,
    pub reviews_count: Option<Scalar>,
    pub reviews_average: Option<Scalar>,
    pub latitude: Option<Scalar>,
    pub longitude: Option<Scalar>,
}

fn text_or<'a>(field: &'a Option<String>, placeholder: &'a str) -> &'a str {
    match field {
        Some(s) if !s.trim().is_empty() => s,
        _ => placeholder,
    }
}

fn scalar_or(field: &Option<Scalar>, placeholder: &str) -> String {
    match field {
        Some(v) if !v.is_blank() => v.to_string(),
        _ => placeholder.to_owned(),
    }
}

impl Business {
    pub fn display_name(&self) -> &str {
        text_or(&self.name, placeholders::NO_NAME)
    }

    pub fn display_address(&self) -> &str {
        text_or(&self.address, placeholders::NO_ADDRESS)
    }

    pub fn display_website(&self) -> &str {
        text_or(&self.website, placeholders::NO_WEBSITE)
    }

    pub fn display_phone(&self) -> &str {
        text_or(&self.phone_number, placeholders::NO_PHONE)
    }

    pub fn display_reviews_count(&self) -> String {
        scalar_or(&self.reviews_count, placeholders::NO_REVIEWS_COUNT)
    }

    pub fn display_rating(&self) -> String {
        scalar_or(&self.reviews_average, placeholders::NO_RATING)
    }

    /// Coordinate pair for display, each side defaulting independently.
    pub fn display_coordinates(&self) -> String {
        format!(
            "({}, {})",
            scalar_or(&self.latitude, placeholders::NO_COORDINATE),
            scalar_or(&self.longitude, placeholders::NO_COORDINATE),
        )
    }

    /// Row cells in export column order:
    /// name, address, website, phone, reviewsCount, averageRating, coordinates.
    /// Blank fields export as empty cells, not placeholders; the coordinate
    /// pair keeps its parenthesized shape with blank sides.
    pub fn export_row(&self) -> [String; 7] {
        [
            text_or(&self.name, "").to_owned(),
            text_or(&self.address, "").to_owned(),
            text_or(&self.website, "").to_owned(),
            text_or(&self.phone_number, "").to_owned(),
            scalar_or(&self.reviews_count, ""),
            scalar_or(&self.reviews_average, ""),
            format!(
                "({}, {})",
                scalar_or(&self.latitude, ""),
                scalar_or(&self.longitude, "")
            ),
        ]
    }
}

/// UI lifecycle of one submit cycle.
///
/// `Loading` is entered only from `Idle` on a valid submission; the three
/// terminal states are mutually exclusive and reachable only from `Loading`;
/// reset returns any state to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrapePhase {
    #[default]
    Idle,
    Loading,
    Results,
    Empty,
    Error,
}

impl ScrapePhase {
    /// Terminal render states keep the download/reset controls visible.
    pub fn shows_result_controls(self) -> bool {
        matches!(self, ScrapePhase::Results | ScrapePhase::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_term_and_reads_limit() {
        let req = ScrapeRequest::parse("  coffee shops  ", " 50 ").unwrap();
        assert_eq!(req.search_for, "coffee shops");
        assert_eq!(req.total, 50);
    }

    #[test]
    fn parse_rejects_empty_and_whitespace_terms() {
        assert_eq!(
            ScrapeRequest::parse("", "50"),
            Err(ValidationError::EmptyTerm)
        );
        assert_eq!(
            ScrapeRequest::parse("   ", "50"),
            Err(ValidationError::EmptyTerm)
        );
    }

    #[test]
    fn parse_defaults_limit_when_empty_unparseable_or_zero() {
        for limit in ["", "   ", "abc", "12.5", "0"] {
            let req = ScrapeRequest::parse("coffee", limit).unwrap();
            assert_eq!(req.total, DEFAULT_TOTAL, "limit input {limit:?}");
        }
    }

    #[test]
    fn parse_rejects_negative_limit() {
        assert_eq!(
            ScrapeRequest::parse("coffee", "-5"),
            Err(ValidationError::NegativeLimit)
        );
    }

    #[test]
    fn request_serializes_with_wire_field_names() {
        let req = ScrapeRequest::parse("coffee shops", "50").unwrap();
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({"search_for": "coffee shops", "total": 50})
        );
    }

    #[test]
    fn business_deserializes_mixed_scalar_types() {
        let b: Business = serde_json::from_str(
            r#"{
                "name": "Joe's",
                "reviews_count": 128,
                "reviews_average": "4.5",
                "latitude": -6.2,
                "longitude": ""
            }"#,
        )
        .unwrap();
        assert_eq!(b.reviews_count, Some(Scalar::Num(128.0)));
        assert_eq!(b.reviews_average, Some(Scalar::Text("4.5".into())));
        assert_eq!(b.display_reviews_count(), "128");
        assert_eq!(b.display_rating(), "4.5");
        assert_eq!(b.display_coordinates(), "(-6.2, N/A)");
    }

    #[test]
    fn missing_fields_render_placeholders_never_blanks() {
        let b = Business::default();
        assert_eq!(b.display_name(), placeholders::NO_NAME);
        assert_eq!(b.display_address(), placeholders::NO_ADDRESS);
        assert_eq!(b.display_website(), placeholders::NO_WEBSITE);
        assert_eq!(b.display_phone(), placeholders::NO_PHONE);
        assert_eq!(b.display_reviews_count(), placeholders::NO_REVIEWS_COUNT);
        assert_eq!(b.display_rating(), placeholders::NO_RATING);
        assert_eq!(b.display_coordinates(), "(N/A, N/A)");
    }

    #[test]
    fn empty_string_and_zero_count_as_missing() {
        let b: Business = serde_json::from_str(
            r#"{"website": "", "reviews_count": 0}"#,
        )
        .unwrap();
        assert_eq!(b.display_website(), placeholders::NO_WEBSITE);
        assert_eq!(b.display_reviews_count(), placeholders::NO_REVIEWS_COUNT);
    }

    #[test]
    fn export_row_uses_blanks_and_keeps_coordinate_shape() {
        let b: Business = serde_json::from_str(
            r#"{"name": "Joe's", "address": "1 Main St"}"#,
        )
        .unwrap();
        assert_eq!(
            b.export_row(),
            [
                "Joe's".to_owned(),
                "1 Main St".to_owned(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                "(, )".to_owned(),
            ]
        );
    }

    #[test]
    fn response_tolerates_missing_business_list() {
        let r: ScrapeResponse = serde_json::from_str("{}").unwrap();
        assert!(r.businesses.is_empty());
    }

    #[test]
    fn result_controls_follow_the_success_path() {
        assert!(ScrapePhase::Results.shows_result_controls());
        assert!(ScrapePhase::Empty.shows_result_controls());
        assert!(!ScrapePhase::Idle.shows_result_controls());
        assert!(!ScrapePhase::Loading.shows_result_controls());
        assert!(!ScrapePhase::Error.shows_result_controls());
    }
}
