//! Integration tests for `ScrapeClient` using wiremock HTTP mocks.

use maps_business_scraper::client::{resolve_outcome, ScrapeClient, ScrapeError, ScrapeOutcome};
use maps_business_scraper::constants::GENERIC_SCRAPE_ERROR;
use maps_business_scraper::types::{ScrapePhase, ScrapeRequest};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> ScrapeClient {
    ScrapeClient::new(base_url).expect("client construction should not fail")
}

fn request(term: &str, limit: &str) -> ScrapeRequest {
    ScrapeRequest::parse(term, limit).expect("valid request")
}

#[tokio::test]
async fn scrape_sends_the_exact_wire_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/scrape"))
        .and(body_json(serde_json::json!({
            "search_for": "coffee shops",
            "total": 50
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "businesses": [
                { "name": "Joe's", "address": "1 Main St" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let businesses = client
        .scrape(&request("coffee shops", "50"))
        .await
        .expect("should parse businesses");

    assert_eq!(businesses.len(), 1);
    assert_eq!(businesses[0].name.as_deref(), Some("Joe's"));
    assert_eq!(businesses[0].address.as_deref(), Some("1 Main St"));
    // Fields the scraper did not fill still render, as placeholders
    assert_eq!(businesses[0].display_website(), "No website available");
    assert_eq!(businesses[0].display_coordinates(), "(N/A, N/A)");
}

#[tokio::test]
async fn scrape_parses_mixed_type_record_fields() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/scrape"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "businesses": [{
                "name": "Warung Kopi",
                "phone_number": "+62 812 0000",
                "reviews_count": 128,
                "reviews_average": 4.5,
                "latitude": -6.2,
                "longitude": 106.8,
                "website": ""
            }]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let businesses = client.scrape(&request("kopi", "10")).await.unwrap();

    let b = &businesses[0];
    assert_eq!(b.display_reviews_count(), "128");
    assert_eq!(b.display_rating(), "4.5");
    assert_eq!(b.display_coordinates(), "(-6.2, 106.8)");
    // "" website is treated as missing
    assert_eq!(b.display_website(), "No website available");
}

#[tokio::test]
async fn empty_and_missing_business_lists_resolve_to_the_empty_state() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/scrape"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "businesses": []
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let outcome = resolve_outcome(client.scrape(&request("nothing here", "5")).await);
    assert_eq!(outcome, ScrapeOutcome::Empty);
    assert_eq!(outcome.phase(), ScrapePhase::Empty);

    server.reset().await;
    Mock::given(method("POST"))
        .and(path("/scrape"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let outcome = resolve_outcome(client.scrape(&request("nothing here", "5")).await);
    assert_eq!(outcome, ScrapeOutcome::Empty);
}

#[tokio::test]
async fn server_error_field_is_surfaced_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/scrape"))
        .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
            "error": "rate limited"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.scrape(&request("coffee", "10")).await.unwrap_err();

    assert!(matches!(err, ScrapeError::Api(_)));
    assert_eq!(err.to_string(), "rate limited");
}

#[tokio::test]
async fn missing_error_field_falls_back_to_the_generic_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/scrape"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "details": "Page.goto: Timeout 3000ms exceeded."
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.scrape(&request("coffee", "10")).await.unwrap_err();

    assert_eq!(err.to_string(), GENERIC_SCRAPE_ERROR);
}

#[tokio::test]
async fn unparseable_error_body_is_a_deserialize_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/scrape"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.scrape(&request("coffee", "10")).await.unwrap_err();

    assert!(matches!(err, ScrapeError::Deserialize(_)));
}

#[tokio::test]
async fn record_order_is_preserved() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/scrape"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "businesses": [
                { "name": "First" },
                { "name": "Second" },
                { "name": "Third" }
            ]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let businesses = client.scrape(&request("ordered", "3")).await.unwrap();

    let names: Vec<_> = businesses.iter().map(|b| b.display_name()).collect();
    assert_eq!(names, ["First", "Second", "Third"]);
}
