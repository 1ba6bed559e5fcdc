use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use mockall::mock;
use serde_json::json;

use moodreel::api::{create_router, AppState};
use moodreel::error::{AppError, AppResult};
use moodreel::models::MovieCandidate;
use moodreel::services::catalog::CatalogProvider;
use moodreel::services::generation::{OpenAiClient, TextGenerator};

mock! {
    Catalog {}

    #[async_trait]
    impl CatalogProvider for Catalog {
        async fn discover(
            &self,
            mood: &str,
            decade: i32,
            min_rating: f64,
            country: &str,
        ) -> AppResult<Vec<MovieCandidate>>;
    }
}

mock! {
    Generator {}

    #[async_trait]
    impl TextGenerator for Generator {
        async fn generate(&self, prompt: &str) -> AppResult<String>;
    }
}

fn create_test_server(catalog: MockCatalog, generator: MockGenerator) -> TestServer {
    let state = AppState::new(Arc::new(catalog), Arc::new(generator));
    let app = create_router(state);
    TestServer::new(app).unwrap()
}

fn candidate(title: &str, rating: Option<f64>, overview: Option<&str>) -> MovieCandidate {
    MovieCandidate {
        title: title.to_string(),
        vote_average: rating,
        overview: overview.map(str::to_string),
    }
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server(MockCatalog::new(), MockGenerator::new());
    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_moods_endpoint_lists_the_ten_moods() {
    let server = create_test_server(MockCatalog::new(), MockGenerator::new());
    let response = server.get("/api/v1/moods").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let moods = body["moods"].as_array().unwrap();
    assert_eq!(moods.len(), 10);
    assert!(moods.contains(&json!("romantic")));
}

#[tokio::test]
async fn test_recommendation_happy_path() {
    let mut catalog = MockCatalog::new();
    catalog.expect_discover().times(1).returning(|_, _, _, _| {
        Ok(vec![candidate(
            "Paddington 2",
            Some(7.8),
            Some("A bear hunts for the perfect present."),
        )])
    });

    let mut generator = MockGenerator::new();
    generator
        .expect_generate()
        .times(1)
        .returning(|_| Ok("You should watch Paddington 2 (7.8)!".to_string()));

    let server = create_test_server(catalog, generator);
    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({
            "mood": "happy",
            "decade": 2010,
            "min_rating": 7.0,
            "country": "GB",
            "count": 1
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(
        body["recommendation"],
        "You should watch Paddington 2 (7.8)!"
    );
    assert!(body.get("warning").is_none());
}

#[tokio::test]
async fn test_empty_catalog_yields_warning_and_no_generation() {
    let mut catalog = MockCatalog::new();
    catalog
        .expect_discover()
        .times(1)
        .returning(|_, _, _, _| Ok(vec![]));

    let mut generator = MockGenerator::new();
    generator.expect_generate().times(0);

    let server = create_test_server(catalog, generator);
    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({
            "mood": "curious",
            "decade": 1980,
            "min_rating": 9.9,
            "country": "US",
            "count": 3
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(
        body["warning"],
        "No movies found for your criteria. Try adjusting your filters."
    );
    assert!(body.get("recommendation").is_none());
}

#[tokio::test]
async fn test_catalog_failure_surfaces_as_bad_gateway() {
    let mut catalog = MockCatalog::new();
    catalog.expect_discover().times(1).returning(|_, _, _, _| {
        Err(AppError::CatalogApi {
            status: 401,
            body: "Invalid API key".to_string(),
        })
    });

    let mut generator = MockGenerator::new();
    generator.expect_generate().times(0);

    let server = create_test_server(catalog, generator);
    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({
            "mood": "sad",
            "decade": 2000,
            "min_rating": 5.0,
            "country": "US",
            "count": 2
        }))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = response.json();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Catalog API returned status 401"));
}

#[tokio::test]
async fn test_missing_generation_credential_is_actionable() {
    let mut catalog = MockCatalog::new();
    catalog
        .expect_discover()
        .times(1)
        .returning(|_, _, _, _| Ok(vec![candidate("Solaris", Some(7.9), None)]));

    // A real client without a key: the precondition fires before any
    // network call, so the unroutable URL is never contacted.
    let generator = OpenAiClient::new(None, "http://127.0.0.1:1".to_string());
    let state = AppState::new(Arc::new(catalog), Arc::new(generator));
    let server = TestServer::new(create_router(state)).unwrap();

    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({
            "mood": "sci-fi",
            "decade": 2000,
            "min_rating": 7.0,
            "country": "US",
            "count": 1
        }))
        .await;

    response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("OPENAI_API_KEY"));
    assert!(message.contains("environment"));
}

#[tokio::test]
async fn test_count_out_of_range_is_rejected() {
    let mut catalog = MockCatalog::new();
    catalog.expect_discover().times(0);
    let mut generator = MockGenerator::new();
    generator.expect_generate().times(0);

    let server = create_test_server(catalog, generator);
    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({
            "mood": "happy",
            "decade": 2020,
            "min_rating": 5.0,
            "country": "US",
            "count": 11
        }))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

/// End-to-end scenario: romantic mood, 2010s, three candidates of which one
/// has no rating. The prompt must carry exactly three formatted lines, the
/// third showing the N/A sentinel before its synopsis.
#[tokio::test]
async fn test_romantic_scenario_prompt_shape() {
    let mut catalog = MockCatalog::new();
    catalog
        .expect_discover()
        .withf(|mood: &str, decade: &i32, min_rating: &f64, country: &str| {
            mood == "romantic" && *decade == 2010 && *min_rating == 7.0 && country == "US"
        })
        .times(1)
        .returning(|_, _, _, _| {
            Ok(vec![
                candidate("Her", Some(8.0), Some("A lonely writer falls for an OS.")),
                candidate("About Time", Some(7.8), Some("A man relives his days.")),
                candidate("Hidden Gem", None, Some("A romance nobody rated.")),
            ])
        });

    let mut generator = MockGenerator::new();
    generator
        .expect_generate()
        .withf(|prompt: &str| {
            let lines: Vec<&str> = prompt.lines().filter(|l| l.starts_with("- ")).collect();
            lines.len() == 3
                && lines[2] == "- Hidden Gem (TMDB rating: N/A): A romance nobody rated."
        })
        .times(1)
        .returning(|_| Ok("Three romantic picks.".to_string()));

    let server = create_test_server(catalog, generator);
    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({
            "mood": "romantic",
            "decade": 2010,
            "min_rating": 7.0,
            "country": "US",
            "count": 3
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["recommendation"], "Three romantic picks.");
}
