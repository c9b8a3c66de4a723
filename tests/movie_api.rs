//! HTTP tests for the suggestion and language endpoints against a mocked
//! movie database.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use movie_suggester::app::create_app;
use movie_suggester::config::env::EnvKey;
use movie_suggester::config::settings::AppConfig;
use movie_suggester::state::AppState;
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "test-key";

async fn app_for(server: &MockServer) -> Router {
    let base_url = server.uri();
    let config = AppConfig::from_lookup(|key| match key {
        EnvKey::TmdbApiKey => Some(API_KEY.to_string()),
        EnvKey::TmdbBaseUrl => Some(base_url.clone()),
        _ => None,
    })
    .unwrap();
    create_app(AppState::new(config)).await
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn discover() -> wiremock::MockBuilder {
    Mock::given(method("GET"))
        .and(path("/discover/movie"))
        .and(query_param("api_key", API_KEY))
}

fn results(records: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "page": 1, "results": records }))
}

#[tokio::test]
async fn test_matching_movie_is_returned() {
    let server = MockServer::start().await;
    discover()
        .and(query_param("with_genres", "27"))
        .and(query_param("with_original_language", "en"))
        .and(query_param("sort_by", "popularity.desc"))
        .and(query_param_is_missing("certification"))
        .respond_with(results(json!([{
            "id": 42,
            "title": "X",
            "release_date": "2020-05-01",
            "vote_average": 7.2,
            "poster_path": "/p.jpg"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let app = app_for(&server).await;
    let (status, body) = get_json(
        app,
        "/get-movie?genre=horror&certification=&language=en&sort_by=popular",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "status": "success",
            "title": "X",
            "year": "2020",
            "rating": 7.2,
            "poster": "https://image.tmdb.org/t/p/w500/p.jpg",
            "link": "https://www.themoviedb.org/movie/42"
        })
    );
}

#[tokio::test]
async fn test_defaults_apply_when_query_is_empty() {
    let server = MockServer::start().await;
    discover()
        .and(query_param("with_genres", "35"))
        .and(query_param("with_original_language", "en"))
        .and(query_param("sort_by", "popularity.desc"))
        .respond_with(results(json!([{
            "id": 7,
            "title": "Funny",
            "release_date": null,
            "vote_average": 6.0,
            "poster_path": null
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get_json(app_for(&server).await, "/get-movie").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["year"], "N/A");
    assert_eq!(body["poster"], "");
}

#[tokio::test]
async fn test_certification_is_scoped_to_country() {
    let server = MockServer::start().await;
    discover()
        .and(query_param("certification", "R"))
        .and(query_param("certification_country", "US"))
        .and(query_param("sort_by", "vote_average.desc"))
        .respond_with(results(json!([{ "id": 1, "title": "Rated", "vote_average": 8.1 }])))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get_json(
        app_for(&server).await,
        "/get-movie?genre=drama&certification=R&sort_by=top_rated",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Rated");
}

#[tokio::test]
async fn test_empty_results_fall_back_to_popular_english() {
    let server = MockServer::start().await;
    discover()
        .and(query_param("with_genres", "37"))
        .respond_with(results(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    discover()
        .and(query_param_is_missing("with_genres"))
        .and(query_param_is_missing("certification"))
        .and(query_param("with_original_language", "en"))
        .and(query_param("sort_by", "popularity.desc"))
        .respond_with(results(json!([{
            "id": 550,
            "title": "Fight Club",
            "release_date": "1999-10-15",
            "vote_average": 8.4,
            "poster_path": "/fc.jpg"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get_json(
        app_for(&server).await,
        "/get-movie?genre=western&certification=NC-17&language=ko&sort_by=newest",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "fallback");
    assert_eq!(
        body["message"],
        "No movie found based on your selected filters. Here is a popular English movie instead."
    );
    assert_eq!(body["title"], "Fight Club");
    assert_eq!(body["link"], "https://www.themoviedb.org/movie/550");
}

#[tokio::test]
async fn test_repeated_query_keys_keep_first_value() {
    let server = MockServer::start().await;
    discover()
        .and(query_param("with_genres", "27"))
        .respond_with(results(json!([{ "id": 3, "title": "Scary", "vote_average": 6.5 }])))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get_json(
        app_for(&server).await,
        "/get-movie?genre=horror&genre=drama&sort_by=popular&sort_by=newest",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["title"], "Scary");
}

#[tokio::test]
async fn test_failing_fallback_query_is_bad_gateway() {
    let server = MockServer::start().await;
    discover()
        .and(query_param("with_genres", "27"))
        .respond_with(results(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    discover()
        .and(query_param_is_missing("with_genres"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get_json(app_for(&server).await, "/get-movie?genre=horror").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["status"], "error");
    assert!(body["message"].as_str().unwrap().contains("500"));
    assert!(body.get("title").is_none());
}

#[tokio::test]
async fn test_unreadable_records_are_skipped() {
    let server = MockServer::start().await;
    discover()
        .respond_with(results(json!([
            { "title": "no id", "vote_average": null },
            { "id": 11, "title": "Kept", "release_date": "2001-01-01", "vote_average": null, "poster_path": null }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get_json(app_for(&server).await, "/get-movie").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["title"], "Kept");
    assert_eq!(body["rating"], 0.0);
    assert_eq!(body["link"], "https://www.themoviedb.org/movie/11");
}

#[tokio::test]
async fn test_null_results_counts_as_empty() {
    let server = MockServer::start().await;
    discover()
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": null })))
        .expect(2)
        .mount(&server)
        .await;

    let (status, body) = get_json(app_for(&server).await, "/get-movie").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No movies found, even in English!");
}

#[tokio::test]
async fn test_not_found_when_fallback_is_empty() {
    let server = MockServer::start().await;
    discover()
        .respond_with(results(json!([])))
        .expect(2)
        .mount(&server)
        .await;

    let (status, body) = get_json(app_for(&server).await, "/get-movie?genre=horror").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({ "status": "error", "message": "No movies found, even in English!" })
    );
}

#[tokio::test]
async fn test_missing_results_key_counts_as_empty() {
    let server = MockServer::start().await;
    discover()
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "page": 1 })))
        .expect(2)
        .mount(&server)
        .await;

    let (status, body) = get_json(app_for(&server).await, "/get-movie").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn test_upstream_error_status_is_bad_gateway() {
    let server = MockServer::start().await;
    discover()
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "status_code": 7,
            "status_message": "Invalid API key: You must be granted a valid key."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get_json(app_for(&server).await, "/get-movie").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["status"], "error");
    assert!(body["message"].as_str().unwrap().contains("401"));
    assert!(body.get("title").is_none());
}

#[tokio::test]
async fn test_malformed_upstream_body_is_bad_gateway() {
    let server = MockServer::start().await;
    discover()
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let (status, body) = get_json(app_for(&server).await, "/get-movie").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["status"], "error");
    assert!(body["message"].as_str().unwrap().starts_with("malformed"));
}

#[tokio::test]
async fn test_unreachable_upstream_is_bad_gateway() {
    let server = MockServer::start().await;
    let app = app_for(&server).await;
    drop(server);

    let (status, body) = get_json(app, "/get-movie").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn test_languages_are_reshaped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/configuration/languages"))
        .and(query_param("api_key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "iso_639_1": "en", "english_name": "English" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get_json(app_for(&server).await, "/get-languages").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{ "code": "en", "name": "English" }]));
}

#[tokio::test]
async fn test_languages_non_list_is_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/configuration/languages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": false })))
        .mount(&server)
        .await;

    let (status, body) = get_json(app_for(&server).await, "/get-languages").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to fetch languages" }));
}

#[tokio::test]
async fn test_languages_upstream_error_is_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/configuration/languages"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get_json(app_for(&server).await, "/get-languages").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to fetch languages" }));
}

#[tokio::test]
async fn test_openapi_document_lists_endpoints() {
    let server = MockServer::start().await;
    let (status, body) = get_json(app_for(&server).await, "/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/get-movie"].is_object());
    assert!(body["paths"]["/get-languages"].is_object());
}

#[tokio::test]
async fn test_health_and_landing_page() {
    let server = MockServer::start().await;
    let app = app_for(&server).await;

    let response = app
        .clone()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(String::from_utf8_lossy(&bytes).contains("/get-movie"));
}
