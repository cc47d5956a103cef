use httpmock::prelude::*;
use seo_keyword_finder::core::view::{render, OutputFormat, View};
use seo_keyword_finder::utils::error::{FETCH_FAILURE_MESSAGE, VALIDATION_MESSAGE};
use seo_keyword_finder::{ApiKey, AppConfig, GeminiAdapter, QueryController, SubmitOutcome};
use serde_json::json;

const MODEL_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

fn controller_for(server: &MockServer) -> QueryController<GeminiAdapter<AppConfig>> {
    let config = AppConfig::new(ApiKey::new("test-key")).with_base_url(server.base_url());
    QueryController::new(GeminiAdapter::new(config).unwrap())
}

fn completion_text(text: &str) -> serde_json::Value {
    json!({ "candidates": [{ "content": { "parts": [ { "text": text } ] } }] })
}

#[tokio::test]
async fn test_search_renders_sorted_table() {
    let server = MockServer::start_async().await;
    let payload = json!([
        { "keyword": "recette facile", "volume": 500, "difficulty": 22 },
        { "keyword": "recette facile rapide", "volume": 12000, "difficulty": 48 },
        { "keyword": "recette facile dessert", "volume": 300, "difficulty": 9 }
    ]);
    let api_mock = server
        .mock_async(|when, then| {
            when.method(POST).path(MODEL_PATH);
            then.status(200)
                .json_body(completion_text(&payload.to_string()));
        })
        .await;

    let controller = controller_for(&server);
    let outcome = controller.submit_query("recette facile").await;

    api_mock.assert_async().await;
    assert_eq!(outcome, SubmitOutcome::Completed { count: 3 });

    let state = controller.snapshot();
    assert_eq!(state.results[0].keyword, "recette facile rapide");

    let table = render(&View::from_state(&state), OutputFormat::Table, false).unwrap();
    assert!(table.contains("12 000"));
    assert!(table.contains("Possible"));
    assert!(table.find("12 000").unwrap() < table.find("300").unwrap());
}

#[tokio::test]
async fn test_empty_query_makes_no_request() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(POST).path(MODEL_PATH);
            then.status(200).json_body(completion_text("[]"));
        })
        .await;

    let controller = controller_for(&server);
    let outcome = controller.submit_query("   ").await;

    assert_eq!(outcome, SubmitOutcome::Rejected);
    api_mock.assert_hits_async(0).await;

    let state = controller.snapshot();
    assert!(!state.is_loading);
    assert_eq!(View::from_state(&state), View::Error(VALIDATION_MESSAGE));
}

#[tokio::test]
async fn test_provider_failure_shows_generic_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(MODEL_PATH);
            then.status(500).body("internal upstream failure: quota shard 7");
        })
        .await;

    let controller = controller_for(&server);
    let outcome = controller.submit_query("recette facile").await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    let state = controller.snapshot();
    assert!(!state.is_loading);
    assert!(state.has_searched);
    assert!(state.results.is_empty());

    let shown = render(&View::from_state(&state), OutputFormat::Table, false).unwrap();
    assert_eq!(shown, FETCH_FAILURE_MESSAGE);
    assert!(!shown.contains("quota"));
}

#[tokio::test]
async fn test_zero_results_is_distinct_from_never_searched() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(MODEL_PATH);
            then.status(200).json_body(completion_text("[]"));
        })
        .await;

    let controller = controller_for(&server);
    assert_eq!(View::from_state(&controller.snapshot()), View::NotSearched);

    let outcome = controller.submit_query("mot introuvable").await;

    assert_eq!(outcome, SubmitOutcome::Completed { count: 0 });
    assert_eq!(View::from_state(&controller.snapshot()), View::Empty);
}

#[tokio::test]
async fn test_recovers_after_failure() {
    let server = MockServer::start_async().await;
    let mut failing = server
        .mock_async(|when, then| {
            when.method(POST).path(MODEL_PATH);
            then.status(200).json_body(completion_text("pas du json"));
        })
        .await;

    let controller = controller_for(&server);
    assert_eq!(controller.submit_query("pain").await, SubmitOutcome::Failed);

    failing.delete_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(MODEL_PATH);
            then.status(200).json_body(completion_text(
                r#"[{"keyword": "pain", "volume": 40500, "difficulty": 61}]"#,
            ));
        })
        .await;

    assert_eq!(
        controller.submit_query("pain").await,
        SubmitOutcome::Completed { count: 1 }
    );
    let state = controller.snapshot();
    assert!(state.error.is_none());
    assert_eq!(state.results[0].volume, 40500);
}
