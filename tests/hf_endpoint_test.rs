//! Hugging Face 推論クライアントのHTTPテスト（wiremock）

use review_ai_common::CATEGORY_SAMPLING;
use review_ai_rust::error::ReviewAiError;
use review_ai_rust::inference::{CompletionClient, CompletionRequest, HfInferenceClient};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL: &str = "HuggingFaceH4/zephyr-7b-beta";

fn request(prompt: &str) -> CompletionRequest {
    CompletionRequest::new(prompt.to_string(), CATEGORY_SAMPLING)
}

#[tokio::test]
async fn test_sends_prompt_parameters_and_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/models/{MODEL}")))
        .and(header("authorization", "Bearer hf_test"))
        .and(body_json(json!({
            "inputs": "Human: hello",
            "parameters": {
                "temperature": 0.3,
                "max_new_tokens": 64,
                "return_full_text": false
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "generated_text": " Gaming" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = HfInferenceClient::new(format!("{}/models", server.uri()), MODEL, Some("hf_test".into()));
    let text = client.complete(&request("Human: hello")).await.unwrap();

    assert_eq!(text, " Gaming");
}

#[tokio::test]
async fn test_accepts_single_object_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "generated_text": "Intent: praise"
        })))
        .mount(&server)
        .await;

    let client = HfInferenceClient::new(server.uri(), MODEL, None);
    let text = client.complete(&request("x")).await.unwrap();
    assert_eq!(text, "Intent: praise");
}

#[tokio::test]
async fn test_trailing_slash_in_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/models/{MODEL}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "generated_text": "ok" }])))
        .expect(1)
        .mount(&server)
        .await;

    let client = HfInferenceClient::new(format!("{}/models/", server.uri()), MODEL, None);
    assert_eq!(client.complete(&request("x")).await.unwrap(), "ok");
}

#[tokio::test]
async fn test_error_status_maps_to_inference_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "Invalid credentials in Authorization header"
        })))
        .mount(&server)
        .await;

    let client = HfInferenceClient::new(server.uri(), MODEL, Some("bad".into()));
    let err = client.complete(&request("x")).await.unwrap_err();

    match err {
        ReviewAiError::Inference { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Invalid credentials in Authorization header");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_error_status_with_plain_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let client = HfInferenceClient::new(server.uri(), MODEL, None);
    let err = client.complete(&request("x")).await.unwrap_err();

    assert!(matches!(
        err,
        ReviewAiError::Inference { status: 503, ref message } if message == "Service Unavailable"
    ));
}

#[tokio::test]
async fn test_unexpected_body_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "unexpected": true })))
        .mount(&server)
        .await;

    let client = HfInferenceClient::new(server.uri(), MODEL, None);
    let err = client.complete(&request("x")).await.unwrap_err();
    assert!(matches!(err, ReviewAiError::ApiParse(_)));
}

#[tokio::test]
async fn test_empty_array_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = HfInferenceClient::new(server.uri(), MODEL, None);
    let err = client.complete(&request("x")).await.unwrap_err();
    assert!(matches!(err, ReviewAiError::ApiParse(_)));
}

#[tokio::test]
async fn test_connection_failure_is_http_error() {
    // 待ち受けの無いポート
    let client = HfInferenceClient::new("http://127.0.0.1:1/models", MODEL, None);
    let err = client.complete(&request("x")).await.unwrap_err();
    assert!(matches!(err, ReviewAiError::Http(_)));
}
