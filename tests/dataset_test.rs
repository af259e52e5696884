//! データセット読み込み・設定ファイルのテスト

use review_ai_rust::config::{Config, DEFAULT_DATASET, DEFAULT_ENDPOINT, DEFAULT_MODEL};
use review_ai_rust::error::ReviewAiError;
use review_ai_rust::load_dataset;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

/// 存在しないデータセット
#[test]
fn test_load_missing_dataset() {
    let err = load_dataset(Path::new("/nonexistent/UserReviews.csv")).unwrap_err();
    assert!(matches!(err, ReviewAiError::FileNotFound(_)));
}

/// 必須列の欠けたデータセット
#[test]
fn test_load_dataset_missing_column() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("reviews.csv");
    std::fs::write(&path, "App,Translated_Review,Sentiment\nFoo,ok,Positive\n").unwrap();

    let err = load_dataset(&path).unwrap_err();
    assert!(matches!(
        err,
        ReviewAiError::Dataset { source: review_ai_common::Error::MissingColumn(ref c), .. } if c == "review"
    ));
}

/// ファイルからの読み込みと検索
#[test]
fn test_load_dataset_and_lookup() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("UserReviews.csv");
    std::fs::write(
        &path,
        "App,review,Sentiment\n\
         Foo,Great app!,Positive\n\
         \"Recipes, Daily\",\"Loved it, \"\"five stars\"\"\",Positive\n",
    )
    .unwrap();

    let table = load_dataset(&path).expect("dataset should load");
    assert_eq!(table.len(), 2);
    assert_eq!(table.lookup("Foo", "Great app!"), "Positive");
    assert_eq!(table.lookup("Foo", "Terrible app"), "Unknown");
    assert_eq!(
        table.lookup("Recipes, Daily", "Loved it, \"five stars\""),
        "Positive"
    );
}

/// 設定ファイルが無ければデフォルト
#[test]
fn test_config_defaults_when_missing() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).unwrap();

    assert_eq!(config.model, DEFAULT_MODEL);
    assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(config.dataset_path, PathBuf::from(DEFAULT_DATASET));
    assert!(config.hf_token.is_none());
}

/// 既定エンドポイントは HF Inference のルーター
#[test]
fn test_default_endpoint_uses_router_host() {
    assert_eq!(DEFAULT_ENDPOINT, "https://router.huggingface.co/hf-inference/models");
    assert!(!DEFAULT_ENDPOINT.contains("api-inference.huggingface.co"));
}

/// 設定の保存と読み込み
#[test]
fn test_config_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let config = Config {
        hf_token: Some("hf_saved".into()),
        model: "mistralai/Mistral-7B-Instruct-v0.2".into(),
        ..Default::default()
    };
    config.save_to(&path).expect("設定保存失敗");

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.hf_token.as_deref(), Some("hf_saved"));
    assert_eq!(loaded.model, "mistralai/Mistral-7B-Instruct-v0.2");
    assert_eq!(loaded.endpoint, config.endpoint);
}

/// 一部の項目だけの設定ファイル
#[test]
fn test_config_partial_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "dataset_path": "data/reviews.csv" }"#).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.dataset_path, PathBuf::from("data/reviews.csv"));
    assert_eq!(config.model, DEFAULT_MODEL);
}

/// 壊れた設定ファイル
#[test]
fn test_config_invalid_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ invalid").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ReviewAiError::JsonParse(_)));
}

/// 壊れた設定ファイルでも編集用の読み込みはデフォルトを返し、保存で修復できる
#[test]
fn test_config_invalid_json_can_be_repaired() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ invalid").unwrap();

    let mut config = Config::load_for_edit_from(&path);
    assert_eq!(config.model, DEFAULT_MODEL);
    assert!(config.hf_token.is_none());

    config.hf_token = Some("hf_repaired".into());
    config.save_to(&path).expect("設定保存失敗");

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.hf_token.as_deref(), Some("hf_repaired"));
}
