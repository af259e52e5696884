use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReviewAiError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("アプリ名とレビュー本文はどちらも必須です")]
    EmptyInput,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("データセット読み込みエラー ({path}): {source}")]
    Dataset {
        path: String,
        #[source]
        source: review_ai_common::Error,
    },

    #[error("HTTP通信エラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("推論APIエラー (HTTP {status}): {message}")]
    Inference { status: u16, message: String },

    #[error("APIレスポンスのパースに失敗: {0}")]
    ApiParse(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] review_ai_common::Error),
}

pub type Result<T> = std::result::Result<T, ReviewAiError>;
