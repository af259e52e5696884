//! Hugging Face 推論エンドポイント（text-generation）
//!
//! `POST {endpoint}/{model}` に入力と生成パラメータを送り、
//! `generated_text` を取り出す。リトライ・タイムアウト設定は行わない。

use super::{CompletionClient, CompletionRequest};
use crate::config::Config;
use crate::error::{ReviewAiError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// リクエスト本体
#[derive(Serialize)]
struct GenerationRequest<'a> {
    inputs: &'a str,
    parameters: GenerationParameters,
}

#[derive(Serialize)]
struct GenerationParameters {
    temperature: f32,
    max_new_tokens: u32,
    return_full_text: bool,
}

#[derive(Deserialize)]
struct GeneratedText {
    generated_text: String,
}

/// 成功時は配列で返るが、単一オブジェクトのこともある
#[derive(Deserialize)]
#[serde(untagged)]
enum GenerationResponse {
    Many(Vec<GeneratedText>),
    One(GeneratedText),
}

/// エラー時のレスポンス
#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

pub struct HfInferenceClient {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    token: Option<String>,
}

impl HfInferenceClient {
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>, token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            model: model.into(),
            token,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        if config.token().is_none() {
            log::warn!("HF_TOKEN が未設定です。認証なしでリクエストします");
        }
        Self::new(&config.endpoint, &config.model, config.token())
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn url(&self) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), self.model)
    }
}

#[async_trait]
impl CompletionClient for HfInferenceClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let url = self.url();
        let body = GenerationRequest {
            inputs: &request.prompt,
            parameters: GenerationParameters {
                temperature: request.temperature,
                max_new_tokens: request.max_new_tokens,
                return_full_text: false,
            },
        };

        log::debug!(
            "POST {} (temperature={}, max_new_tokens={})",
            url,
            request.temperature,
            request.max_new_tokens
        );

        let mut builder = self.client.post(&url).json(&body);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;
        log::debug!("{} -> {} ({} bytes)", url, status, text.len());

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&text)
                .map(|e| e.error)
                .unwrap_or(text);
            return Err(ReviewAiError::Inference {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerationResponse = serde_json::from_str(&text)
            .map_err(|e| ReviewAiError::ApiParse(format!("{}: {}", e, text)))?;

        match parsed {
            GenerationResponse::One(g) => Ok(g.generated_text),
            GenerationResponse::Many(list) => list
                .into_iter()
                .next()
                .map(|g| g.generated_text)
                .ok_or_else(|| ReviewAiError::ApiParse("generated_text がありません".into())),
        }
    }
}
