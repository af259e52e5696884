//! 補完リクエストの送信先
//!
//! オーケストレータはこのトレイト越しにモデルを呼ぶ。
//! 本番は Hugging Face の推論エンドポイント、テストでは台本どおりに返すクライアントを使う。

mod hf_endpoint;

pub use hf_endpoint::HfInferenceClient;

use crate::error::Result;
use async_trait::async_trait;
use review_ai_common::SamplingPreset;

/// 1回分の補完リクエスト
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub prompt: String,
    pub temperature: f32,
    pub max_new_tokens: u32,
}

impl CompletionRequest {
    pub fn new(prompt: String, sampling: SamplingPreset) -> Self {
        Self {
            prompt,
            temperature: sampling.temperature,
            max_new_tokens: sampling.max_new_tokens,
        }
    }
}

#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// 生成テキストを返す（プロンプトは含まない）
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}
