//! レビュー解析オーケストレータ
//!
//! 1回の解析は直線的な1パス:
//! - Step0: データセットから感情ラベルを検索（通信なし）
//! - Step1: アプリカテゴリ推定
//! - Step2: 意図・感情抽出
//! - Step3: 改善提案生成
//!
//! Step1〜3は互いの出力に依存しないが、順番に1つずつ送信・待機する。
//! 失敗はその場で呼び出し元へ返し、以降のリクエストは送らない。

use crate::error::Result;
use crate::inference::{CompletionClient, CompletionRequest};
use review_ai_common::{
    ReviewQuery, ReviewReport, SentimentTable,
    build_category_prompt, build_intent_emotion_prompt, build_suggestion_prompt,
    CATEGORY_SAMPLING, INTENT_EMOTION_SAMPLING, SUGGESTION_SAMPLING,
};

/// 完了した項目の通知
///
/// 表示順（カテゴリ → 感情ラベル → 意図/感情 → 改善提案）で届く。
/// 感情ラベルは最初に検索するが、通知はカテゴリの後。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress<'a> {
    Category(&'a str),
    Sentiment(&'a str),
    IntentEmotion(&'a str),
    Suggestions(&'a str),
}

pub struct ReviewOrchestrator<'t, C> {
    table: &'t SentimentTable,
    client: C,
}

impl<'t, C: CompletionClient> ReviewOrchestrator<'t, C> {
    pub fn new(table: &'t SentimentTable, client: C) -> Self {
        Self { table, client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub async fn analyze(&self, query: &ReviewQuery) -> Result<ReviewReport> {
        self.analyze_with_progress(query, |_| {}).await
    }

    /// 各項目が確定するたびに `on_progress` を呼ぶ
    pub async fn analyze_with_progress<F>(
        &self,
        query: &ReviewQuery,
        mut on_progress: F,
    ) -> Result<ReviewReport>
    where
        F: FnMut(Progress<'_>),
    {
        let app_name = query.app_name();
        let review_text = query.review_text();

        let sentiment = self.table.lookup(app_name, review_text);
        log::debug!("[Step0] sentiment: {}", sentiment);

        let category = self
            .run_step("Step1", CompletionRequest::new(build_category_prompt(app_name), CATEGORY_SAMPLING))
            .await?
            .trim()
            .to_string();
        on_progress(Progress::Category(&category));
        // 表示順はカテゴリ → 感情ラベル
        on_progress(Progress::Sentiment(&sentiment));

        let intent_emotion = self
            .run_step(
                "Step2",
                CompletionRequest::new(build_intent_emotion_prompt(review_text), INTENT_EMOTION_SAMPLING),
            )
            .await?;
        on_progress(Progress::IntentEmotion(&intent_emotion));

        let suggestions = self
            .run_step(
                "Step3",
                CompletionRequest::new(build_suggestion_prompt(app_name, review_text), SUGGESTION_SAMPLING),
            )
            .await?;
        on_progress(Progress::Suggestions(&suggestions));

        Ok(ReviewReport {
            app_name: app_name.to_string(),
            category,
            sentiment,
            intent_emotion,
            suggestions,
        })
    }

    async fn run_step(&self, step: &str, request: CompletionRequest) -> Result<String> {
        log::debug!("[{}] プロンプト長: {} chars", step, request.prompt.len());
        let output = self.client.complete(&request).await.inspect_err(|e| {
            log::debug!("[{}] 失敗: {}", step, e);
        })?;
        log::debug!("[{}] レスポンス長: {} chars", step, output.len());
        Ok(output)
    }
}
