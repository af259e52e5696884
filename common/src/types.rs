//! 解析の入出力型
//!
//! フォーム・CLI・デスクトップで共有される型:
//! - ReviewQuery: 入力（アプリ名 + レビュー本文）
//! - ReviewReport: 最終出力（カテゴリ・感情ラベル・意図/感情・改善提案）

use serde::{Deserialize, Serialize};

/// データセットに一致する行が無い場合の感情ラベル
pub const UNKNOWN_SENTIMENT: &str = "Unknown";

/// 1回分の解析入力
///
/// 両フィールドとも前後の空白を除去した状態で保持する。
/// 空白のみの入力からは生成できないため、空入力での解析は型の上で起こらない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewQuery {
    app_name: String,
    review_text: String,
}

impl ReviewQuery {
    /// どちらかが空（空白のみ含む）なら None
    pub fn new(app_name: &str, review_text: &str) -> Option<Self> {
        let app_name = app_name.trim();
        let review_text = review_text.trim();
        if app_name.is_empty() || review_text.is_empty() {
            return None;
        }
        Some(Self {
            app_name: app_name.to_string(),
            review_text: review_text.to_string(),
        })
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn review_text(&self) -> &str {
        &self.review_text
    }
}

/// 入力が解析可能か（ボタン活性判定用）
pub fn is_submittable(app_name: &str, review_text: &str) -> bool {
    !app_name.trim().is_empty() && !review_text.trim().is_empty()
}

/// 解析結果
///
/// `intent_emotion` と `suggestions` はモデルの出力そのまま。
/// 折り返しは表示側（layout）で行う。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewReport {
    pub app_name: String,
    pub category: String,
    pub sentiment: String,
    pub intent_emotion: String,
    pub suggestions: String,
}
