//! 表示レイアウトモジュール
//!
//! 結果画面の見出し・項目名と、意図/感情・改善提案の折り返し処理。
//! デスクトップのフォームとCLIの両方がここの定義で描画する。

use crate::types::ReviewReport;

/// 折り返し幅（文字数）
pub const DISPLAY_WIDTH: usize = 100;

pub const PAGE_TITLE: &str = "App Review Analyzer: Developer Recommendations";
pub const METADATA_HEADING: &str = "Review Metadata";
pub const SUGGESTIONS_HEADING: &str = "Suggestions for Developer";
pub const SUBMIT_LABEL: &str = "Generate Developer Recommendation";
pub const APP_NAME_PROMPT: &str = "Enter the app name:";
pub const REVIEW_PROMPT: &str = "Paste one user review of the app:";
pub const BUSY_LABEL: &str = "Analyzing...";

/// メタデータ欄の項目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataField {
    AppName,
    AppCategory,
    Sentiment,
    IntentEmotion,
}

/// メタデータ欄の表示順
pub const METADATA_FIELDS: &[MetadataField] = &[
    MetadataField::AppName,
    MetadataField::AppCategory,
    MetadataField::Sentiment,
    MetadataField::IntentEmotion,
];

impl MetadataField {
    pub fn label(&self) -> &'static str {
        match self {
            MetadataField::AppName => "App Name",
            MetadataField::AppCategory => "App Category",
            MetadataField::Sentiment => "Sentiment",
            MetadataField::IntentEmotion => "Intent & Emotion",
        }
    }

    /// 表示前に折り返すか
    pub fn wraps(&self) -> bool {
        matches!(self, MetadataField::IntentEmotion)
    }

    pub fn value<'a>(&self, report: &'a ReviewReport) -> &'a str {
        match self {
            MetadataField::AppName => &report.app_name,
            MetadataField::AppCategory => &report.category,
            MetadataField::Sentiment => &report.sentiment,
            MetadataField::IntentEmotion => &report.intent_emotion,
        }
    }
}

/// 単語単位で折り返す
///
/// - 入力の改行は保持し、行ごとに折り返す
/// - 行内の連続空白は1つにまとめる
/// - `width` を超える単語は分割せずに1行に置く
/// - 全体の前後の空白行は除去する
pub fn wrap_text(text: &str, width: usize) -> String {
    let width = width.max(1);
    let mut out: Vec<String> = Vec::new();

    for line in text.trim().lines() {
        let mut current = String::new();
        let mut current_len = 0;

        for word in line.split_whitespace() {
            let word_len = word.chars().count();
            if current.is_empty() {
                current.push_str(word);
                current_len = word_len;
            } else if current_len + 1 + word_len <= width {
                current.push(' ');
                current.push_str(word);
                current_len += 1 + word_len;
            } else {
                out.push(std::mem::take(&mut current));
                current.push_str(word);
                current_len = word_len;
            }
        }

        out.push(current);
    }

    out.join("\n")
}

/// 表示幅で折り返す
pub fn wrap_for_display(text: &str) -> String {
    wrap_text(text, DISPLAY_WIDTH)
}

/// CLI向けのプレーンテキスト整形
pub fn render_text_report(report: &ReviewReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("📊 {METADATA_HEADING}\n"));
    for field in METADATA_FIELDS {
        let value = field.value(report);
        if field.wraps() {
            out.push_str(&format!("{}:\n{}\n", field.label(), wrap_for_display(value)));
        } else {
            out.push_str(&format!("{}: {}\n", field.label(), value));
        }
    }

    out.push_str(&format!("\n🔧 {SUGGESTIONS_HEADING}\n"));
    out.push_str(&wrap_for_display(&report.suggestions));
    out.push('\n');
    out
}
