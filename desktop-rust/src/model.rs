use review_ai_common::{MetadataField, ReviewReport};
use review_ai_rust::Progress;

/// フォーム入力
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub app_name: String,
    pub review_text: String,
}

/// 到着済みの結果（到着順に埋まる）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportView {
    pub app_name: String,
    pub sentiment: Option<String>,
    pub category: Option<String>,
    pub intent_emotion: Option<String>,
    pub suggestions: Option<String>,
}

impl ReportView {
    pub fn for_app(app_name: &str) -> Self {
        Self {
            app_name: app_name.to_string(),
            ..Default::default()
        }
    }

    pub fn apply(&mut self, part: ReportPart) {
        match part {
            ReportPart::Sentiment(v) => self.sentiment = Some(v),
            ReportPart::Category(v) => self.category = Some(v),
            ReportPart::IntentEmotion(v) => self.intent_emotion = Some(v),
            ReportPart::Suggestions(v) => self.suggestions = Some(v),
        }
    }

    /// メタデータ欄の値（未到着は None）
    pub fn metadata_value(&self, field: MetadataField) -> Option<&str> {
        match field {
            MetadataField::AppName => Some(self.app_name.as_str()),
            MetadataField::AppCategory => self.category.as_deref(),
            MetadataField::Sentiment => self.sentiment.as_deref(),
            MetadataField::IntentEmotion => self.intent_emotion.as_deref(),
        }
    }
}

impl From<ReviewReport> for ReportView {
    fn from(report: ReviewReport) -> Self {
        Self {
            app_name: report.app_name,
            sentiment: Some(report.sentiment),
            category: Some(report.category),
            intent_emotion: Some(report.intent_emotion),
            suggestions: Some(report.suggestions),
        }
    }
}

/// ワーカースレッドへ渡せる所有版の進捗
#[derive(Debug, Clone, PartialEq)]
pub enum ReportPart {
    Sentiment(String),
    Category(String),
    IntentEmotion(String),
    Suggestions(String),
}

impl From<Progress<'_>> for ReportPart {
    fn from(progress: Progress<'_>) -> Self {
        match progress {
            Progress::Sentiment(v) => ReportPart::Sentiment(v.to_string()),
            Progress::Category(v) => ReportPart::Category(v.to_string()),
            Progress::IntentEmotion(v) => ReportPart::IntentEmotion(v.to_string()),
            Progress::Suggestions(v) => ReportPart::Suggestions(v.to_string()),
        }
    }
}
