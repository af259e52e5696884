//! プロンプト生成モジュール
//!
//! CLIとデスクトップで共有されるプロンプト生成ロジック:
//! - APP_CATEGORIES: カテゴリ例示の定数
//! - build_category_prompt: Step1（アプリカテゴリ推定）用プロンプト
//! - build_intent_emotion_prompt: Step2（意図・感情抽出）用プロンプト
//! - build_suggestion_prompt: Step3（改善提案生成）用プロンプト
//! - サンプリング設定（temperature / max_new_tokens）

/// カテゴリ推定で例示するカテゴリ（網羅ではない）
pub const APP_CATEGORIES: &[&str] = &[
    "cooking",
    "gaming",
    "beauty",
    "education",
    "sports",
    "entertainment",
    "health",
];

/// 1回の補完リクエストのサンプリング設定
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingPreset {
    pub temperature: f32,
    pub max_new_tokens: u32,
}

/// 分類系タスク（カテゴリ）
pub const CATEGORY_SAMPLING: SamplingPreset = SamplingPreset {
    temperature: 0.3,
    max_new_tokens: 64,
};

/// 分類系タスク（意図・感情）
pub const INTENT_EMOTION_SAMPLING: SamplingPreset = SamplingPreset {
    temperature: 0.3,
    max_new_tokens: 128,
};

/// 生成系タスク（改善提案）
pub const SUGGESTION_SAMPLING: SamplingPreset = SamplingPreset {
    temperature: 0.5,
    max_new_tokens: 512,
};

/// 人間側の発話1ターンとして整形
///
/// テキスト生成エンドポイントにはチャット形式ではなく
/// "Human: ..." の平文として送る。
fn as_human_turn(message: &str) -> String {
    format!("Human: {message}")
}

/// Step1プロンプト生成（アプリカテゴリ推定）
///
/// # Arguments
/// * `app_name` - 前後空白を除去済みのアプリ名
pub fn build_category_prompt(app_name: &str) -> String {
    let categories = APP_CATEGORIES.join(", ");
    as_human_turn(&format!(
        "What is the most likely app category (e.g., {categories} etc.) for the app called '{app_name}'?"
    ))
}

/// Step2プロンプト生成（意図・感情抽出）
///
/// 出力は `Intent: ...` と `Emotion: ...` の2行を要求するが、
/// 応答側の形式チェックは行わない。
pub fn build_intent_emotion_prompt(review_text: &str) -> String {
    as_human_turn(&format!(
        r#"Analyze the following user review and identify:
1. The main **intent** (e.g., complaint, praise, feature request).
2. The **emotion** expressed (e.g., happiness, anger, frustration, discomfort, love, sad) in one line.

Review:
{review_text}

Respond in the format:
Intent: <intent>
Emotion: <emotion>"#
    ))
}

/// Step3プロンプト生成（開発者向け改善提案）
pub fn build_suggestion_prompt(app_name: &str, review_text: &str) -> String {
    as_human_turn(&format!(
        r#"You are an expert app developer. Based on the following user review for the app '{app_name}', provide actionable improvement suggestions in 3-4 lines.

Review:
{review_text}

Suggestions:"#
    ))
}
