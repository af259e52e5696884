//! App Review Analyzer Common Library
//!
//! CLIとデスクトップで共有される型とユーティリティ

pub mod types;
pub mod layout;
pub mod error;
pub mod prompts;
pub mod sentiment;

pub use types::{ReviewQuery, ReviewReport, UNKNOWN_SENTIMENT, is_submittable};
pub use layout::{DISPLAY_WIDTH, MetadataField, METADATA_FIELDS, render_text_report, wrap_for_display, wrap_text};
pub use error::{Error, Result};
pub use prompts::{
    SamplingPreset, CATEGORY_SAMPLING, INTENT_EMOTION_SAMPLING, SUGGESTION_SAMPLING,
    build_category_prompt, build_intent_emotion_prompt, build_suggestion_prompt,
};
pub use sentiment::{SentimentRow, SentimentTable};
