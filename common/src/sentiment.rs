//! 感情ラベルデータセットモジュール
//!
//! (アプリ名, レビュー本文) の組に事前付与された感情ラベルを管理する。
//! 起動時にCSVから一度だけ読み込み、以後は読み取り専用。

use crate::error::{Error, Result};
use crate::types::UNKNOWN_SENTIMENT;
use std::collections::BTreeSet;
use std::path::Path;

/// 必須列
pub const APP_COLUMN: &str = "App";
pub const REVIEW_COLUMN: &str = "review";
pub const SENTIMENT_COLUMN: &str = "Sentiment";

/// CSVの1行を表す構造体
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentimentRow {
    /// アプリ名
    pub app: String,
    /// レビュー本文
    pub review: String,
    /// 感情ラベル（Positive/Negative/Neutral など）
    pub sentiment: String,
}

/// データセット全体
#[derive(Debug, Clone, Default)]
pub struct SentimentTable {
    rows: Vec<SentimentRow>,
}

impl SentimentTable {
    /// CSVファイルから読み込み
    pub fn from_csv(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// CSV文字列から読み込み
    pub fn from_csv_str(content: &str) -> Result<Self> {
        Self::from_reader(content.as_bytes())
    }

    fn from_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        // 列数が行ごとに揃っていなくても必須列さえあれば読む
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let column = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| Error::MissingColumn(name.to_string()))
        };
        let app_idx = column(APP_COLUMN)?;
        let review_idx = column(REVIEW_COLUMN)?;
        let sentiment_idx = column(SENTIMENT_COLUMN)?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let field = |idx: usize| record.get(idx).unwrap_or_default().to_string();
            rows.push(SentimentRow {
                app: field(app_idx),
                review: field(review_idx),
                sentiment: field(sentiment_idx),
            });
        }

        Ok(Self { rows })
    }

    /// 完全一致する最初の行の感情ラベルを返す
    ///
    /// 入力は前後の空白を除去してから比較する（大文字小文字は区別）。
    /// データセット側の値はそのまま比較する。
    pub fn find(&self, app_name: &str, review_text: &str) -> Option<&str> {
        let app_name = app_name.trim();
        let review_text = review_text.trim();
        self.rows
            .iter()
            .find(|row| row.app == app_name && row.review == review_text)
            .map(|row| row.sentiment.as_str())
    }

    /// 一致が無ければ "Unknown"
    pub fn lookup(&self, app_name: &str, review_text: &str) -> String {
        self.find(app_name, review_text)
            .unwrap_or(UNKNOWN_SENTIMENT)
            .to_string()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// アプリ名の一覧（重複なし・ソート済み）
    pub fn app_names(&self) -> Vec<&str> {
        self.rows
            .iter()
            .map(|row| row.app.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
