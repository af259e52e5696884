use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "review-ai")]
#[command(about = "アプリレビュー解析・開発者向け改善提案ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// レビューを解析してカテゴリ・意図/感情・改善提案を出力
    Analyze {
        /// アプリ名
        #[arg(short, long, value_parser = non_blank)]
        app: String,

        /// レビュー本文
        #[arg(short, long, value_parser = non_blank)]
        review: String,

        /// 感情ラベルCSV（省略時は設定値）
        #[arg(short, long)]
        dataset: Option<PathBuf>,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// データセットの感情ラベルのみ検索（通信なし）
    Lookup {
        /// アプリ名
        #[arg(short, long, value_parser = non_blank)]
        app: String,

        /// レビュー本文
        #[arg(short, long, value_parser = non_blank)]
        review: String,

        /// 感情ラベルCSV（省略時は設定値）
        #[arg(short, long)]
        dataset: Option<PathBuf>,
    },

    /// データセット情報を表示
    Dataset {
        /// 感情ラベルCSV（省略時は設定値）
        #[arg(short, long)]
        dataset: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// Hugging Faceトークンを設定
        #[arg(long)]
        set_token: Option<String>,

        /// モデルIDを設定
        #[arg(long)]
        set_model: Option<String>,

        /// 推論エンドポイント（モデルIDの手前まで）を設定
        #[arg(long, value_parser = non_blank)]
        set_endpoint: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// 空白のみの入力は受け付けない
pub fn non_blank(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("空白のみの値は指定できません".to_string())
    } else {
        Ok(s.to_string())
    }
}
