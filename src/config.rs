use crate::error::{ReviewAiError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// トークンを読む環境変数
pub const TOKEN_ENV: &str = "HF_TOKEN";

pub const DEFAULT_MODEL: &str = "HuggingFaceH4/zephyr-7b-beta";
/// HF Inference のテキスト生成エンドポイント（`{endpoint}/{model}` へ送信）
///
/// 提供モデルは時期で変わるので、使えない場合は `config --set-model` / `--set-endpoint` で変更する。
pub const DEFAULT_ENDPOINT: &str = "https://router.huggingface.co/hf-inference/models";
pub const DEFAULT_DATASET: &str = "UserReviews.csv";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub hf_token: Option<String>,
    pub model: String,
    pub endpoint: String,
    pub dataset_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hf_token: None,
            model: DEFAULT_MODEL.into(),
            endpoint: DEFAULT_ENDPOINT.into(),
            dataset_path: PathBuf::from(DEFAULT_DATASET),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// 指定パスから読み込み（無ければデフォルト）
    pub fn load_from(config_path: &std::path::Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// 編集用の読み込み
    ///
    /// 壊れた設定ファイルでも `config --set-*` で上書きできるよう、読めなければデフォルトを返す。
    pub fn load_for_edit() -> Result<Self> {
        let config_path = Self::config_path()?;
        Ok(Self::load_for_edit_from(&config_path))
    }

    pub fn load_for_edit_from(config_path: &std::path::Path) -> Self {
        match Self::load_from(config_path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("設定ファイルを読めないためデフォルトを使用: {} ({})", config_path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &std::path::Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ReviewAiError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("review-ai").join("config.json"))
    }

    /// トークン取得（環境変数を優先）
    ///
    /// 未設定でもエラーにしない。認証失敗はリクエスト側で返る。
    pub fn token(&self) -> Option<String> {
        if let Ok(token) = std::env::var(TOKEN_ENV) {
            if !token.trim().is_empty() {
                return Some(token);
            }
        }

        self.hf_token.clone().filter(|t| !t.trim().is_empty())
    }

    pub fn set_token(&mut self, token: String) -> Result<()> {
        self.hf_token = Some(token);
        self.save()
    }

    pub fn set_model(&mut self, model: String) -> Result<()> {
        self.model = model;
        self.save()
    }

    pub fn set_endpoint(&mut self, endpoint: String) -> Result<()> {
        self.endpoint = endpoint.trim_end_matches('/').to_string();
        self.save()
    }
}

/// カレントディレクトリの .env
pub const DOTENV_FILE: &str = ".env";

/// .env を環境変数へ読み込む（既存の環境変数は上書きしない）
///
/// ファイルが無ければ `Ok(false)`。ロガー初期化前に呼ぶため、ここではログを出さない。
pub fn load_dotenv_from(path: &std::path::Path) -> std::result::Result<bool, dotenvy::Error> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(true),
        Err(e) if e.not_found() => Ok(false),
        Err(e) => Err(e),
    }
}
