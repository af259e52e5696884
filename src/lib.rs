pub mod cli;
pub mod config;
pub mod error;
pub mod inference;
pub mod orchestrator;

pub use orchestrator::{Progress, ReviewOrchestrator};

use error::{ReviewAiError, Result};
use review_ai_common::SentimentTable;
use std::path::Path;

/// 感情ラベルCSVを読み込む（起動時に1回）
pub fn load_dataset(path: &Path) -> Result<SentimentTable> {
    if !path.exists() {
        return Err(ReviewAiError::FileNotFound(path.display().to_string()));
    }

    let table = SentimentTable::from_csv(path).map_err(|source| ReviewAiError::Dataset {
        path: path.display().to_string(),
        source,
    })?;
    log::info!("dataset loaded: {} ({} rows)", path.display(), table.len());
    Ok(table)
}

/// 起動時の環境初期化
///
/// .env を先に読むので、.env に書いた RUST_LOG もログ設定に効く。
pub fn init_environment(verbose: bool) {
    init_environment_with(Path::new(config::DOTENV_FILE), verbose);
}

pub fn init_environment_with(dotenv_path: &Path, verbose: bool) {
    let dotenv = config::load_dotenv_from(dotenv_path);
    init_logging(verbose);
    match dotenv {
        Ok(true) => log::debug!("loaded environment from {}", dotenv_path.display()),
        Ok(false) => {}
        Err(e) => log::warn!(".env の読み込みに失敗: {}", e),
    }
}

/// env_logger 初期化（RUST_LOG が優先）
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .try_init();
}
