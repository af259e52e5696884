use anyhow::{Context, Result};
use review_ai_common::SentimentTable;
use review_ai_rust::config::Config;
use review_ai_rust::load_dataset;
use std::sync::Arc;

/// 起動時に1回だけ読み込む資源
pub struct Startup {
    pub config: Config,
    pub table: Arc<SentimentTable>,
}

pub fn load_startup() -> Result<Startup> {
    let config = Config::load().context("load config")?;
    let table = load_dataset(&config.dataset_path)
        .with_context(|| format!("load dataset {}", config.dataset_path.display()))?;
    Ok(Startup {
        config,
        table: Arc::new(table),
    })
}
