use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use review_ai_common::{render_text_report, ReviewQuery};
use review_ai_rust::{cli, config, error, inference, init_environment, load_dataset};
use review_ai_rust::{Progress, ReviewOrchestrator};
use cli::{Cli, Commands};
use config::Config;
use error::{ReviewAiError, Result};
use std::path::PathBuf;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_environment(cli.verbose);

    match cli.command {
        Commands::Analyze { app, review, dataset, json } => {
            let config = Config::load()?;
            let table = load_dataset(&dataset_path(dataset, &config))?;
            let query = ReviewQuery::new(&app, &review)
                .ok_or(ReviewAiError::EmptyInput)?;

            let client = inference::HfInferenceClient::from_config(&config);
            log::info!("model: {}", client.model());
            let orchestrator = ReviewOrchestrator::new(&table, client);

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(ProgressStyle::default_spinner());
            spinner.enable_steady_tick(Duration::from_millis(100));
            spinner.set_message("[1/3] アプリカテゴリを推定中...");

            let result = orchestrator
                .analyze_with_progress(&query, |progress| match progress {
                    Progress::Category(_) => spinner.set_message("[2/3] 意図・感情を抽出中..."),
                    Progress::Sentiment(_) => {}
                    Progress::IntentEmotion(_) => spinner.set_message("[3/3] 改善提案を生成中..."),
                    Progress::Suggestions(_) => spinner.set_message("完了"),
                })
                .await;
            spinner.finish_and_clear();
            let report = result?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("📱 {}\n", review_ai_common::layout::PAGE_TITLE);
                print!("{}", render_text_report(&report));
            }
        }

        Commands::Lookup { app, review, dataset } => {
            let config = Config::load()?;
            let table = load_dataset(&dataset_path(dataset, &config))?;
            println!("{}", table.lookup(&app, &review));
        }

        Commands::Dataset { dataset } => {
            let config = Config::load()?;
            let path = dataset_path(dataset, &config);
            let table = load_dataset(&path)?;
            println!("データセット情報:");
            println!("  パス: {}", path.display());
            println!("  件数: {}", table.len());
            println!("  アプリ数: {}", table.app_names().len());
        }

        Commands::Config { set_token, set_model, set_endpoint, show } => {
            // 壊れた設定ファイルもここで上書きできるようにする
            let mut config = Config::load_for_edit()?;

            if let Some(token) = set_token {
                config.set_token(token)?;
                println!("✔ トークンを設定しました");
            }

            if let Some(model) = set_model {
                config.set_model(model)?;
                println!("✔ モデルを設定しました");
            }

            if let Some(endpoint) = set_endpoint {
                config.set_endpoint(endpoint)?;
                println!("✔ エンドポイントを設定しました");
            }

            if show {
                println!("設定:");
                println!("  モデル: {}", config.model);
                println!("  エンドポイント: {}", config.endpoint);
                println!("  データセット: {}", config.dataset_path.display());
                println!("  トークン: {}", if config.token().is_some() { "設定済み" } else { "未設定" });
            }
        }
    }

    Ok(())
}

fn dataset_path(flag: Option<PathBuf>, config: &Config) -> PathBuf {
    flag.unwrap_or_else(|| config.dataset_path.clone())
}
