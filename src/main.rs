//! upmon エントリポイント

use clap::Parser;
use upmon::cli::Cli;
use upmon::config::MonitorConfig;
use upmon::logging;
use upmon::monitor::Monitor;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    // .envがあれば環境変数へ取り込む（なければ無視）
    dotenvy::dotenv().ok();

    logging::init()?;

    // 必須変数が欠けていればここで終了し、ループは開始しない
    let config = MonitorConfig::from_env()?;

    Monitor::new(config).run().await;

    Ok(())
}
