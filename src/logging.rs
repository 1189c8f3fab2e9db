//! ロギング初期化ユーティリティ
//!
//! tracing-subscriberでレベル付き・タイムスタンプ付きの1行ログを
//! 標準出力へ出す。フィルタは `RUST_LOG` があればそれを優先し、
//! なければ `UPMON_LOG_LEVEL`（デフォルト: info）を使う。

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// ロギングを初期化する
pub fn init() -> anyhow::Result<()> {
    let level = std::env::var("UPMON_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("upmon={}", level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}
