//! CLIインターフェース
//!
//! 設定はすべて環境変数で行うため、CLIは `--help` / `--version` のみを
//! 提供する。

use clap::Parser;

/// upmon - Single-endpoint liveness monitor with Telegram alerts
#[derive(Parser, Debug)]
#[command(name = "upmon")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    UPMON_APP_URL                        Target URL to probe (required)
    UPMON_TELEGRAM_BOT_TOKEN             Telegram bot token (required)
    UPMON_TELEGRAM_CHAT_ID               Telegram chat ID (required)
    UPMON_INACTIVITY_THRESHOLD_MINUTES   Inactivity threshold in minutes (default: 15)
    UPMON_TELEGRAM_API_BASE              Telegram API base URL (default: https://api.telegram.org)
    UPMON_LOG_LEVEL                      Log level (default: info)

Variables may also be supplied via a .env file in the working directory.
"#)]
pub struct Cli {}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses_without_args() {
        Cli::command().debug_assert();
    }
}
