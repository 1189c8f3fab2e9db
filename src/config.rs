//! 設定管理
//!
//! 環境変数の読み取りヘルパーと監視設定。旧変数名からのフォールバックを
//! 提供し、旧名が使われた場合は非推奨警告をログに出す。

use std::time::Duration;

use crate::error::MonitorError;

/// デフォルトの非活動しきい値（分）
pub const DEFAULT_INACTIVITY_THRESHOLD_MINUTES: u64 = 15;

/// Telegram Bot APIのデフォルトベースURL
pub const DEFAULT_TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// 環境変数を取得する（旧名フォールバック付き）
///
/// 新名が設定されていればその値を返す。旧名のみ設定されている場合は
/// 非推奨警告をログに出してその値を返す。
pub fn get_env_with_fallback(new_name: &str, old_name: &str) -> Option<String> {
    if let Ok(val) = std::env::var(new_name) {
        return Some(val);
    }
    if let Ok(val) = std::env::var(old_name) {
        tracing::warn!(
            "Environment variable '{}' is deprecated, use '{}' instead",
            old_name,
            new_name
        );
        return Some(val);
    }
    None
}

/// 環境変数を取得し、未設定ならデフォルト値を返す
pub fn get_env_with_fallback_or(new_name: &str, old_name: &str, default: &str) -> String {
    get_env_with_fallback(new_name, old_name).unwrap_or_else(|| default.to_string())
}

/// 環境変数を取得して型変換する
///
/// 未設定またはパース失敗時はデフォルト値を返す。
pub fn get_env_with_fallback_parse<T: std::str::FromStr>(
    new_name: &str,
    old_name: &str,
    default: T,
) -> T {
    get_env_with_fallback(new_name, old_name)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// 監視対象と通知先の設定
///
/// 起動時に一度だけ環境変数から読み込み、以後は不変のまま
/// 監視ループへ明示的に渡す。
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// 監視対象URL（末尾スラッシュは除去済み）
    pub app_url: String,
    /// Telegram Botトークン
    pub telegram_bot_token: String,
    /// Telegram チャットID
    pub telegram_chat_id: String,
    /// Telegram APIベースURL（デフォルト: `https://api.telegram.org`）
    pub telegram_api_base: String,
    /// 非活動しきい値（設定のみで、現状アラート間引きには未使用）
    pub inactivity_threshold: Duration,
}

impl MonitorConfig {
    /// 環境変数から設定を読み込む
    ///
    /// 必須変数（対象URL・Botトークン・チャットID）が未設定の場合は
    /// `MonitorError::Config` を返し、プロセスは起動しない。
    pub fn from_env() -> Result<Self, MonitorError> {
        let app_url = get_env_with_fallback("UPMON_APP_URL", "RENDER_APP_URL")
            .ok_or_else(|| MonitorError::Config("UPMON_APP_URL is required".to_string()))?;

        let telegram_bot_token =
            get_env_with_fallback("UPMON_TELEGRAM_BOT_TOKEN", "TELEGRAM_BOT_TOKEN").ok_or_else(
                || MonitorError::Config("UPMON_TELEGRAM_BOT_TOKEN is required".to_string()),
            )?;

        let telegram_chat_id = get_env_with_fallback("UPMON_TELEGRAM_CHAT_ID", "TELEGRAM_CHAT_ID")
            .ok_or_else(|| {
                MonitorError::Config("UPMON_TELEGRAM_CHAT_ID is required".to_string())
            })?;

        let threshold_minutes = get_env_with_fallback_parse(
            "UPMON_INACTIVITY_THRESHOLD_MINUTES",
            "INACTIVITY_THRESHOLD_MINUTES",
            DEFAULT_INACTIVITY_THRESHOLD_MINUTES,
        );

        let telegram_api_base = get_env_with_fallback_or(
            "UPMON_TELEGRAM_API_BASE",
            "UPMON_TELEGRAM_API_BASE",
            DEFAULT_TELEGRAM_API_BASE,
        );

        Ok(Self {
            app_url: app_url.trim_end_matches('/').to_string(),
            telegram_bot_token,
            telegram_chat_id,
            telegram_api_base: telegram_api_base.trim_end_matches('/').to_string(),
            inactivity_threshold: Duration::from_secs(threshold_minutes * 60),
        })
    }
}
