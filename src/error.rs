//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! 設定エラーは起動時に致命的として扱い、プローブ失敗・通知送信失敗は
//! ループ内でログに記録して継続する。

use thiserror::Error;

/// 監視プロセスのエラー型
#[derive(Debug, Error)]
pub enum MonitorError {
    /// 設定エラー（必須環境変数の未設定など）
    #[error("Configuration error: {0}")]
    Config(String),

    /// 通知送信失敗（非2xxレスポンス）
    #[error("Notification delivery failed: HTTP {0}")]
    NotificationStatus(reqwest::StatusCode),

    /// HTTP通信エラー
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
