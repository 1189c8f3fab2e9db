//! 監視ループ
//!
//! プローブ → 判定 → （非稼働なら）通知 → スリープ を単一タスクで
//! 逐次実行する。サイクルごとに独立して判定し、状態履歴は持たない
//! （「継続ダウン」の抑制や復旧通知は行わない）。

use chrono::{DateTime, Local};
use std::time::Duration;
use tracing::{error, info};

use crate::config::MonitorConfig;
use crate::health::AppHealthChecker;
use crate::notify::TelegramNotifier;

/// チェック間隔（秒）
pub const POLL_INTERVAL_SECS: u64 = 60;

/// 死活監視モニター
pub struct Monitor {
    /// 監視設定（起動時に読み込んだ不変の値）
    config: MonitorConfig,
    /// 死活チェッカー
    checker: AppHealthChecker,
    /// 通知クライアント
    notifier: TelegramNotifier,
    /// 最終稼働確認時刻（起動時に初期化。アラート間引きには未使用）
    last_active_time: DateTime<Local>,
}

impl Monitor {
    /// 設定からモニターを作成
    pub fn new(config: MonitorConfig) -> Self {
        let checker = AppHealthChecker::new(&config.app_url);
        let notifier = TelegramNotifier::new(&config);

        Self {
            config,
            checker,
            notifier,
            last_active_time: Local::now(),
        }
    }

    /// 監視ループを開始する
    ///
    /// プロセスが外部から停止されるまで戻らない。サイクル内の失敗は
    /// すべてログに記録して継続する。
    pub async fn run(&self) {
        info!(
            app_url = %self.config.app_url,
            interval_secs = POLL_INTERVAL_SECS,
            threshold_minutes = self.config.inactivity_threshold.as_secs() / 60,
            last_active = %self.last_active_time.format("%Y-%m-%d %H:%M:%S"),
            "Starting monitoring"
        );

        loop {
            self.run_cycle().await;

            // プローブ所要時間・結果にかかわらず固定間隔でスリープする
            tokio::time::sleep(Duration::from_secs(POLL_INTERVAL_SECS)).await;
        }
    }

    /// 1サイクル分のチェックと通知
    ///
    /// 稼働中ならログのみ。非稼働ならアラート本文を組み立てて
    /// 1回だけ送信を試み、失敗はログに記録して握りつぶす。
    pub async fn run_cycle(&self) {
        let now = Local::now();

        if self.checker.check_app_status().await {
            info!("App is active");
        } else {
            let message = alert_message(&self.config.app_url, now);
            if let Err(e) = self.notifier.send(&message).await {
                error!("Failed to send notification: {}", e);
            }
        }
    }
}

/// アラート本文を組み立てる
///
/// 対象URL・固定の失敗理由・タイムスタンプ（`YYYY-MM-DD HH:MM:SS`）を
/// 含むHTMLメッセージを返す。
pub fn alert_message(app_url: &str, at: DateTime<Local>) -> String {
    format!(
        "⚠️ <b>App Inactivity Alert</b>\n\n\
         🌐 App: {}\n\
         ⏰ Failed to respond within 5 seconds\n\
         📅 Time: {}",
        app_url,
        at.format("%Y-%m-%d %H:%M:%S")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_alert_message_contains_url() {
        let message = alert_message("http://localhost:8000", Local::now());

        assert!(message.contains("App Inactivity Alert"));
        assert!(message.contains("http://localhost:8000"));
        assert!(message.contains("Failed to respond within 5 seconds"));
    }

    #[test]
    fn test_alert_message_timestamp_format() {
        let message = alert_message("http://localhost:8000", Local::now());

        let timestamp = message
            .rsplit("Time: ")
            .next()
            .expect("message should contain a timestamp");
        assert!(NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S").is_ok());
    }
}
