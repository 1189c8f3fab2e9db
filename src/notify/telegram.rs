//! Telegram通知クライアント
//!
//! Bot APIの `sendMessage` でアラート本文を送信する。配信失敗は
//! エラーとして返すのみで、リトライは行わない（呼び出し側でログに
//! 記録して継続する）。

use reqwest::Client;
use serde::Serialize;
use tracing::info;

use crate::config::MonitorConfig;
use crate::error::MonitorError;

/// `sendMessage` リクエストボディ
#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
}

/// Telegram通知クライアント
#[derive(Clone)]
pub struct TelegramNotifier {
    /// HTTPクライアント（通知にはタイムアウトを設定しない）
    client: Client,
    /// APIベースURL（末尾スラッシュは除去済み）
    api_base: String,
    /// Botトークン
    bot_token: String,
    /// 送信先チャットID
    chat_id: String,
}

impl TelegramNotifier {
    /// 設定から通知クライアントを作成
    pub fn new(config: &MonitorConfig) -> Self {
        Self {
            client: Client::new(),
            api_base: config.telegram_api_base.trim_end_matches('/').to_string(),
            bot_token: config.telegram_bot_token.clone(),
            chat_id: config.telegram_chat_id.clone(),
        }
    }

    /// 通知メッセージを送信
    ///
    /// HTMLパースモードで送信する。トランスポートエラーは
    /// `MonitorError::Http`、非2xxレスポンスは
    /// `MonitorError::NotificationStatus` として返す。
    pub async fn send(&self, text: &str) -> Result<(), MonitorError> {
        let url = format!("{}/bot{}/sendMessage", self.api_base, self.bot_token);
        let body = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
            parse_mode: "HTML",
        };

        let response = self.client.post(&url).json(&body).send().await?;

        if !response.status().is_success() {
            return Err(MonitorError::NotificationStatus(response.status()));
        }

        info!("Notification sent successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_message_request_serialization() {
        let body = SendMessageRequest {
            chat_id: "12345",
            text: "hello",
            parse_mode: "HTML",
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["chat_id"], "12345");
        assert_eq!(json["text"], "hello");
        assert_eq!(json["parse_mode"], "HTML");
    }
}
