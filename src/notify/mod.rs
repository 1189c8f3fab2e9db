//! 通知クライアント
//!
//! Telegram Bot API経由のアラート送信。

pub mod telegram;

pub use telegram::TelegramNotifier;
