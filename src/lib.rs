//! upmon - 単一エンドポイント死活監視
//!
//! 対象URLを一定間隔でプローブし、応答が得られないときに
//! Telegram Bot API経由でアラートを送信する。

#![warn(missing_docs)]

/// CLIインターフェース
pub mod cli;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// エラー型定義
pub mod error;

/// 死活チェック
pub mod health;

/// ロギング初期化ユーティリティ
pub mod logging;

/// 監視ループ
pub mod monitor;

/// 通知クライアント
pub mod notify;
