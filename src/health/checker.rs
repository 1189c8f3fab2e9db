//! アプリ死活チェッカー
//!
//! 対象URLにGETリクエストを送信し、ステータスコード200のときのみ
//! 稼働中と判定する。非200・タイムアウト・接続エラーはすべて一律に
//! 非稼働として扱う。

use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{error, warn};

/// プローブのタイムアウト（秒）
pub const PROBE_TIMEOUT_SECS: u64 = 5;

/// アプリ死活チェッカー
#[derive(Clone)]
pub struct AppHealthChecker {
    /// HTTPクライアント（タイムアウト5秒）
    client: Client,
    /// 監視対象URL
    app_url: String,
}

impl AppHealthChecker {
    /// 新しいチェッカーを作成
    pub fn new(app_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(PROBE_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            app_url: app_url.trim_end_matches('/').to_string(),
        }
    }

    /// 対象アプリの死活チェック
    ///
    /// ステータスコードが200のときのみ `true` を返す。それ以外の
    /// ステータスおよびトランスポートエラーは原因を区別せず `false` を
    /// 返し、具体的なエラー内容はログにのみ残す。
    pub async fn check_app_status(&self) -> bool {
        match self.client.get(&self.app_url).send().await {
            Ok(response) if response.status() == StatusCode::OK => true,
            Ok(response) => {
                warn!(status = %response.status(), "App returned non-200 status");
                false
            }
            Err(e) => {
                error!("Error checking app status: {}", e);
                false
            }
        }
    }

    /// 監視対象URL（正規化済み）
    pub fn app_url(&self) -> &str {
        &self.app_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let checker = AppHealthChecker::new("http://localhost:8000/");
        assert_eq!(checker.app_url(), "http://localhost:8000");
    }

    #[test]
    fn test_url_without_trailing_slash_unchanged() {
        let checker = AppHealthChecker::new("http://localhost:8000");
        assert_eq!(checker.app_url(), "http://localhost:8000");
    }
}
