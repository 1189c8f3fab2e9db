//! 死活チェック
//!
//! 対象URLへのGETプローブで稼働状況を判定する。

pub mod checker;

pub use checker::AppHealthChecker;
