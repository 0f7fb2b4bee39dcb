//! エラーハンドリング
//!
//! 障害を転送層（Transport）・プロバイダ（Provider）・設定（Config）に分類し、
//! 呼び出し側のフォールバック判断と CLI の終了コードに使う。

use thiserror::Error;

/// エラー型
///
/// リモート呼び出しの失敗は Transport（ネットワーク系）と Provider
/// （非 2xx ステータス・不正レスポンス）に分けて持つ。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// ネットワーク・DNS・タイムアウト等の転送層エラー
    #[error("transport error: {0}")]
    Transport(String),
    /// 非 2xx ステータスや不正な JSON レスポンス
    #[error("provider error: {0}")]
    Provider(String),
    /// 設定の不備（API キー欠落・範囲外の値）
    #[error("config error: {0}")]
    Config(String),
    /// アダプタ層の I/O エラー
    #[error("io error: {0}")]
    Io(String),
    /// コマンドライン引数の不正
    #[error("{0}")]
    Usage(String),
}

impl Error {
    /// 転送層エラー
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// プロバイダエラー
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    /// 設定エラー
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// I/O エラー
    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// 引数不正エラー
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    /// sysexits(3) 風の終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => 64,
            Self::Transport(_) => 69,
            Self::Io(_) => 74,
            Self::Provider(_) => 76,
            Self::Config(_) => 78,
        }
    }

    /// 引数不正かどうか（main で usage を表示する判定に使う）
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }
}
