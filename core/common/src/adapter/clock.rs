//! 時刻取得の抽象（アダプター）
//!
//! ローカル応答の時刻・日付文言はこの trait 経由で現在時刻を取得する。

use chrono::{DateTime, Local};

/// 時刻取得の抽象
///
/// 実装は `common::adapter::StdClock` やテスト用の固定時刻など。
pub trait Clock: Send + Sync {
    /// 現在のローカル時刻を返す
    fn now(&self) -> DateTime<Local>;
}
