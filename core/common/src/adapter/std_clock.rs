//! 標準時刻実装（chrono::Local を委譲）

use super::clock::Clock;
use chrono::{DateTime, Local};

/// システム時計を使う Clock 実装
#[derive(Debug, Clone, Default)]
pub struct StdClock;

impl Clock for StdClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
