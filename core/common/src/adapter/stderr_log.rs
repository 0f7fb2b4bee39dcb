//! stderr へ JSONL を書き出す Log 実装
//!
//! ログはファイルへ永続化せず、診断用に stderr へ 1 行 1 レコードで流す。
//! 会話表示（stdout）とは混ざらない。

use crate::error::Error;
use crate::ports::outbound::{Log, LogRecord};

/// stderr へ JSONL を書き出す Log 実装
#[derive(Debug, Clone, Default)]
pub struct StderrJsonLog;

impl StderrJsonLog {
    pub fn new() -> Self {
        Self
    }
}

impl Log for StderrJsonLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        let line = serde_json::to_string(record).map_err(|e| Error::io_msg(e.to_string()))?;
        eprintln!("{}", line);
        Ok(())
    }
}

/// 何も出力しない Log 実装（既定・テスト用）
#[derive(Debug, Clone, Default)]
pub struct NoopLog;

impl Log for NoopLog {
    fn log(&self, _record: &LogRecord) -> Result<(), Error> {
        Ok(())
    }
}
