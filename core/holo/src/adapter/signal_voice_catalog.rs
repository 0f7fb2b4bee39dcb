//! 準備完了シグナル付きボイスカタログ
//!
//! install されるまで wait_ready をブロックし、上限を超えたらエラーにする。
//! 固定遅延での再試行は行わない。

use crate::domain::VoiceName;
use crate::ports::outbound::VoiceCatalog;
use common::error::Error;
use std::sync::{Condvar, Mutex};
use std::time::Duration;

/// wait_ready の待ち時間上限の既定値
const DEFAULT_READY_TIMEOUT: Duration = Duration::from_secs(5);

/// Condvar で準備完了を通知するボイスカタログ
pub struct SignalVoiceCatalog {
    voices: Mutex<Option<Vec<VoiceName>>>,
    ready: Condvar,
    timeout: Duration,
}

impl SignalVoiceCatalog {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_READY_TIMEOUT)
    }

    /// 待ち時間上限を指定して作成
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            voices: Mutex::new(None),
            ready: Condvar::new(),
            timeout,
        }
    }

    /// ボイス一覧を登録して待機中のスレッドを起こす
    pub fn install(&self, voices: Vec<VoiceName>) {
        let mut guard = match self.voices.lock() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = Some(voices);
        self.ready.notify_all();
    }
}

impl Default for SignalVoiceCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl VoiceCatalog for SignalVoiceCatalog {
    fn wait_ready(&self) -> Result<(), Error> {
        let guard = self
            .voices
            .lock()
            .map_err(|_| Error::io_msg("voice catalog lock poisoned"))?;
        let (guard, result) = self
            .ready
            .wait_timeout_while(guard, self.timeout, |v| v.is_none())
            .map_err(|_| Error::io_msg("voice catalog lock poisoned"))?;
        if result.timed_out() && guard.is_none() {
            return Err(Error::io_msg("voice catalog not ready"));
        }
        Ok(())
    }

    fn preferred_voice(&self) -> Result<VoiceName, Error> {
        let guard = self
            .voices
            .lock()
            .map_err(|_| Error::io_msg("voice catalog lock poisoned"))?;
        guard
            .as_ref()
            .and_then(|v| v.first().cloned())
            .ok_or_else(|| Error::io_msg("no voice installed"))
    }
}
