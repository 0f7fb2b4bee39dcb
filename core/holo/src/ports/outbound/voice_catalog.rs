//! ボイスカタログの Outbound ポート
//!
//! ボイス一覧の読み込み完了を明示的なシグナルとして待つ契約。
//! 固定遅延の再試行はしない。

use crate::domain::VoiceName;
use common::error::Error;

/// ボイスカタログの Outbound ポート
pub trait VoiceCatalog: Send + Sync {
    /// カタログの準備完了を待つ
    ///
    /// 実装は上限付きで待ってよい。準備できないときはエラーを返し、
    /// 呼び出し側は発話をスキップする。
    fn wait_ready(&self) -> Result<(), Error>;

    /// 発話に使うボイス名を返す
    fn preferred_voice(&self) -> Result<VoiceName, Error>;
}
