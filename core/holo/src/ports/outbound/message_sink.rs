//! メッセージ表示の Outbound ポート

use common::error::Error;
use common::llm::provider::Role;

/// (役割, テキスト) の組を表示系へ渡す Outbound ポート
///
/// 整形は行わずプレーンテキストのまま渡す。
pub trait MessageSink: Send + Sync {
    fn emit(&self, role: Role, text: &str) -> Result<(), Error>;
}
