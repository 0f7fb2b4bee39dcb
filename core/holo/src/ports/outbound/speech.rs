//! 発話出力の Outbound ポート

use crate::domain::{SpeechStyle, VoiceName};
use common::error::Error;

/// 1 回分の発話
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub style: SpeechStyle,
    pub voice: VoiceName,
}

/// 発話出力の Outbound ポート
///
/// 実装はコンソール表示や実際の音声合成エンジンなど。
/// 発話が失敗しても会話は継続する（呼び出し側がログに落とす）。
pub trait SpeechSynthesizer: Send + Sync {
    fn speak(&self, utterance: &Utterance) -> Result<(), Error>;
}
