//! 発話のコンソールアダプタ
//!
//! 実際の音声合成エンジンの代わりに、発話パラメータを stderr へ要約して出す。
//! 会話表示（stdout）とは混ざらない。

use crate::ports::outbound::{SpeechSynthesizer, Utterance};
use common::error::Error;

/// 発話内容とスタイルを stderr へ要約表示する
#[derive(Debug, Clone, Default)]
pub struct ConsoleSpeech;

impl ConsoleSpeech {
    pub fn new() -> Self {
        Self
    }
}

impl SpeechSynthesizer for ConsoleSpeech {
    fn speak(&self, utterance: &Utterance) -> Result<(), Error> {
        eprintln!(
            "[speech] voice={} rate={:.1} pitch={:.1} volume={:.1} \"{}\"",
            utterance.voice,
            utterance.style.rate,
            utterance.style.pitch,
            utterance.style.volume,
            utterance.text
        );
        Ok(())
    }
}

/// 何も発話しない実装（--quiet・テスト用）
#[derive(Debug, Clone, Default)]
pub struct NullSpeech;

impl SpeechSynthesizer for NullSpeech {
    fn speak(&self, _utterance: &Utterance) -> Result<(), Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Emotion, SpeechStyle, VoiceName};

    fn utterance() -> Utterance {
        Utterance {
            text: "test".to_string(),
            style: SpeechStyle::for_emotion(Emotion::Neutral),
            voice: VoiceName::new("test-voice"),
        }
    }

    #[test]
    fn test_console_speech_accepts_utterance() {
        assert!(ConsoleSpeech::new().speak(&utterance()).is_ok());
    }

    #[test]
    fn test_null_speech_is_silent_ok() {
        assert!(NullSpeech.speak(&utterance()).is_ok());
    }
}
