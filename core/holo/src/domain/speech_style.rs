//! 感情タグから導く発話スタイル

use crate::domain::emotion::Emotion;

/// 発話パラメータ（rate / pitch / volume）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeechStyle {
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl SpeechStyle {
    /// 感情タグごとの固定テーブル
    pub fn for_emotion(emotion: Emotion) -> Self {
        match emotion {
            Emotion::Happy => Self {
                rate: 1.1,
                pitch: 1.2,
                volume: 1.0,
            },
            Emotion::Sad => Self {
                rate: 0.9,
                pitch: 0.8,
                volume: 0.8,
            },
            Emotion::Warning => Self {
                rate: 1.0,
                pitch: 1.1,
                volume: 1.0,
            },
            Emotion::Surprised => Self {
                rate: 1.2,
                pitch: 1.3,
                volume: 1.0,
            },
            Emotion::Thinking => Self {
                rate: 0.9,
                pitch: 1.0,
                volume: 0.9,
            },
            Emotion::Error => Self {
                rate: 0.9,
                pitch: 0.9,
                volume: 1.0,
            },
            Emotion::Neutral => Self {
                rate: 1.0,
                pitch: 1.0,
                volume: 1.0,
            },
        }
    }
}
