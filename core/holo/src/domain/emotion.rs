//! 感情タグと分類規則
//!
//! 応答テキストを小文字化し、固定順のキーワード群を先勝ちで照合する。
//! 照合順そのものが契約: sad, happy, warning, surprised, thinking, error。
//! どれにも当たらなければ neutral。

use std::fmt;

/// 感情タグ（表示・発話スタイル専用の一時状態。永続化しない）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emotion {
    Neutral,
    Happy,
    Sad,
    Warning,
    Surprised,
    Thinking,
    Error,
}

impl Emotion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Warning => "warning",
            Self::Surprised => "surprised",
            Self::Thinking => "thinking",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 照合順に並んだキーワード群（先勝ち）
const RULES: &[(Emotion, &[&str])] = &[
    (
        Emotion::Sad,
        &["sorry", "apologize", "unfortunately", "regret", "sad", "can't help"],
    ),
    (
        Emotion::Happy,
        &["haha", "funny", "joke", "excellent", "great", "congratulations"],
    ),
    (
        Emotion::Warning,
        &["warning", "caution", "careful", "alert", "danger", "attention"],
    ),
    (
        Emotion::Surprised,
        &["amazing", "wow", "incredible", "unexpected", "surprised"],
    ),
    (
        Emotion::Thinking,
        &["analyzing", "calculating", "processing", "thinking", "searching"],
    ),
    (
        Emotion::Error,
        &["error", "failed", "issue", "problem", "cannot", "unable"],
    ),
];

/// テキストを感情タグへ分類する（純関数）
pub fn classify(text: &str) -> Emotion {
    let lower = text.to_lowercase();
    for (emotion, keywords) in RULES {
        if keywords.iter().any(|k| lower.contains(k)) {
            return *emotion;
        }
    }
    Emotion::Neutral
}
