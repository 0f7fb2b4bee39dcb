//! ドメイン型
//!
//! 会話トランスクリプト・感情タグ・発話スタイル・ローカル応答の規則。

pub mod canned;
pub mod emotion;
pub mod speech_style;
pub mod transcript;

use std::fmt;

pub use canned::LocalResponder;
pub use emotion::{classify, Emotion};
pub use speech_style::SpeechStyle;
pub use transcript::Transcript;

/// 合成音声のボイス名
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceName(String);

impl VoiceName {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl std::ops::Deref for VoiceName {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for VoiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for VoiceName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for VoiceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
