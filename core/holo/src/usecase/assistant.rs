//! アシスタント本体（応答 → 表示 → 感情分類 → 発話の調停）
//!
//! 表示・発話の失敗はログに落とすだけで、呼び出し元には必ず応答テキストを返す。

use std::sync::Arc;

use common::error::Error;
use common::llm::provider::{LlmProvider, Role};
use common::ports::outbound::{now_iso8601, Log, LogLevel, LogRecord};

use crate::domain::{classify, Emotion, SpeechStyle};
use crate::ports::outbound::{MessageSink, SpeechSynthesizer, Utterance, VoiceCatalog};
use crate::usecase::session::ConversationSession;

/// 起動時の挨拶
pub const GREETING: &str = "Hello, I am HOLO. How can I assist you today?";

/// アシスタント本体
pub struct Assistant<P: LlmProvider> {
    session: ConversationSession<P>,
    speech: Arc<dyn SpeechSynthesizer>,
    voices: Arc<dyn VoiceCatalog>,
    sink: Arc<dyn MessageSink>,
    log: Arc<dyn Log>,
}

impl<P: LlmProvider> Assistant<P> {
    pub fn new(
        session: ConversationSession<P>,
        speech: Arc<dyn SpeechSynthesizer>,
        voices: Arc<dyn VoiceCatalog>,
        sink: Arc<dyn MessageSink>,
        log: Arc<dyn Log>,
    ) -> Self {
        Self {
            session,
            speech,
            voices,
            sink,
            log,
        }
    }

    /// 起動時の挨拶を表示・発話する（履歴には積まない）
    pub fn greet(&self) {
        self.present_assistant_text(GREETING);
    }

    /// ユーザー入力を処理して応答テキストを返す
    pub fn handle_input(&mut self, user_text: &str) -> String {
        if let Err(e) = self.sink.emit(Role::User, user_text) {
            self.log_presentation_failure("display", &e);
        }
        let reply = self.session.request_reply(user_text);
        self.present_assistant_text(&reply);
        reply
    }

    pub fn session(&self) -> &ConversationSession<P> {
        &self.session
    }

    /// assistant テキストを表示し、感情に応じたスタイルで発話する
    fn present_assistant_text(&self, text: &str) {
        if let Err(e) = self.sink.emit(Role::Assistant, text) {
            self.log_presentation_failure("display", &e);
        }

        let emotion = classify(text);
        let style = SpeechStyle::for_emotion(emotion);
        self.log_emotion(emotion);

        if let Err(e) = self.voices.wait_ready() {
            self.log_presentation_failure("voice_catalog", &e);
            return;
        }
        let voice = match self.voices.preferred_voice() {
            Ok(v) => v,
            Err(e) => {
                self.log_presentation_failure("voice_catalog", &e);
                return;
            }
        };
        let utterance = Utterance {
            text: text.to_string(),
            style,
            voice,
        };
        if let Err(e) = self.speech.speak(&utterance) {
            self.log_presentation_failure("speech", &e);
        }
    }

    fn log_emotion(&self, emotion: Emotion) {
        let _ = self.log.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Debug,
            message: "reply classified".to_string(),
            layer: Some("usecase".to_string()),
            kind: Some("speech".to_string()),
            fields: {
                let mut m = std::collections::BTreeMap::new();
                m.insert("emotion".to_string(), serde_json::json!(emotion.as_str()));
                Some(m)
            },
        });
    }

    fn log_presentation_failure(&self, target: &str, error: &Error) {
        let _ = self.log.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Warn,
            message: "presentation failed".to_string(),
            layer: Some("usecase".to_string()),
            kind: Some("speech".to_string()),
            fields: {
                let mut m = std::collections::BTreeMap::new();
                m.insert("target".to_string(), serde_json::json!(target));
                m.insert("error".to_string(), serde_json::json!(error.to_string()));
                Some(m)
            },
        });
    }
}
