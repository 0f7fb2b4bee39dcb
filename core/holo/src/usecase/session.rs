//! 会話セッション（履歴の保持とフォールバック付き応答取得）
//!
//! 応答取得は primary → fallback → ローカル定型文の 1 パスのみ。
//! リモート段の失敗は呼び出し元へ出さず、ログに落として次段へ進む。
//! `request_reply` が `&mut self` を取るため、1 セッションに同時実行の
//! 応答取得は存在しない。

use std::sync::Arc;

use common::error::Error;
use common::llm::driver::LlmDriver;
use common::llm::provider::{LlmProvider, Role};
use common::ports::outbound::{now_iso8601, Log, LogLevel, LogRecord};

use crate::domain::{LocalResponder, Transcript};

/// 会話セッション
pub struct ConversationSession<P: LlmProvider> {
    transcript: Transcript,
    primary: LlmDriver<P>,
    /// プライマリと同一モデルしか無いときは None（wiring 側で判定する）
    fallback: Option<LlmDriver<P>>,
    responder: LocalResponder,
    log: Arc<dyn Log>,
}

impl<P: LlmProvider> ConversationSession<P> {
    pub fn new(
        persona: impl Into<String>,
        max_history: usize,
        primary: LlmDriver<P>,
        fallback: Option<LlmDriver<P>>,
        responder: LocalResponder,
        log: Arc<dyn Log>,
    ) -> Self {
        Self {
            transcript: Transcript::new(persona, max_history),
            primary,
            fallback,
            responder,
            log,
        }
    }

    /// メッセージを履歴へ追加する（失敗しない）
    pub fn append_message(&mut self, role: Role, content: impl Into<String>) {
        self.transcript.push(role, content);
    }

    /// persona メッセージだけ残して履歴を消す
    pub fn reset_history(&mut self) {
        self.transcript.reset();
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    /// ユーザー入力への応答を取得する
    ///
    /// 必ずテキストを返す。リモート成功時のみ assistant メッセージを履歴へ
    /// 追加し、ローカル定型文は履歴に残さない。
    pub fn request_reply(&mut self, user_text: &str) -> String {
        self.transcript.push_user(user_text);

        match self.primary.complete(self.transcript.messages()) {
            Ok(reply) => {
                self.transcript.push_assistant(reply.clone());
                return reply;
            }
            Err(e) => self.log_stage_failure("primary", self.primary.provider().name(), &e),
        }

        if let Some(fallback) = &self.fallback {
            match fallback.complete(self.transcript.messages()) {
                Ok(reply) => {
                    self.transcript.push_assistant(reply.clone());
                    return reply;
                }
                Err(e) => self.log_stage_failure("fallback", fallback.provider().name(), &e),
            }
        }

        self.log_local_reply();
        self.responder.respond(user_text)
    }

    fn log_stage_failure(&self, stage: &str, provider: &str, error: &Error) {
        let _ = self.log.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Warn,
            message: "completion stage failed".to_string(),
            layer: Some("usecase".to_string()),
            kind: Some("fallback".to_string()),
            fields: {
                let mut m = std::collections::BTreeMap::new();
                m.insert("stage".to_string(), serde_json::json!(stage));
                m.insert("provider".to_string(), serde_json::json!(provider));
                m.insert("error".to_string(), serde_json::json!(error.to_string()));
                Some(m)
            },
        });
    }

    fn log_local_reply(&self) {
        let _ = self.log.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: "serving canned reply".to_string(),
            layer: Some("usecase".to_string()),
            kind: Some("fallback".to_string()),
            fields: None,
        });
    }
}
