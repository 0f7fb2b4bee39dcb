//! Echoプロバイダの実装
//!
//! このプロバイダは実際にLLM APIを呼び出さず、直近のユーザーメッセージを
//! そのまま返します。ネットワークなしでパイプライン全体を動かすための
//! デバッグ・テスト用です。

use crate::error::Error;
use crate::llm::provider::{LlmProvider, Message};
use serde_json::{json, Value};

/// Echoプロバイダ
pub struct EchoProvider;

impl EchoProvider {
    /// 新しいEchoプロバイダを作成
    pub fn new() -> Self {
        Self
    }
}

impl Default for EchoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl LlmProvider for EchoProvider {
    fn name(&self) -> &str {
        "echo"
    }

    fn make_request_payload(&self, messages: &[Message]) -> Result<Value, Error> {
        Ok(json!({ "messages": messages }))
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        // ペイロードから直近の user メッセージを取り出し、それを応答にする
        let v: Value = serde_json::from_str(request_json)
            .map_err(|e| Error::provider(format!("malformed request JSON: {}", e)))?;
        let last_user = v["messages"]
            .as_array()
            .and_then(|msgs| {
                msgs.iter()
                    .rev()
                    .find(|m| m["role"] == "user")
                    .and_then(|m| m["content"].as_str())
            })
            .unwrap_or("");
        Ok(json!({ "echo": last_user }).to_string())
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::provider(format!("malformed response JSON: {}", e)))?;
        Ok(v["echo"].as_str().map(|s| format!("[echo] {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echo_provider_name() {
        assert_eq!(EchoProvider::new().name(), "echo");
    }

    #[test]
    fn test_echo_provider_payload_carries_messages() {
        let p = EchoProvider::new();
        let payload = p
            .make_request_payload(&[Message::system("persona"), Message::user("Hello")])
            .unwrap();
        assert_eq!(payload["messages"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_echo_provider_returns_last_user_message() {
        let p = EchoProvider::new();
        let payload = p
            .make_request_payload(&[
                Message::system("persona"),
                Message::user("first"),
                Message::assistant("reply"),
                Message::user("second"),
            ])
            .unwrap();
        let request_json = serde_json::to_string(&payload).unwrap();
        let response_json = p.make_http_request(&request_json).unwrap();
        let text = p.parse_response_text(&response_json).unwrap();
        assert_eq!(text.as_deref(), Some("[echo] second"));
    }

    #[test]
    fn test_echo_provider_with_no_user_message() {
        let p = EchoProvider::new();
        let payload = p.make_request_payload(&[Message::system("persona")]).unwrap();
        let request_json = serde_json::to_string(&payload).unwrap();
        let response_json = p.make_http_request(&request_json).unwrap();
        let text = p.parse_response_text(&response_json).unwrap();
        assert_eq!(text.as_deref(), Some("[echo] "));
    }
}
