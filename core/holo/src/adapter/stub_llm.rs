//! テスト用: 台本どおりに応答・失敗する LlmProvider 実装

#[cfg(test)]
mod stub {
    use common::error::Error;
    use common::llm::provider::{LlmProvider, Message};
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    /// 呼び出しごとの結果
    #[derive(Debug, Clone)]
    enum StubOutcome {
        Reply(String),
        HttpStatus(u16),
        Transport(String),
    }

    /// テスト用プロバイダ
    ///
    /// 固定の結果を返し、受け取った会話履歴（messages の JSON）を記録する。
    pub struct StubProvider {
        name: &'static str,
        outcome: StubOutcome,
        calls: Arc<Mutex<Vec<Vec<Value>>>>,
    }

    impl StubProvider {
        /// 常に成功して text を返す
        pub fn reply(name: &'static str, text: &str) -> Self {
            Self::with_outcome(name, StubOutcome::Reply(text.to_string()))
        }

        /// 非 2xx ステータスを模す（Provider エラー）
        pub fn http_error(name: &'static str, status: u16) -> Self {
            Self::with_outcome(name, StubOutcome::HttpStatus(status))
        }

        /// ネットワーク断を模す（Transport エラー）
        pub fn transport_error(name: &'static str, msg: &str) -> Self {
            Self::with_outcome(name, StubOutcome::Transport(msg.to_string()))
        }

        fn with_outcome(name: &'static str, outcome: StubOutcome) -> Self {
            Self {
                name,
                outcome,
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        /// 呼び出し記録への共有ハンドル（プロバイダをセッションへ渡す前に取る）
        pub fn call_log(&self) -> Arc<Mutex<Vec<Vec<Value>>>> {
            Arc::clone(&self.calls)
        }
    }

    impl LlmProvider for StubProvider {
        fn name(&self) -> &str {
            self.name
        }

        fn make_request_payload(&self, messages: &[Message]) -> Result<Value, Error> {
            Ok(json!({ "messages": messages }))
        }

        fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
            let v: Value = serde_json::from_str(request_json)
                .map_err(|e| Error::provider(e.to_string()))?;
            let msgs = v["messages"].as_array().cloned().unwrap_or_default();
            self.calls.lock().unwrap().push(msgs);
            match &self.outcome {
                StubOutcome::Reply(text) => Ok(json!({
                    "choices": [{ "message": { "content": text } }]
                })
                .to_string()),
                StubOutcome::HttpStatus(status) => {
                    Err(Error::provider(format!("HTTP {}", status)))
                }
                StubOutcome::Transport(msg) => Err(Error::transport(msg.clone())),
            }
        }

        fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
            let v: Value = serde_json::from_str(response_json)
                .map_err(|e| Error::provider(e.to_string()))?;
            Ok(v["choices"][0]["message"]["content"]
                .as_str()
                .map(String::from))
        }
    }
}

#[cfg(test)]
pub use stub::StubProvider;
