//! OpenRouter Chat Completions プロバイダ
//!
//! `Authorization: Bearer` で認証し、{model, messages, temperature, max_tokens} を
//! POST する。非 2xx はエラー本文からメッセージを抽出して Provider エラーにする。
//! リクエストには上限付きタイムアウトを掛ける。

use crate::domain::ModelName;
use crate::error::Error;
use crate::llm::config::ProviderConfig;
use crate::llm::provider::{LlmProvider, Message};
use serde_json::{json, Value};
use std::time::Duration;

/// OpenRouter Chat Completions プロバイダ
///
/// プライマリとフォールバックはモデル名だけ差し替えた 2 インスタンスとして作る。
pub struct OpenRouterProvider {
    endpoint_url: String,
    api_key: String,
    model: ModelName,
    temperature: f32,
    max_tokens: u32,
    request_timeout: Duration,
}

impl OpenRouterProvider {
    /// 設定とモデル名からプロバイダを作成
    pub fn new(config: &ProviderConfig, model: ModelName) -> Self {
        Self {
            endpoint_url: config.endpoint_url.clone(),
            api_key: config.api_key.clone(),
            model,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            request_timeout: config.request_timeout,
        }
    }

    /// このインスタンスが使うモデル名
    pub fn model(&self) -> &ModelName {
        &self.model
    }

    fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }
}

impl LlmProvider for OpenRouterProvider {
    fn name(&self) -> &str {
        "openrouter"
    }

    fn make_request_payload(&self, messages: &[Message]) -> Result<Value, Error> {
        Ok(json!({
            "model": self.model.as_ref(),
            "messages": messages,
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
        }))
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.request_timeout)
            .build()
            .map_err(|e| Error::transport(format!("failed to build HTTP client: {}", e)))?;

        let response = client
            .post(&self.endpoint_url)
            .header("Authorization", self.auth_header())
            .header("Content-Type", "application/json")
            .body(request_json.to_string())
            .send()
            .map_err(|e| Error::transport(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let response_text = response
            .text()
            .map_err(|e| Error::transport(format!("failed to read response: {}", e)))?;

        if !status.is_success() {
            let error_msg = if let Ok(v) = serde_json::from_str::<Value>(&response_text) {
                v["error"]["message"]
                    .as_str()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| format!("HTTP {}: {}", status, response_text))
            } else {
                format!("HTTP {}: {}", status, response_text)
            };
            return Err(Error::provider(format!(
                "chat completions error: {}",
                error_msg
            )));
        }

        Ok(response_text)
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::provider(format!("malformed response JSON: {}", e)))?;

        if let Some(err) = v.get("error") {
            let msg = err["message"].as_str().unwrap_or("unknown error");
            return Err(Error::provider(format!("API error: {}", msg)));
        }

        let text = v["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.to_string());
        Ok(text)
    }
}
