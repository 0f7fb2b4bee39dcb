//! LLMドライバーの実装
//!
//! プロバイダに依存しない共通処理（ペイロード生成 → HTTP → テキスト抽出）を提供します。

use crate::error::Error;
use crate::llm::provider::{LlmProvider, Message};

/// LLMドライバー
pub struct LlmDriver<P: LlmProvider> {
    provider: P,
}

impl<P: LlmProvider> LlmDriver<P> {
    /// 新しいドライバーを作成
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// 会話履歴全体を送って応答テキストを取得する
    ///
    /// テキストが取り出せないレスポンスは Provider エラーとして扱う。
    ///
    /// # Arguments
    /// * `messages` - persona を先頭に含む会話履歴
    ///
    /// # Returns
    /// * `Ok(String)` - 応答テキスト
    /// * `Err(Error)` - Transport または Provider エラー
    pub fn complete(&self, messages: &[Message]) -> Result<String, Error> {
        let payload = self.provider.make_request_payload(messages)?;
        let request_json = serde_json::to_string(&payload)
            .map_err(|e| Error::io_msg(format!("failed to serialize request: {}", e)))?;
        let response_json = self.provider.make_http_request(&request_json)?;
        let text = self
            .provider
            .parse_response_text(&response_json)?
            .ok_or_else(|| Error::provider("no text in response"))?;
        Ok(text)
    }

    /// プロバイダを取得
    pub fn provider(&self) -> &P {
        &self.provider
    }
}
