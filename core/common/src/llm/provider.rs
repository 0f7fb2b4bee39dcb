//! LLMプロバイダのトレイト定義

use crate::error::Error;
use serde::Serialize;
use serde_json::Value;

/// メッセージの役割
///
/// persona（system）・ユーザー・アシスタントの閉じた集合。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// メッセージ構造体（追加後は不変）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// LLMプロバイダのトレイト
///
/// 各プロバイダ（OpenRouter、Echoなど）はこのトレイトを実装する必要があります。
pub trait LlmProvider {
    /// プロバイダ名を返す
    fn name(&self) -> &str;

    /// 会話履歴全体からリクエストペイロードを生成
    ///
    /// # Arguments
    /// * `messages` - persona を先頭に含む会話履歴
    ///
    /// # Returns
    /// * `Ok(Value)` - リクエストJSON
    /// * `Err(Error)` - エラー
    fn make_request_payload(&self, messages: &[Message]) -> Result<Value, Error>;

    /// HTTPリクエストを実行してレスポンス本文を取得
    ///
    /// # Arguments
    /// * `request_json` - リクエストJSON文字列
    ///
    /// # Returns
    /// * `Ok(String)` - レスポンスJSON文字列
    /// * `Err(Error)` - Transport（転送層）または Provider（非 2xx）エラー
    fn make_http_request(&self, request_json: &str) -> Result<String, Error>;

    /// レスポンスから応答テキストを抽出
    ///
    /// # Arguments
    /// * `response_json` - レスポンスJSON文字列
    ///
    /// # Returns
    /// * `Ok(Option<String>)` - 抽出したテキスト（存在しない場合はNone）
    /// * `Err(Error)` - 不正な JSON は Provider エラー
    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error>;
}
