//! プロバイダファクトリー
//!
//! プロバイダタイプに基づいて適切なプロバイダを作成します。

use crate::domain::ModelName;
use crate::error::Error;
use crate::llm::config::ProviderConfig;
use crate::llm::echo::EchoProvider;
use crate::llm::openrouter::OpenRouterProvider;
use crate::llm::provider::{LlmProvider, Message};
use serde_json::Value;

/// プロバイダタイプ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderType {
    /// OpenRouter Chat Completions
    OpenRouter,
    /// Echo（直近のユーザーメッセージを返すだけ）
    Echo,
}

impl ProviderType {
    /// 文字列からプロバイダタイプを解析
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "openrouter" => Some(Self::OpenRouter),
            "echo" => Some(Self::Echo),
            _ => None,
        }
    }

    /// プロバイダタイプを文字列に変換
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenRouter => "openrouter",
            Self::Echo => "echo",
        }
    }
}

/// プロバイダのenumラッパー
///
/// 異なるプロバイダタイプを型安全に扱うために使用します。
pub enum AnyProvider {
    OpenRouter(OpenRouterProvider),
    Echo(EchoProvider),
}

impl LlmProvider for AnyProvider {
    fn name(&self) -> &str {
        match self {
            Self::OpenRouter(p) => p.name(),
            Self::Echo(p) => p.name(),
        }
    }

    fn make_request_payload(&self, messages: &[Message]) -> Result<Value, Error> {
        match self {
            Self::OpenRouter(p) => p.make_request_payload(messages),
            Self::Echo(p) => p.make_request_payload(messages),
        }
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        match self {
            Self::OpenRouter(p) => p.make_http_request(request_json),
            Self::Echo(p) => p.make_http_request(request_json),
        }
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        match self {
            Self::OpenRouter(p) => p.parse_response_text(response_json),
            Self::Echo(p) => p.parse_response_text(response_json),
        }
    }
}

/// プロバイダを作成する
///
/// # Arguments
/// * `provider_type` - プロバイダタイプ
/// * `config` - プロバイダ設定（OpenRouter では必須）
/// * `model` - モデル名（省略時は config のプライマリモデル）
pub fn create_provider(
    provider_type: ProviderType,
    config: Option<&ProviderConfig>,
    model: Option<ModelName>,
) -> Result<AnyProvider, Error> {
    match provider_type {
        ProviderType::OpenRouter => {
            let config = config
                .ok_or_else(|| Error::config("provider config required for openrouter"))?;
            let model = model.unwrap_or_else(|| config.primary_model.clone());
            Ok(AnyProvider::OpenRouter(OpenRouterProvider::new(
                config, model,
            )))
        }
        ProviderType::Echo => Ok(AnyProvider::Echo(EchoProvider::new())),
    }
}
