//! プロバイダ設定
//!
//! 環境変数から解決する不変の設定値。プロセス生存中は変更しない。
//! API キーが無いまま接続して失敗するより先に、生成時点で検証して止める。

use crate::domain::ModelName;
use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::time::Duration;

/// 既定のエンドポイント（OpenRouter Chat Completions）
pub const DEFAULT_ENDPOINT_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
/// 既定のプライマリモデル
pub const DEFAULT_PRIMARY_MODEL: &str = "anthropic/claude-3-opus:beta";
/// 既定のフォールバックモデル
pub const DEFAULT_FALLBACK_MODEL: &str = "openai/gpt-4o";
/// 応答生成の温度（0.0〜1.0）
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
/// 生成トークン数の上限
pub const DEFAULT_MAX_TOKENS: u32 = 500;
/// HTTPリクエストのタイムアウト秒
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// APIキーを読む環境変数名
pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";
/// プライマリモデルを上書きする環境変数名
pub const MODEL_ENV: &str = "HOLO_MODEL";
/// フォールバックモデルを上書きする環境変数名
pub const FALLBACK_MODEL_ENV: &str = "HOLO_FALLBACK_MODEL";

/// プロバイダ設定（不変値）
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub endpoint_url: String,
    pub api_key: String,
    pub primary_model: ModelName,
    pub fallback_model: ModelName,
    pub temperature: f32,
    pub max_tokens: u32,
    pub request_timeout: Duration,
}

impl ProviderConfig {
    /// 設定値を検証して生成する
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        endpoint_url: impl Into<String>,
        api_key: impl Into<String>,
        primary_model: ModelName,
        fallback_model: ModelName,
        temperature: f32,
        max_tokens: u32,
        request_timeout: Duration,
    ) -> Result<Self, Error> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::config(format!(
                "API key is empty (set {})",
                API_KEY_ENV
            )));
        }
        if !(0.0..=1.0).contains(&temperature) {
            return Err(Error::config(format!(
                "temperature out of range [0,1]: {}",
                temperature
            )));
        }
        if max_tokens == 0 {
            return Err(Error::config("max_tokens must be positive"));
        }
        Ok(Self {
            endpoint_url: endpoint_url.into(),
            api_key,
            primary_model,
            fallback_model,
            temperature,
            max_tokens,
            request_timeout,
        })
    }

    /// 環境変数から設定を解決する
    ///
    /// モデル名は引数 > 環境変数 > 既定値の順で決まる。
    pub fn from_env(
        env: &dyn EnvResolver,
        primary_override: Option<ModelName>,
        fallback_override: Option<ModelName>,
    ) -> Result<Self, Error> {
        let api_key = env
            .var(API_KEY_ENV)
            .ok_or_else(|| Error::config(format!("{} is not set", API_KEY_ENV)))?;
        let primary = primary_override
            .or_else(|| env.var(MODEL_ENV).map(ModelName::new))
            .unwrap_or_else(|| ModelName::new(DEFAULT_PRIMARY_MODEL));
        let fallback = fallback_override
            .or_else(|| env.var(FALLBACK_MODEL_ENV).map(ModelName::new))
            .unwrap_or_else(|| ModelName::new(DEFAULT_FALLBACK_MODEL));
        Self::new(
            DEFAULT_ENDPOINT_URL,
            api_key,
            primary,
            fallback,
            DEFAULT_TEMPERATURE,
            DEFAULT_MAX_TOKENS,
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }

    /// フォールバックがプライマリと別モデルかどうか
    ///
    /// 同一モデルのときは二度目のリモート試行に意味が無いので、wiring は
    /// フォールバック段を組み立てない。
    pub fn has_distinct_fallback(&self) -> bool {
        self.fallback_model != self.primary_model
    }
}
