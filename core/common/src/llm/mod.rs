//! LLMドライバーとプロバイダ

/// プロバイダ設定
pub mod config;

/// プロバイダ非依存の共通処理
pub mod driver;

/// Echoプロバイダ（ネットワークなしのデバッグ用）
pub mod echo;

/// プロバイダファクトリー
pub mod factory;

/// OpenRouter Chat Completions プロバイダ
pub mod openrouter;

/// プロバイダのトレイト定義
pub mod provider;
