//! HOLO共通ライブラリ
//!
//! アシスタント本体（`holo`）と共有する基盤を提供します。
//! エラー型・構造化ログ・設定解決・LLMプロバイダ層をまとめる。

/// 標準アダプタ（時刻・環境変数・ログ出力）
pub mod adapter;

/// ドメイン型（Newtype）
pub mod domain;

/// エラーハンドリング
pub mod error;

/// LLMドライバーとプロバイダ
pub mod llm;

/// Outboundポート
pub mod ports;
