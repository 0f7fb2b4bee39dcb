//! 標準環境変数リゾルバ

use crate::ports::outbound::EnvResolver;
use std::env;

/// std::env を委譲する EnvResolver 実装
///
/// 空文字列に設定された変数は未設定として扱う。
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

impl EnvResolver for StdEnvResolver {
    fn var(&self, name: &str) -> Option<String> {
        env::var(name).ok().filter(|v| !v.is_empty())
    }
}
