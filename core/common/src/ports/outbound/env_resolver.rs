//! 環境変数解決の Outbound ポート

/// 環境変数の読み取り抽象
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用の固定マップなど。
pub trait EnvResolver: Send + Sync {
    /// 環境変数を読む（未設定・空文字列なら None）
    fn var(&self, name: &str) -> Option<String>;
}
