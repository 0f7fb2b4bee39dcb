//! コンソールへの会話表示アダプタ

use crate::ports::outbound::MessageSink;
use common::error::Error;
use common::llm::provider::Role;

/// 会話を標準出力へ 1 行ずつ表示する
///
/// persona（system）メッセージは表示しない。
#[derive(Debug, Clone, Default)]
pub struct ConsoleMessageSink;

impl ConsoleMessageSink {
    pub fn new() -> Self {
        Self
    }
}

impl MessageSink for ConsoleMessageSink {
    fn emit(&self, role: Role, text: &str) -> Result<(), Error> {
        match role {
            Role::User => println!("you> {}", text),
            Role::Assistant => println!("holo> {}", text),
            Role::System => {}
        }
        Ok(())
    }
}
