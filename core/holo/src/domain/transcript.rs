//! 会話トランスクリプト（上限付き履歴）のドメイン型
//!
//! 先頭は常に persona（system）メッセージ。上限超過時は index 1
//! （system を除く最古のメッセージ）を取り除く。役割に関係なく古い側から
//! 追い出す FIFO であり、新しい側からは決して削らない。

use common::llm::provider::{Message, Role};

/// persona 以外に保持するメッセージ数の既定値
pub const DEFAULT_MAX_HISTORY: usize = 10;

/// 会話トランスクリプト
#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<Message>,
    max_history: usize,
}

impl Transcript {
    /// persona メッセージと上限を指定して作成
    pub fn new(persona: impl Into<String>, max_history: usize) -> Self {
        Self {
            messages: vec![Message::system(persona)],
            max_history,
        }
    }

    /// メッセージを追加する（失敗しない）
    ///
    /// 全長が max_history + 1 を超えたら index 1 を取り除く。
    pub fn push(&mut self, role: Role, content: impl Into<String>) {
        self.messages.push(Message::new(role, content));
        if self.messages.len() > self.max_history + 1 {
            self.messages.remove(1);
        }
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.push(Role::User, content);
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.push(Role::Assistant, content);
    }

    /// persona メッセージだけ残して履歴を消す
    pub fn reset(&mut self) {
        self.messages.truncate(1);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// persona（system）メッセージへの参照
    pub fn persona(&self) -> &Message {
        &self.messages[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_with_persona_only() {
        let t = Transcript::new("You are HOLO.", 10);
        assert_eq!(t.len(), 1);
        assert!(!t.is_empty());
        assert_eq!(t.persona().role, Role::System);
        assert_eq!(t.persona().content, "You are HOLO.");
    }

    #[test]
    fn test_push_keeps_arrival_order() {
        let mut t = Transcript::new("persona", 10);
        t.push_user("one");
        t.push_assistant("two");
        t.push_user("three");
        let contents: Vec<&str> = t.messages().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["persona", "one", "two", "three"]);
    }

    #[test]
    fn test_length_never_exceeds_bound() {
        let mut t = Transcript::new("persona", 5);
        for i in 0..40 {
            t.push_user(format!("m{}", i));
            assert!(t.len() <= 5 + 1);
            assert_eq!(t.persona().role, Role::System);
        }
    }

    #[test]
    fn test_eviction_removes_index_one_not_the_newest() {
        let mut t = Transcript::new("persona", 2);
        t.push_user("u1");
        t.push_assistant("a1");
        // ここで満杯（persona + 2）。次の追加で u1 が落ちる。
        t.push_user("u2");
        let contents: Vec<&str> = t.messages().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["persona", "a1", "u2"]);
    }

    #[test]
    fn test_eviction_ignores_role() {
        // assistant が index 1 にいる状態でも落ちるのは index 1
        let mut t = Transcript::new("persona", 2);
        t.push_assistant("a1");
        t.push_user("u1");
        t.push_user("u2");
        let contents: Vec<&str> = t.messages().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["persona", "u1", "u2"]);
    }

    #[test]
    fn test_reset_keeps_persona() {
        let mut t = Transcript::new("persona", 10);
        t.push_user("one");
        t.push_assistant("two");
        t.reset();
        assert_eq!(t.len(), 1);
        assert_eq!(t.persona().content, "persona");
    }
}
