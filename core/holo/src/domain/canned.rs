//! ローカル応答（リモートプロバイダ全滅時の決定的な定型文）
//!
//! 小文字化した入力に対して固定順の (述語, 応答) 規則を先勝ちで照合する。
//! 順序が契約: greeting, joke, identity, purpose, time, date, weather,
//! thanks, farewell, help, question, unknown。
//! 時刻・日付だけ Clock から組み立て、それ以外は固定文字列を返す。

use common::adapter::Clock;
use std::sync::Arc;

pub const GREETING_REPLY: &str = "Hello. I'm experiencing some connectivity issues with my neural network, but I'm still here to assist you.";
pub const JOKE_REPLY: &str =
    "Why don't scientists trust atoms? Because they make up everything!";
pub const IDENTITY_REPLY: &str =
    "I am HOLO, a holographic interface assistant. I'm here to help with whatever you need.";
pub const PURPOSE_REPLY: &str = "My purpose is to assist you with information and tasks, and to provide a pleasant interface experience. Think of me as your personal AI assistant.";
pub const WEATHER_REPLY: &str = "I'm sorry, I don't have access to real-time weather data. In a full deployment I would connect to a weather service for you.";
pub const THANKS_REPLY: &str =
    "You're welcome. I'm happy to assist despite my current limitations.";
pub const FAREWELL_REPLY: &str = "Goodbye. I'll be here when you need me again.";
pub const HELP_REPLY: &str = "I can assist with information, tasks, and answers to your questions. However, my advanced functions are temporarily limited due to connectivity issues.";
pub const QUESTION_REPLY: &str = "I'm processing that request, but I need my remote reasoning systems for a complete answer. Could you try again shortly?";
pub const UNKNOWN_REPLY: &str = "I apologize, but I'm having trouble connecting to my knowledge database. Could you try again later or rephrase your question?";

/// 規則が返す応答の種別
#[derive(Debug, Clone, Copy)]
enum Reply {
    Fixed(&'static str),
    CurrentTime,
    CurrentDate,
}

/// 固定順の規則表（先勝ち）
const RULES: &[(fn(&str) -> bool, Reply)] = &[
    (is_greeting, Reply::Fixed(GREETING_REPLY)),
    (is_joke, Reply::Fixed(JOKE_REPLY)),
    (is_identity, Reply::Fixed(IDENTITY_REPLY)),
    (is_purpose, Reply::Fixed(PURPOSE_REPLY)),
    (is_time, Reply::CurrentTime),
    (is_date, Reply::CurrentDate),
    (is_weather, Reply::Fixed(WEATHER_REPLY)),
    (is_thanks, Reply::Fixed(THANKS_REPLY)),
    (is_farewell, Reply::Fixed(FAREWELL_REPLY)),
    (is_help, Reply::Fixed(HELP_REPLY)),
    (is_question, Reply::Fixed(QUESTION_REPLY)),
];

// 部分文字列照合（単語境界は見ない）
fn is_greeting(t: &str) -> bool {
    t.contains("hello") || t.contains("hi") || t.contains("hey")
}
fn is_joke(t: &str) -> bool {
    t.contains("joke") || t.contains("funny")
}
fn is_identity(t: &str) -> bool {
    t.contains("who are you") || t.contains("what is your name")
}
fn is_purpose(t: &str) -> bool {
    t.contains("your purpose") || t.contains("what can you do")
}
fn is_time(t: &str) -> bool {
    t.contains("time")
}
fn is_date(t: &str) -> bool {
    t.contains("date") || t.contains("day")
}
fn is_weather(t: &str) -> bool {
    t.contains("weather")
}
fn is_thanks(t: &str) -> bool {
    t.contains("thank")
}
fn is_farewell(t: &str) -> bool {
    t.contains("bye") || t.contains("goodbye")
}
fn is_help(t: &str) -> bool {
    t.contains("help")
}
fn is_question(t: &str) -> bool {
    t.contains('?')
}

/// ローカル応答器
pub struct LocalResponder {
    clock: Arc<dyn Clock>,
}

impl LocalResponder {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// 入力に対する定型応答を返す（失敗しない）
    pub fn respond(&self, user_text: &str) -> String {
        let lower = user_text.to_lowercase();
        for (matches, reply) in RULES {
            if matches(&lower) {
                return self.resolve(*reply);
            }
        }
        UNKNOWN_REPLY.to_string()
    }

    fn resolve(&self, reply: Reply) -> String {
        match reply {
            Reply::Fixed(text) => text.to_string(),
            Reply::CurrentTime => format!(
                "The current time is {}.",
                self.clock.now().format("%-I:%M:%S %p")
            ),
            Reply::CurrentDate => format!(
                "Today is {}.",
                self.clock.now().format("%A, %B %-d, %Y")
            ),
        }
    }
}
