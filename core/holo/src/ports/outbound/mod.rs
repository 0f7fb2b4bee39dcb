//! Outboundポート

pub mod message_sink;
pub mod speech;
pub mod voice_catalog;

pub use message_sink::MessageSink;
pub use speech::{SpeechSynthesizer, Utterance};
pub use voice_catalog::VoiceCatalog;
