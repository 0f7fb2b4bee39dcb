//! アダプタ実装

mod console_sink;
mod console_speech;
mod signal_voice_catalog;
mod stub_llm;

pub use console_sink::ConsoleMessageSink;
pub use console_speech::{ConsoleSpeech, NullSpeech};
pub use signal_voice_catalog::SignalVoiceCatalog;
#[cfg(test)]
pub use stub_llm::StubProvider;
