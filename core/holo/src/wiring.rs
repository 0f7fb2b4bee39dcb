//! 配線: 標準アダプタで Assistant を組み立てる

use std::sync::Arc;

use common::adapter::{Clock, NoopLog, StdClock, StdEnvResolver, StderrJsonLog};
use common::error::Error;
use common::llm::config::ProviderConfig;
use common::llm::driver::LlmDriver;
use common::llm::factory::{create_provider, AnyProvider, ProviderType};
use common::ports::outbound::Log;

use crate::adapter::{ConsoleMessageSink, ConsoleSpeech, NullSpeech, SignalVoiceCatalog};
use crate::cli::Config;
use crate::domain::transcript::DEFAULT_MAX_HISTORY;
use crate::domain::{LocalResponder, VoiceName};
use crate::ports::outbound::{MessageSink, SpeechSynthesizer, VoiceCatalog};
use crate::usecase::{Assistant, ConversationSession};

/// 既定の persona（system メッセージ）
pub const DEFAULT_PERSONA: &str = "You are HOLO, a holographic AI assistant projected in front of the user. You are helpful, precise, and lightly witty. Keep replies concise and conversational; they are spoken aloud by a speech synthesizer.";

/// 既定のボイス名
pub const DEFAULT_VOICE: &str = "en-US-standard";

/// 組み立て済みアプリケーション
pub struct App {
    pub assistant: Assistant<AnyProvider>,
    pub logger: Arc<dyn Log>,
}

/// 配線: 標準アダプタで Assistant を組み立てる
pub fn wire_holo(config: &Config) -> Result<App, Error> {
    let logger: Arc<dyn Log> = if config.verbose {
        Arc::new(StderrJsonLog::new())
    } else {
        Arc::new(NoopLog)
    };

    let clock: Arc<dyn Clock> = Arc::new(StdClock);
    let responder = LocalResponder::new(clock);

    let (primary, fallback) = build_providers(config)?;

    let persona = config
        .persona
        .clone()
        .unwrap_or_else(|| DEFAULT_PERSONA.to_string());
    let session = ConversationSession::new(
        persona,
        DEFAULT_MAX_HISTORY,
        LlmDriver::new(primary),
        fallback.map(LlmDriver::new),
        responder,
        Arc::clone(&logger),
    );

    // ネイティブ環境ではボイス一覧が起動時に確定するため、ここで登録して即 ready にする
    let catalog = Arc::new(SignalVoiceCatalog::new());
    catalog.install(vec![VoiceName::new(DEFAULT_VOICE)]);
    let voices: Arc<dyn VoiceCatalog> = catalog;

    let speech: Arc<dyn SpeechSynthesizer> = if config.quiet {
        Arc::new(NullSpeech)
    } else {
        Arc::new(ConsoleSpeech::new())
    };
    let sink: Arc<dyn MessageSink> = Arc::new(ConsoleMessageSink::new());

    let assistant = Assistant::new(session, speech, voices, sink, Arc::clone(&logger));
    Ok(App { assistant, logger })
}

/// プロバイダ対を作る（フォールバック段は別モデルのときだけ）
fn build_providers(config: &Config) -> Result<(AnyProvider, Option<AnyProvider>), Error> {
    match config.provider {
        ProviderType::OpenRouter => {
            let env = StdEnvResolver;
            let pc = ProviderConfig::from_env(
                &env,
                config.model.clone(),
                config.fallback_model.clone(),
            )?;
            let primary = create_provider(
                ProviderType::OpenRouter,
                Some(&pc),
                Some(pc.primary_model.clone()),
            )?;
            let fallback = if pc.has_distinct_fallback() {
                Some(create_provider(
                    ProviderType::OpenRouter,
                    Some(&pc),
                    Some(pc.fallback_model.clone()),
                )?)
            } else {
                None
            };
            Ok((primary, fallback))
        }
        ProviderType::Echo => Ok((create_provider(ProviderType::Echo, None, None)?, None)),
    }
}
