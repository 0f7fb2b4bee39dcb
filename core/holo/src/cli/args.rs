//! コマンドライン引数の解析

use clap::builder::ArgAction;
use common::domain::ModelName;
use common::error::Error;
use common::llm::factory::ProviderType;

/// 解析済みのコマンドライン設定
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub help: bool,
    /// -v / --verbose: 診断ログ（JSONL）を stderr に出す
    pub verbose: bool,
    /// --quiet: 発話出力を抑止する
    pub quiet: bool,
    pub provider: ProviderType,
    pub model: Option<ModelName>,
    pub fallback_model: Option<ModelName>,
    /// -S / --persona: persona（system メッセージ）の上書き
    pub persona: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            help: false,
            verbose: false,
            quiet: false,
            provider: ProviderType::OpenRouter,
            model: None,
            fallback_model: None,
            persona: None,
        }
    }
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("holo")
        .about("Interactive holographic avatar assistant")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Emit JSONL diagnostics to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("quiet")
                .long("quiet")
                .help("Suppress spoken output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("provider")
                .short('p')
                .long("provider")
                .help("Completion provider (openrouter, echo)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("model")
                .short('m')
                .long("model")
                .help("Primary model identifier")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("fallback-model")
                .long("fallback-model")
                .help("Fallback model identifier")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("persona")
                .short('S')
                .long("persona")
                .help("Override the persona (system) message")
                .num_args(1),
        )
}

/// 引数を解析して Config を返す
pub fn parse_args() -> Result<Config, Error> {
    let args: Vec<String> = std::env::args().collect();
    parse_args_from(&args)
}

pub fn parse_args_from(args: &[String]) -> Result<Config, Error> {
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::usage(e.to_string()))?;

    let provider = match matches.get_one::<String>("provider") {
        Some(s) => ProviderType::from_str(s)
            .ok_or_else(|| Error::usage(format!("unknown provider: {}", s)))?,
        None => ProviderType::OpenRouter,
    };

    Ok(Config {
        help: matches.get_flag("help"),
        verbose: matches.get_flag("verbose"),
        quiet: matches.get_flag("quiet"),
        provider,
        model: matches
            .get_one::<String>("model")
            .map(|s| ModelName::new(s.clone())),
        fallback_model: matches
            .get_one::<String>("fallback-model")
            .map(|s| ModelName::new(s.clone())),
        persona: matches.get_one::<String>("persona").cloned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config, Error> {
        let argv: Vec<String> = std::iter::once("holo".to_string())
            .chain(args.iter().map(|s| s.to_string()))
            .collect();
        parse_args_from(&argv)
    }

    #[test]
    fn test_defaults() {
        let cfg = parse(&[]).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn test_flags() {
        let cfg = parse(&["-v", "--quiet", "-h"]).unwrap();
        assert!(cfg.verbose);
        assert!(cfg.quiet);
        assert!(cfg.help);
    }

    #[test]
    fn test_provider_echo() {
        let cfg = parse(&["-p", "echo"]).unwrap();
        assert_eq!(cfg.provider, ProviderType::Echo);
    }

    #[test]
    fn test_unknown_provider_is_usage_error() {
        let err = parse(&["-p", "nope"]).unwrap_err();
        assert!(err.is_usage());
    }

    #[test]
    fn test_model_overrides() {
        let cfg = parse(&["-m", "a/b", "--fallback-model", "c/d"]).unwrap();
        assert_eq!(cfg.model, Some(ModelName::new("a/b")));
        assert_eq!(cfg.fallback_model, Some(ModelName::new("c/d")));
    }

    #[test]
    fn test_persona_override() {
        let cfg = parse(&["-S", "You are a test persona."]).unwrap();
        assert_eq!(cfg.persona.as_deref(), Some("You are a test persona."));
    }

    #[test]
    fn test_unknown_flag_is_usage_error() {
        let err = parse(&["--nope"]).unwrap_err();
        assert!(err.is_usage());
    }
}
