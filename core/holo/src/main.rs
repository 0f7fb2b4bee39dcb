mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::io::{self, BufRead};
use std::process;

use common::error::Error;
use common::llm::config::{DEFAULT_FALLBACK_MODEL, DEFAULT_PRIMARY_MODEL};
use common::ports::outbound::{now_iso8601, LogLevel, LogRecord};

use cli::parse_args;
use wiring::{wire_holo, App};

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("holo: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = parse_args()?;
    if config.help {
        print_help();
        return Ok(0);
    }
    let app = wire_holo(&config)?;
    run_repl(app)
}

/// 標準入力を 1 行ずつ読み、アシスタントへ渡す対話ループ
fn run_repl(app: App) -> Result<i32, Error> {
    let App {
        mut assistant,
        logger,
    } = app;

    let _ = logger.log(&LogRecord {
        ts: now_iso8601(),
        level: LogLevel::Info,
        message: "session started".to_string(),
        layer: Some("cli".to_string()),
        kind: Some("lifecycle".to_string()),
        fields: None,
    });

    assistant.greet();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.map_err(|e| Error::io_msg(format!("failed to read input: {}", e)))?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        let _reply = assistant.handle_input(input);
    }

    let _ = logger.log(&LogRecord {
        ts: now_iso8601(),
        level: LogLevel::Info,
        message: "session finished".to_string(),
        layer: Some("cli".to_string()),
        kind: Some("lifecycle".to_string()),
        fields: None,
    });
    Ok(0)
}

fn print_usage() {
    eprintln!("Usage: holo [options]");
}

fn print_help() {
    println!("Usage: holo [options]");
    println!("Options:");
    println!("  -h, --help                 Show this help message");
    println!("  -p, --provider <name>      Completion provider: openrouter (default) or echo (offline)");
    println!(
        "  -m, --model <model>        Primary model identifier (default: {})",
        DEFAULT_PRIMARY_MODEL
    );
    println!(
        "  --fallback-model <model>   Fallback model identifier (default: {})",
        DEFAULT_FALLBACK_MODEL
    );
    println!("  -S, --persona <text>       Override the persona (system) message");
    println!("  --quiet                    Suppress spoken output");
    println!("  -v, --verbose              Emit JSONL diagnostics to stderr");
    println!();
    println!("Environment:");
    println!("  OPENROUTER_API_KEY   API key for the completion endpoint (required unless -p echo)");
    println!("  HOLO_MODEL           Primary model identifier override");
    println!("  HOLO_FALLBACK_MODEL  Fallback model identifier override");
    println!();
    println!("Description:");
    println!("  Interactive avatar assistant. Type a message and press Enter.");
    println!("  Replies are shown on stdout and spoken via the speech adapter.");
    println!("  End input (Ctrl-D) to exit.");
    println!();
    println!("Examples:");
    println!("  holo");
    println!("  holo -p echo --quiet");
    println!("  holo -m openai/gpt-4o -v");
}
