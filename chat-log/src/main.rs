use std::path::PathBuf;
use std::process::ExitCode;

use chat_log::{append_entry, LogEntry, DEFAULT_LOG_FILE};

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    let (prompt, response) = match (args.get(1), args.get(2)) {
        (Some(prompt), Some(response)) if !prompt.is_empty() && !response.is_empty() => {
            (prompt.clone(), response.clone())
        }
        _ => {
            eprintln!("Usage: append-log \"<prompt>\" \"<response>\"");
            return ExitCode::from(1);
        }
    };

    let path = std::env::var("CHAT_LOG_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOG_FILE));

    let entry = LogEntry::new(prompt, response).with_metadata("cli_command", "append-log");

    match append_entry(&path, &entry) {
        Ok(()) => {
            tracing::info!("logged at {}", entry.timestamp.to_rfc3339());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error writing log: {err}");
            ExitCode::from(1)
        }
    }
}
