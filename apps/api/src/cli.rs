//! Interactive question loop for `resumebot-cli`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use crate::chat::service::Assistant;

const QUIT_COMMAND: &str = "quit";

#[derive(Debug, Parser)]
#[command(name = "resumebot-cli", version, about = "Ask questions about a résumé")]
pub struct CliArgs {
    /// Résumé to answer from (PDF, or .txt / .md)
    #[arg(long, env = "RESUME_PATH")]
    pub resume: Option<PathBuf>,

    /// Column at which answers are wrapped
    #[arg(long, default_value_t = 80)]
    pub width: usize,
}

/// Case-insensitive match on the exit sentinel.
pub fn is_quit(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(QUIT_COMMAND)
}

/// Wraps an answer for the terminal. Words longer than `width` are broken.
pub fn wrap_answer(text: &str, width: usize) -> String {
    textwrap::fill(text, width.max(1))
}

/// Reads questions until `quit`, Ctrl-C or end of input. All questions share
/// one session; errors are printed and the loop continues.
pub async fn run(assistant: &Assistant, width: usize) -> Result<()> {
    let mut editor = DefaultEditor::new().context("Failed to create line editor")?;
    let mut session_id: Option<String> = None;

    println!("{}", assistant.greeting());
    println!("Type '{QUIT_COMMAND}' to exit.");

    loop {
        println!();
        let line = match editor.readline("Your question: ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("Failed to read input"),
        };
        let input = line.trim();

        if is_quit(input) {
            break;
        }
        if input.is_empty() {
            continue;
        }
        let _ = editor.add_history_entry(input);

        match assistant.ask(input, session_id.clone()).await {
            Ok(answer) => {
                debug!("Answered in session {}", answer.session_id);
                session_id = Some(answer.session_id);
                println!("\nAssistant: {}", wrap_answer(&answer.response, width));
            }
            Err(e) => {
                println!("\nError: {e}");
                println!("Please try asking your question again.");
            }
        }
    }

    println!("Goodbye!");
    Ok(())
}
