use async_trait::async_trait;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info};

use super::{
    CliError, CliService,
    formatting::{format_error, format_header},
};
use crate::{
    Result, SlmError,
    bootstrap::{AppContext, FrontEnd, FrontEndKind},
    freshness::APP_VERSION,
};

const PROMPT: &str = "slm> ";

/// What a single input line asks the console to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleInput {
    /// Blank line.
    Empty,
    /// `help`.
    Help,
    /// `exit` or `quit`.
    Exit,
    /// `<category> <command> [args...]`.
    Command {
        /// Registry category.
        category: String,
        /// Command within the category.
        name: String,
        /// Remaining words.
        args: Vec<String>,
    },
    /// A lone word that is not a built-in.
    Incomplete(String),
    /// Unbalanced quotes.
    Malformed(String),
}

impl ConsoleInput {
    /// Classifies one line of input.
    pub fn parse(line: &str) -> Self {
        let words = match split_words(line) {
            Ok(words) => words,
            Err(message) => return ConsoleInput::Malformed(message),
        };

        let mut words = words.into_iter();
        match (words.next(), words.next()) {
            (None, _) => ConsoleInput::Empty,
            (Some(word), None) if word == "help" => ConsoleInput::Help,
            (Some(word), None) if word == "exit" || word == "quit" => ConsoleInput::Exit,
            (Some(word), None) => ConsoleInput::Incomplete(word),
            (Some(category), Some(name)) => ConsoleInput::Command {
                category,
                name,
                args: words.collect(),
            },
        }
    }
}

/// Splits a line on whitespace, keeping single- or double-quoted runs
/// together. `""` yields an empty argument.
pub fn split_words(line: &str) -> std::result::Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(format!("unterminated {q} quote"));
    }

    if in_word {
        words.push(current);
    }

    Ok(words)
}

/// Line-oriented text front end over stdin/stdout.
#[derive(Debug, Default)]
pub struct ConsoleFrontEnd;

impl ConsoleFrontEnd {
    /// Creates the console front end.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FrontEnd for ConsoleFrontEnd {
    fn kind(&self) -> FrontEndKind {
        FrontEndKind::Console
    }

    async fn start(self: Box<Self>, context: AppContext) -> Result<()> {
        let service = CliService::new(context.store.clone());
        let mut stdout = io::stdout();
        let mut lines = BufReader::new(io::stdin()).lines();

        let banner = format!(
            "{}\nWorking directory: {}\nType 'help' for commands.\n",
            format_header(&format!("Switch Library Manager {APP_VERSION}")),
            context.working_dir.display()
        );
        write_out(&mut stdout, &banner).await?;

        loop {
            write_out(&mut stdout, PROMPT).await?;

            let Some(line) = lines.next_line().await.map_err(console_error)? else {
                break;
            };

            let output = match ConsoleInput::parse(&line) {
                ConsoleInput::Empty => continue,
                ConsoleInput::Exit => break,
                ConsoleInput::Help => service.help_text(),
                ConsoleInput::Incomplete(word) => format_error(&format!(
                    "'{word}' needs a command, type 'help' for the list"
                )),
                ConsoleInput::Malformed(message) => format_error(&message),
                ConsoleInput::Command {
                    category,
                    name,
                    args,
                } => {
                    debug!(%category, %name, ?args, "Console command");
                    match service.execute_command(&category, &name, &args).await {
                        Ok(output) => output,
                        Err(e @ CliError::CommandNotFound(_)) => {
                            format_error(&format!("{e}, type 'help' for the list"))
                        }
                        Err(e) => format_error(&e.to_string()),
                    }
                }
            };

            write_out(&mut stdout, &format!("{output}\n")).await?;
        }

        info!("Console closed");
        Ok(())
    }
}

async fn write_out(stdout: &mut io::Stdout, text: &str) -> Result<()> {
    stdout
        .write_all(text.as_bytes())
        .await
        .map_err(console_error)?;
    stdout.flush().await.map_err(console_error)
}

fn console_error(error: std::io::Error) -> SlmError {
    SlmError::FrontEnd(format!("console I/O failed: {error}"))
}
