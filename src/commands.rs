//! Command-line parsing
//!
//! Parses invocations like `newsdesk summarize bbc, reuters` and
//! `newsdesk ask @article.txt "Who won?"`.

use crate::error::Result;

/// Parsed command from the process arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the window: (no args) or `gui`
    Gui,
    /// Summarize sources: summarize <sources>
    Summarize { sources: String },
    /// Ask about an article: ask <article|@file> <question>
    Ask { article: String, question: String },
    /// Print resolved configuration: config
    Config,
    /// Show help: help
    Help,
    /// Anything that did not parse, with the message to show
    Invalid { message: String },
}

impl Command {
    /// Parse arguments, excluding the program name
    pub fn parse(args: &[String]) -> Self {
        let Some((cmd, rest)) = args.split_first() else {
            return Command::Gui;
        };

        match cmd.to_lowercase().as_str() {
            "gui" | "open" => Command::Gui,
            "summarize" | "sum" | "s" => {
                if rest.is_empty() {
                    Command::Invalid {
                        message: "Usage: newsdesk summarize <source, source, ...>".to_string(),
                    }
                } else {
                    // Unquoted lists arrive split on spaces; rejoin before comma splitting
                    Command::Summarize { sources: rest.join(" ") }
                }
            }
            "ask" | "chat" | "a" => match rest {
                [article, question] => Command::Ask {
                    article: article.clone(),
                    question: question.clone(),
                },
                _ => Command::Invalid {
                    message: "Usage: newsdesk ask <article|@file> <question>".to_string(),
                },
            },
            "config" => Command::Config,
            "help" | "--help" | "-h" => Command::Help,
            _ => Command::Invalid {
                message: format!("Unknown command: {}. Run 'newsdesk help' for usage.", cmd),
            },
        }
    }

    /// Get help text for all commands
    pub fn help_text() -> &'static str {
        r#"newsdesk - AI news summaries and article Q&A

Usage: newsdesk [command]

Commands:
  (none), gui                     Open the window
  summarize <sources>             Summarize comma-separated sources
  ask <article|@file> <question>  Ask a question about an article
  config                          Print the resolved configuration
  help                            Show this help message

Environment:
  NEWSDESK_BACKEND_URL    Backend base URL (default http://127.0.0.1:8000)
  NEWSDESK_ESCAPE_MARKUP  Escape backend text before rendering (default false)
  RUST_LOG                Log filter, e.g. newsdesk=debug"#
    }
}

/// Article text from an `ask` argument; `@path` reads the file
pub fn load_article(arg: &str) -> Result<String> {
    match arg.strip_prefix('@') {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => Ok(arg.to_string()),
    }
}
