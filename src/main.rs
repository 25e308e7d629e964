//! newsdesk: AI news summaries and article Q&A
//!
//! Client for the news backend's `/summarize_news` and `/chat_with_news`
//! endpoints, as a window or from the terminal.
//!
//! Usage:
//!   newsdesk                           - Open the window
//!   newsdesk summarize bbc, reuters    - Print summaries
//!   newsdesk ask @story.txt "Why?"     - Print the answer
//!   newsdesk config                    - Print resolved configuration
//!   newsdesk help                      - Show help

mod app;
mod backend;
mod commands;
mod config;
mod error;
mod flows;
mod ui;
mod view;

use std::env;

use app::NewsDesk;
use backend::api::NewsClient;
use backend::sidecar::Sidecar;
use commands::Command;
use config::Config;
use iced::{window, Size, Task};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use view::{text, Document, ElementId};

/// Wrap width for terminal output
const TERMINAL_WIDTH: usize = 100;

fn main() -> iced::Result {
    // Logs go to stderr so command output stays pipeable
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    let args: Vec<String> = env::args().skip(1).collect();

    let output = match Command::parse(&args) {
        Command::Gui => return start_window(config),
        Command::Summarize { sources } => run_summarize(&config, sources),
        Command::Ask { article, question } => run_ask(&config, &article, question),
        Command::Config => serde_json::to_string_pretty(&config)
            .map_err(|e| error::Error::Config(e.to_string())),
        Command::Help => Ok(Command::help_text().to_string()),
        Command::Invalid { message } => {
            eprintln!("{}", message);
            std::process::exit(2);
        }
    };

    match output {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Command failed: {:?}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_summarize(config: &Config, sources: String) -> error::Result<String> {
    let rt = tokio::runtime::Runtime::new()?;
    let client = NewsClient::new(&config.backend_url);

    let mut document = Document::new();
    document.set_value(ElementId::Sources, sources);
    rt.block_on(flows::fetch_summaries(
        &mut document,
        &client,
        config.render_options(),
    ))?;

    Ok(text::to_text(document.markup(ElementId::Summaries), TERMINAL_WIDTH))
}

fn run_ask(config: &Config, article: &str, question: String) -> error::Result<String> {
    let rt = tokio::runtime::Runtime::new()?;
    let client = NewsClient::new(&config.backend_url);

    let mut document = Document::new();
    document.set_value(ElementId::Article, commands::load_article(article)?);
    document.set_value(ElementId::Question, question);
    rt.block_on(flows::chat_with_ai(
        &mut document,
        &client,
        config.render_options(),
    ))?;

    Ok(text::to_text(document.markup(ElementId::ChatResponse), TERMINAL_WIDTH))
}

fn start_window(config: Config) -> iced::Result {
    tracing::info!("Opening newsdesk window (backend {})", config.backend_url);

    // Killed on drop, after the window closes
    let mut sidecar = config
        .backend_command
        .clone()
        .map(Sidecar::new)
        .and_then(|mut sidecar| match sidecar.start() {
            Ok(()) => Some(sidecar),
            Err(e) => {
                tracing::warn!("Could not start backend: {}", e);
                None
            }
        });

    let result = iced::application("newsdesk", NewsDesk::update, NewsDesk::view)
        .theme(NewsDesk::theme)
        .window(window::Settings {
            size: Size::new(760.0, 720.0),
            position: window::Position::Centered,
            resizable: true,
            ..Default::default()
        })
        .antialiasing(true)
        .run_with(move || (NewsDesk::new(&config), Task::none()));

    if let Some(sidecar) = sidecar.as_mut() {
        if !sidecar.is_running() {
            tracing::warn!("Backend exited before the window closed");
        }
    }

    result
}
