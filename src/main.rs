use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use tracing_subscriber::EnvFilter;

use mediconnect_core::content::{BANNER, PROMPT_IDEAS};
use mediconnect_core::{ChatSession, Config, KnowledgeBase, Sender};

mod app;
mod handler;
mod tui;
mod ui;

use app::App;
use tui::EventHandler;

#[derive(Parser)]
#[command(name = "mediconnect", version)]
#[command(about = "Simple homeopathic care tips for common symptoms")]
struct Cli {
    /// JSON knowledge base to use instead of the configured or built-in one
    #[arg(long, global = true)]
    knowledge_base: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask one question and print the reply
    Ask {
        /// Your symptom or question
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// List the symptom topics and their trigger words
    Topics,
    /// Show example questions
    Prompts,
    /// Save settings to the config file
    Config {
        /// Knowledge base file to load on startup
        #[arg(long)]
        set_knowledge_base: Option<PathBuf>,
        /// Log filter, e.g. "debug"
        #[arg(long)]
        set_log_level: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load().context("Failed to load config")?;
    init_logging(&config)?;

    let load_knowledge = || -> Result<KnowledgeBase> {
        let knowledge = match &cli.knowledge_base {
            Some(path) => KnowledgeBase::load(path),
            None => config.knowledge_base(),
        };
        knowledge.context("Failed to load knowledge base")
    };

    match cli.command {
        None => run_tui(ChatSession::new(load_knowledge()?)).await?,
        Some(Commands::Ask { query }) => ask(load_knowledge()?, &query.join(" ")),
        Some(Commands::Topics) => list_topics(&load_knowledge()?),
        Some(Commands::Prompts) => list_prompts(),
        Some(Commands::Config { set_knowledge_base, set_log_level }) => {
            save_config(config.clone(), set_knowledge_base, set_log_level)?
        }
    }

    Ok(())
}

/// Log to a file; stderr belongs to the TUI
fn init_logging(config: &Config) -> Result<()> {
    let Some(log_dir) = dirs::data_local_dir().map(|d| d.join("mediconnect")) else {
        return Ok(());
    };
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let log_path = log_dir.join("mediconnect.log");
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => parse_log_level(config.log_level.as_deref().unwrap_or("info"))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn parse_log_level(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level).with_context(|| format!("Invalid log level filter {level:?}"))
}

async fn run_tui(session: ChatSession) -> Result<()> {
    tracing::info!(categories = session.knowledge().len(), "Starting chat");

    tui::install_panic_hook();
    let mut terminal = tui::init()?;
    let mut app = App::new(session);
    let mut events = EventHandler::new();

    let result = async {
        while !app.should_quit {
            terminal.draw(|frame| ui::render(&mut app, frame))?;

            match events.next().await {
                Some(event) => handler::handle_event(&mut app, event),
                None => break,
            }
        }
        anyhow::Ok(())
    }
    .await;

    tui::restore()?;
    tracing::info!(turns = app.session.turns(), "Chat closed");
    result
}

fn ask(knowledge: KnowledgeBase, query: &str) {
    let mut session = ChatSession::new(knowledge);

    let Some(reply) = session.submit(query) else {
        println!("{}", "Please type a symptom or question.".yellow());
        return;
    };

    println!("{}", format!("{}:", Sender::Assistant.label()).bold().yellow());
    let mut lines = reply.lines.iter();
    if let Some(first) = lines.next() {
        println!("{}", first.bold());
    }
    for line in lines {
        println!("  {}", line);
    }
}

fn list_topics(knowledge: &KnowledgeBase) {
    println!("\n{}", format!("🩺 {}", BANNER.title).bold().blue());
    println!("{}", "=".repeat(40).dimmed());

    for (i, category) in knowledge.categories().iter().enumerate() {
        println!(
            "\n{}. {}",
            (i + 1).to_string().bold(),
            category.title.bold().green()
        );
        println!("   {}", category.keywords.join(", ").dimmed());
    }

    println!("\n{}", "Earlier topics win when a question matches more than one.".dimmed());
}

fn list_prompts() {
    println!("\n{}", "💬 Try asking".bold().blue());
    println!("{}", "=".repeat(30).dimmed());
    for idea in PROMPT_IDEAS {
        println!("  • {}", idea);
    }
}

fn save_config(
    mut config: Config,
    knowledge_base: Option<PathBuf>,
    log_level: Option<String>,
) -> Result<()> {
    if let Some(path) = knowledge_base {
        // Reject a broken file now rather than on the next start
        KnowledgeBase::load(&path)
            .with_context(|| format!("Knowledge base {} is not usable", path.display()))?;
        config.knowledge_base = Some(path);
    }
    if let Some(level) = log_level {
        parse_log_level(&level)?;
        config.log_level = Some(level);
    }

    config.save().context("Failed to save config")?;
    println!(
        "{} {}",
        "Saved".green(),
        Config::get_config_path()?.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_filters() {
        assert!(parse_log_level("debug").is_ok());
        assert!(parse_log_level("warn,mediconnect_core=trace").is_ok());
        assert!(parse_log_level("mediconnect=shouty").is_err());
    }

    #[test]
    fn test_bad_log_level_is_not_saved() {
        let err = save_config(Config::default(), None, Some("mediconnect=shouty".into()))
            .unwrap_err();
        assert!(err.to_string().contains("Invalid log level"));
    }
}
