//! Headless checklist host.
//!
//! # Responsibility
//! - Drive one `ChecklistPanel` through open, render, update and close for a
//!   single user action per invocation.
//! - Persist through a SQLite preference file.

use anyhow::{anyhow, bail, Context, Result};
use checklist_core::db::open_db;
use checklist_core::{
    core_version, default_log_level, init_logging, ChecklistConfig, ChecklistPanel,
    ChecklistView, ItemId, PreferenceStore, SqlitePreferences, DEFAULT_PREF_KEY,
};
use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;

const DB_FILE_NAME: &str = "prefs.sqlite3";

#[derive(Parser, Debug)]
#[command(name = "checklist", version, about = "Keep a small persistent checklist")]
struct Cli {
    /// Preference database file (defaults to the user data directory)
    #[arg(long, env = "CHECKLIST_DB")]
    db: Option<PathBuf>,

    /// Preference key naming this checklist
    #[arg(short, long, env = "CHECKLIST_KEY", default_value = DEFAULT_PREF_KEY)]
    key: String,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, env = "CHECKLIST_LOG_DIR")]
    log_dir: Option<String>,

    /// Log level (trace|debug|info|warn|error); only valid with --log-dir
    #[arg(long, env = "CHECKLIST_LOG_LEVEL", requires = "log_dir")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print active and complete items
    Show,
    /// Add an item; words are joined with spaces
    Add {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Flip an item between active and complete
    Toggle { index: usize },
    /// Replace an item's text
    Edit { index: usize, text: Vec<String> },
    /// Remove an item
    Remove { index: usize },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir)
            .map_err(|err| anyhow!("failed to initialize logging: {err}"))?;
    }

    let db_path = match cli.db {
        Some(path) => path,
        None => default_db_path()?,
    };
    if let Some(parent) = db_path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create `{}`", parent.display()))?;
    }
    let conn = open_db(&db_path)
        .with_context(|| format!("failed to open `{}`", db_path.display()))?;

    let config = ChecklistConfig::new(&cli.key)?;
    info!(
        "event=cli_start module=cli status=ok version={} key={}",
        core_version(),
        config.pref_key()
    );

    let mut panel = ChecklistPanel::open(SqlitePreferences::new(&conn), config)
        .context("failed to load checklist")?;

    run_command(&mut panel, cli.command.unwrap_or(Command::Show))?;
    panel.update();
    print_view(&panel.render());

    panel.close().context("failed to save checklist")?;
    Ok(())
}

fn run_command<P: PreferenceStore>(
    panel: &mut ChecklistPanel<P>,
    command: Command,
) -> Result<()> {
    match command {
        Command::Show => {}
        Command::Add { text } => {
            if !panel.on_add_requested(&text.join(" ")) {
                bail!("item text must not be empty");
            }
        }
        Command::Toggle { index } => {
            let id = row_id(&panel.render(), index)?;
            panel.on_toggle(id);
        }
        Command::Edit { index, text } => {
            let id = row_id(&panel.render(), index)?;
            panel.on_edit(id, text.join(" "));
        }
        Command::Remove { index } => {
            let id = row_id(&panel.render(), index)?;
            panel.on_remove(id);
        }
    }
    Ok(())
}

/// Resolves a 1-based row number as printed by `show`.
fn row_id(view: &ChecklistView, index: usize) -> Result<ItemId> {
    index
        .checked_sub(1)
        .and_then(|offset| view.rows().nth(offset))
        .map(|row| row.id)
        .with_context(|| format!("no item #{index}; checklist has {} items", view.len()))
}

fn print_view(view: &ChecklistView) {
    println!("Active");
    for (number, row) in view.active.iter().enumerate() {
        println!("  {:>3}. [ ] {}", number + 1, row.display_text);
    }
    println!("Complete");
    let offset = view.active.len();
    for (number, row) in view.complete.iter().enumerate() {
        println!("  {:>3}. [x] {}", offset + number + 1, row.display_text);
    }
}

fn default_db_path() -> Result<PathBuf> {
    let Some(data_dir) = dirs::data_dir() else {
        bail!("no user data directory; pass --db");
    };
    Ok(data_dir.join("checklist").join(DB_FILE_NAME))
}
