//! Terminal presentation layer for the showcase catalog.
//!
//! # Responsibility
//! - Load the catalog document and drive a `CatalogSession`.
//! - Render the card grid and filter controls as plain text.
//!
//! # Invariants
//! - A failed catalog load prints the inline error and exits non-zero;
//!   no filter output is produced after a failed load.

use chrono::Local;
use clap::{Parser, Subcommand};
use showcase_core::{
    default_log_level, friendly_category_label, init_logging, load_catalog, reveal_target,
    CatalogSession, JsonFilePreferenceStore, RevealLatch, Visibility, LOAD_ERROR_MESSAGE,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "showcase")]
#[command(about = "Project showcase catalog browser")]
struct Cli {
    /// Catalog document path.
    #[arg(long, default_value = "projects.json")]
    data: PathBuf,
    /// Startup query string, e.g. `show=hidden`.
    #[arg(long, default_value = "")]
    query: String,
    /// Saved filter preferences path.
    #[arg(long, default_value = "showcase_filters.json")]
    prefs: PathBuf,
    /// Absolute log directory; file logging stays off when omitted.
    #[arg(long)]
    log_dir: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Render the card grid (default).
    List {
        /// Narrow a category to the given tag, as `category=tag`;
        /// repeatable, tags for the same category combine with OR.
        #[arg(long)]
        only: Vec<String>,
        /// Clear every selection in a category; repeatable.
        #[arg(long)]
        clear: Vec<String>,
    },
    /// Print the category/tag vocabulary with selection state.
    Tags,
    /// Replay a trigger-click sequence against the reveal latch.
    Reveal {
        /// Click timestamps in epoch milliseconds, in order; repeatable.
        #[arg(long = "click-at", required = true)]
        click_at: Vec<i64>,
        /// Page path the hidden-mode variant is composed from.
        #[arg(long, default_value = "index.html")]
        path: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        if let Err(err) = init_logging(default_log_level(), log_dir) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    // The reveal subcommand needs no catalog; handle it before loading.
    if let Some(Command::Reveal { click_at, path }) = &cli.command {
        match run_reveal(click_at, path) {
            Some(target) => println!("{target}"),
            None => println!("reveal not triggered ({} clicks)", click_at.len()),
        }
        return ExitCode::SUCCESS;
    }

    let projects = match load_catalog(&cli.data) {
        Ok(projects) => projects,
        Err(err) => {
            eprintln!("{LOAD_ERROR_MESSAGE}");
            eprintln!("({err})");
            return ExitCode::FAILURE;
        }
    };

    let visibility = Visibility::from_query(&cli.query);
    let store = JsonFilePreferenceStore::new(&cli.prefs);
    let mut session = CatalogSession::new(projects, visibility, store);

    match cli.command.unwrap_or(Command::List {
        only: Vec::new(),
        clear: Vec::new(),
    }) {
        Command::List { only, clear } => {
            for category in &clear {
                session.select_none(category);
            }
            if let Err(message) = apply_only_pairs(&mut session, &only) {
                eprintln!("{message}");
                return ExitCode::FAILURE;
            }
            render_grid(&session);
        }
        Command::Tags => render_vocabulary(&session),
        Command::Reveal { .. } => unreachable!("handled before catalog load"),
    }

    ExitCode::SUCCESS
}

/// Feeds timestamped clicks through the latch; returns the hidden-mode
/// target when the sequence trips it.
fn run_reveal(click_at: &[i64], path: &str) -> Option<String> {
    let mut latch = RevealLatch::new();
    for &now_ms in click_at {
        if latch.register_click(now_ms) {
            return Some(reveal_target(path));
        }
    }
    None
}

/// Applies `category=tag` pairs: each named category is narrowed to
/// exactly the tags listed for it.
fn apply_only_pairs(
    session: &mut CatalogSession<JsonFilePreferenceStore>,
    pairs: &[String],
) -> Result<(), String> {
    let mut narrowed: Vec<&str> = Vec::new();
    for pair in pairs {
        let Some((category, tag)) = pair.split_once('=') else {
            return Err(format!("invalid --only value `{pair}`; expected category=tag"));
        };
        if !narrowed.contains(&category) {
            session.select_none(category);
            narrowed.push(category);
        }
        if !session.set_selected(category, tag, true) {
            return Err(format!("unknown tag `{tag}` in category `{category}`"));
        }
    }
    Ok(())
}

fn render_grid(session: &CatalogSession<JsonFilePreferenceStore>) {
    let model = session.display_model(Local::now().date_naive());

    println!(
        "Showing {} of {} projects",
        model.visible_count, model.total_eligible
    );
    println!();

    if let Some(placeholder) = model.placeholder() {
        println!("{placeholder}");
        return;
    }

    for card in &model.cards {
        let badge = card
            .badge
            .map(|badge| format!(" [{}]", badge.label()))
            .unwrap_or_default();
        let hidden = if card.hidden { " (hidden)" } else { "" };
        println!("* {}{badge}{hidden}", card.title);
        println!("    {}", card.description);
        println!("    {}", card.url);
        if let Some(recency) = &card.recency {
            println!("    {recency}");
        }
        println!();
    }
}

fn render_vocabulary(session: &CatalogSession<JsonFilePreferenceStore>) {
    let vocabulary = session.vocabulary();
    let filters = session.filters();

    for category in vocabulary.categories() {
        let Some(tags) = vocabulary.tags(category) else {
            continue;
        };
        println!(
            "{} ({} of {} selected)",
            friendly_category_label(category),
            filters.selected_count(category),
            tags.len()
        );
        let selected = filters.selected(category);
        for tag in tags {
            let mark = selected.is_some_and(|set| set.contains(tag));
            println!("  [{}] {tag}", if mark { "x" } else { " " });
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::run_reveal;

    #[test]
    fn rapid_click_sequence_yields_the_hidden_target() {
        let target = run_reveal(&[0, 100, 200, 300, 400], "projects.html");
        assert_eq!(target.as_deref(), Some("projects.html?show=hidden"));
    }

    #[test]
    fn slow_or_short_sequences_do_not_trigger() {
        // Gap longer than the rolling window resets the count.
        assert!(run_reveal(&[0, 100, 2_500, 2_600, 2_700], "index.html").is_none());
        assert!(run_reveal(&[0, 100, 200], "index.html").is_none());
    }
}
