//! Reference host and entry point.
//!
//! This binary is the thin integration layer between the listcard library and
//! a terminal: it loads a card configuration from a TOML file, a state
//! snapshot from a JSON file, drives the card through one configure/update
//! cycle, and composites the resulting view to stdout.
//!
//! # Host Lifecycle
//!
//! 1. **Parse**: Read CLI arguments and initialize tracing
//! 2. **Configure**: Load the card config and call `set_config`
//! 3. **Update**: Load the snapshot and call `update_state`
//! 4. **Composite**: Render the view with the active style
//!
//! Embedding dashboards replace this file entirely; it exists so the card can
//! be exercised end to end without one.
//!
//! # Usage
//!
//! ```text
//! listcard --config card.toml --state snapshot.json
//! listcard --config card.toml --state snapshot.json --theme slate-light --width 60
//! ```
//!
//! Card configuration file:
//!
//! ```toml
//! entity = "sensor.shopping_list"
//! title = "Groceries"
//! max_num_items = 10
//! ```
//!
//! Snapshot file:
//!
//! ```json
//! {
//!   "sensor.shopping_list": {
//!     "state": "[\"milk\", \"eggs\"]",
//!     "last_updated": "2024-06-01T12:30:00"
//!   }
//! }
//! ```

use clap::Parser;
use std::fs;
use std::path::PathBuf;

use listcard::observability::init_tracing;
use listcard::{CardError, ListCard, RawCardConfig, Result, StateSnapshot, Theme};

/// Render a list card from a config file and a state snapshot.
#[derive(Debug, Parser)]
#[command(name = "listcard", version, about)]
struct Cli {
    /// Card configuration file (TOML).
    #[arg(long, value_name = "FILE")]
    config: PathBuf,

    /// State snapshot file (JSON, entity id to record).
    #[arg(long, value_name = "FILE")]
    state: PathBuf,

    /// Theme: a built-in name (slate-dark, slate-light) or a TOML file path.
    #[arg(long)]
    theme: Option<String>,

    /// Card width in columns.
    #[arg(long, default_value_t = 80)]
    width: usize,

    /// Trace level when RUST_LOG is unset (trace, debug, info, warn, error).
    #[arg(long)]
    trace_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.trace_level.as_deref());

    let span = tracing::debug_span!("host_run");
    let _guard = span.entered();

    let theme = load_theme(cli.theme.as_deref());

    let raw: RawCardConfig = toml::from_str(&fs::read_to_string(&cli.config)?)
        .map_err(|e| CardError::Config(format!("failed to parse card config: {e}")))?;
    tracing::debug!(config = ?cli.config, "card configuration loaded");

    let snapshot: StateSnapshot = serde_json::from_str(&fs::read_to_string(&cli.state)?)?;
    tracing::debug!(entities = snapshot.len(), "state snapshot loaded");

    let mut card = ListCard::new(theme);
    card.set_config(&raw)?;

    let view = card.update_state(snapshot)?;
    listcard::ui::render(&view, card.style(), cli.width);

    Ok(())
}

/// Resolves the theme: built-in name first, then file path, falling back to
/// the default theme with a debug log on failure.
fn load_theme(selector: Option<&str>) -> Theme {
    selector.map_or_else(Theme::default, |selector| {
        Theme::from_name(selector).unwrap_or_else(|| {
            Theme::from_file(selector).unwrap_or_else(|e| {
                tracing::debug!(theme = %selector, error = %e, "failed to load theme, using default");
                Theme::default()
            })
        })
    })
}
