use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use tracing::Level;

use client::{AdminClient, ClientConfig};
use judgeboard_console::history::History;
use judgeboard_console::router;
use judgeboard_console::views::{self, ViewOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum HistoryKind {
    Memory,
    Hash,
}

/// Terminal console for the judging backend's admin surface.
#[derive(Debug, Parser)]
#[command(name = "judgeboard", version, about)]
struct Cli {
    /// Page to open, e.g. `/scoreboard` (or `#/scoreboard` with hash history).
    location: String,

    /// History strategy used to interpret locations.
    #[arg(long, value_enum, default_value_t = HistoryKind::Memory)]
    history: HistoryKind,

    /// Override the configured backend base URL.
    #[arg(long, env = "JUDGEBOARD__BASE_URL")]
    base_url: Option<String>,

    /// Home: JSON file with the backend bootstrap configuration.
    #[arg(long, value_name = "FILE")]
    init: Option<PathBuf>,

    /// Home: restore the backend to its initial state.
    #[arg(long)]
    restore: bool,

    /// Home: reset the backend database.
    #[arg(long)]
    reset_database: bool,

    /// ExecuteCode: trigger judging for this student.
    #[arg(long, value_name = "ID")]
    student: Option<String>,

    /// Anticheat: mark this alert; requires --ok or --not-ok.
    #[arg(long, value_name = "ID")]
    mark: Option<String>,

    /// Mark the alert as reviewed.
    #[arg(long, conflicts_with = "not_ok")]
    ok: bool,

    /// Mark the alert as still flagged.
    #[arg(long)]
    not_ok: bool,

    /// Skip confirmation prompts.
    #[arg(long, short = 'y')]
    yes: bool,
}

impl Cli {
    fn view_options(&self) -> Result<ViewOptions> {
        let mark = match &self.mark {
            Some(id) if self.ok || self.not_ok => Some((id.clone(), self.ok)),
            Some(_) => bail!("--mark requires --ok or --not-ok"),
            None => None,
        };

        Ok(ViewOptions {
            init_file: self.init.clone(),
            restore: self.restore,
            reset_database: self.reset_database,
            student: self.student.clone(),
            mark,
            yes: self.yes,
        })
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let cli = Cli::parse();
    let opts = cli.view_options()?;

    let mut config = ClientConfig::load()?;
    if let Some(url) = &cli.base_url {
        config.base_url = url.clone();
    }
    let client = AdminClient::new(&config);

    let mut history = match cli.history {
        HistoryKind::Memory => History::memory(),
        HistoryKind::Hash => History::hash(),
    };
    history.push(&cli.location);

    if let Some(location) = history.location() {
        tracing::debug!("Opening {location}");
    }

    let view = router::resolve(history.current());
    views::render(view, &client, &opts).await
}
