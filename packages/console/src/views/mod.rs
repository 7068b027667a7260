//! Terminal renderings of the operator-facing pages.
//!
//! Each view fetches through [`AdminClient`] on entry and prints its result;
//! failures render distinctly from empty results instead of being masked.

mod anticheat;
mod execute;
mod home;
mod logs;
mod not_found;
mod scoreboard;
mod scoretable;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use client::AdminClient;

/// The six operator-facing pages plus the route-miss fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    ExecuteCode,
    ScoreBoard,
    ScoreTable,
    Anticheat,
    LogViewer,
    NotFound,
}

/// Per-view options collected from the command line.
#[derive(Debug, Default)]
pub struct ViewOptions {
    /// Home: JSON file with the backend bootstrap configuration.
    pub init_file: Option<PathBuf>,
    /// Home: restore the backend to its initial state.
    pub restore: bool,
    /// Home: reset the backend database.
    pub reset_database: bool,
    /// ExecuteCode: student to judge.
    pub student: Option<String>,
    /// Anticheat: alert to mark, with the status to set.
    pub mark: Option<(String, bool)>,
    /// Skip confirmation prompts.
    pub yes: bool,
}

pub async fn render(view: View, client: &AdminClient, opts: &ViewOptions) -> Result<ExitCode> {
    match view {
        View::Home => home::render(client, opts).await?,
        View::ExecuteCode => execute::render(client, opts).await?,
        View::ScoreBoard => scoreboard::render(client).await?,
        View::ScoreTable => scoretable::render(client).await?,
        View::Anticheat => anticheat::render(client, opts).await?,
        View::LogViewer => logs::render(client).await?,
        View::NotFound => return Ok(not_found::render()),
    }
    Ok(ExitCode::SUCCESS)
}
