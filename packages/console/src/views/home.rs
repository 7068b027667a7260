use std::fs;

use anyhow::{Context, Result};
use console::style;
use dialoguer::Confirm;
use serde_json::Value;

use client::AdminClient;

use crate::views::ViewOptions;

pub async fn render(client: &AdminClient, opts: &ViewOptions) -> Result<()> {
    if let Some(path) = &opts.init_file {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading init config {}", path.display()))?;
        let config: Value =
            serde_json::from_str(&raw).context("init config is not valid JSON")?;

        match client.init(&config).await {
            Ok(()) => println!("{}", style("Service initialized.").green()),
            Err(e) => println!("{} {e}", style("Initialization failed:").red()),
        }
    }

    if opts.restore && confirmed("Restore the backend to its initial state?", opts)? {
        match client.restore().await {
            Ok(()) => println!("{}", style("Service restored.").green()),
            Err(e) => println!("{} {e}", style("Restore failed:").red()),
        }
    }

    if opts.reset_database && confirmed("Reset the backend database? All scores are dropped.", opts)? {
        match client.reset_database().await {
            Ok(()) => println!("{}", style("Database reset.").green()),
            Err(e) => println!("{} {e}", style("Database reset failed:").red()),
        }
    }

    match client.is_configured().await {
        Ok(true) => println!("Backend is {}.", style("configured").green()),
        Ok(false) => println!("Backend is {}.", style("not configured").yellow()),
        Err(e) => println!("{} {e}", style("Could not reach backend:").red()),
    }

    Ok(())
}

fn confirmed(prompt: &str, opts: &ViewOptions) -> Result<bool> {
    if opts.yes {
        return Ok(true);
    }
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}
