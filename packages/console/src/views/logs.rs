use anyhow::Result;
use console::style;

use client::AdminClient;

pub async fn render(client: &AdminClient) -> Result<()> {
    match client.all_logs().await {
        Ok(logs) if logs.is_empty() => println!("No log entries."),
        Ok(logs) => {
            println!("{}", style("Log history").bold());
            for entry in &logs {
                println!("  {entry}");
            }
        }
        Err(e) => println!("{} {e}", style("Could not fetch logs:").red()),
    }
    Ok(())
}
