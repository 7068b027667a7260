use anyhow::Result;
use console::style;

use client::AdminClient;

pub async fn render(client: &AdminClient) -> Result<()> {
    match client.all_student_scores().await {
        Ok(scores) => {
            println!("{}", style("Scores").bold());
            println!("{}", serde_json::to_string_pretty(&scores)?);
        }
        Err(e) => println!("{} {e}", style("Could not fetch scores:").red()),
    }
    Ok(())
}
