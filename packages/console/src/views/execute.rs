use anyhow::Result;
use console::style;

use client::AdminClient;

use crate::views::ViewOptions;

pub async fn render(client: &AdminClient, opts: &ViewOptions) -> Result<()> {
    match client.submitted_students().await {
        Ok(students) if students.is_empty() => println!("No submissions yet."),
        Ok(students) => {
            println!("{}", style("Submitted students").bold());
            for id in &students {
                println!("  {id}");
            }
        }
        Err(e) => println!("{} {e}", style("Could not list submissions:").red()),
    }

    if let Some(student) = &opts.student {
        println!();
        println!("Judging {}...", style(student).cyan());
        match client.judge_code(student).await {
            Ok(outcome) => println!("{}", serde_json::to_string_pretty(&outcome)?),
            Err(e) => println!("{} {e}", style("Judging failed:").red()),
        }
    }

    Ok(())
}
