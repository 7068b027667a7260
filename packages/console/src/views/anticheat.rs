use anyhow::Result;
use console::style;

use client::AdminClient;
use client::models::AlertRecord;

use crate::views::ViewOptions;

pub async fn render(client: &AdminClient, opts: &ViewOptions) -> Result<()> {
    if let Some((id, ok)) = &opts.mark {
        match client.set_alert_status(id, *ok).await {
            Ok(true) => println!("Alert {} marked {}.", style(id).cyan(), status_label(*ok)),
            Ok(false) => println!("{}", style(format!("Backend refused to mark alert {id}.")).yellow()),
            Err(e) => println!("{} {e}", style("Could not mark alert:").red()),
        }
        println!();
    }

    // The backend refreshes its alert cache before we read it back.
    if let Err(e) = client.refresh_alerts().await {
        println!("{} {e}", style("Alert refresh failed:").yellow());
    }

    match client.alert_list().await {
        Ok(alerts) if alerts.is_empty() => println!("No alerts."),
        Ok(alerts) => {
            println!("{}", style("Anti-cheat alerts").bold());
            for alert in &alerts {
                print_alert(alert);
            }
        }
        Err(e) => println!("{} {e}", style("Could not fetch alerts:").red()),
    }

    Ok(())
}

fn print_alert(alert: &AlertRecord) {
    let status = status_label(alert.is_ok);
    if alert.extra.is_empty() {
        println!("  {}  {status}", alert.id);
    } else {
        let detail = serde_json::to_string(&alert.extra).unwrap_or_default();
        println!("  {}  {status}  {detail}", alert.id);
    }
}

fn status_label(ok: bool) -> console::StyledObject<&'static str> {
    if ok {
        style("reviewed").green()
    } else {
        style("flagged").red()
    }
}
