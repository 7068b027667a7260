use anyhow::Result;
use console::style;
use serde_json::Value;

use client::AdminClient;

pub async fn render(client: &AdminClient) -> Result<()> {
    match client.all_student_scores().await {
        Ok(scores) => match tabulate(&scores) {
            Some(table) => print!("{table}"),
            // Not a uniform list of objects; fall back to raw JSON.
            None => println!("{}", serde_json::to_string_pretty(&scores)?),
        },
        Err(e) => println!("{} {e}", style("Could not fetch scores:").red()),
    }
    Ok(())
}

/// Render an array of flat objects as an aligned text table. Columns come
/// from the first row; missing cells render empty.
fn tabulate(scores: &Value) -> Option<String> {
    let rows = scores.as_array()?;
    let first = rows.first()?.as_object()?;
    let columns: Vec<&String> = first.keys().collect();

    let mut widths: Vec<usize> = columns.iter().map(|c| c.len()).collect();
    let mut cells: Vec<Vec<String>> = Vec::with_capacity(rows.len());
    for row in rows {
        let obj = row.as_object()?;
        let mut line = Vec::with_capacity(columns.len());
        for (i, col) in columns.iter().enumerate() {
            let cell = match obj.get(*col) {
                None | Some(Value::Null) => String::new(),
                Some(Value::String(s)) => s.clone(),
                Some(v) => v.to_string(),
            };
            widths[i] = widths[i].max(cell.len());
            line.push(cell);
        }
        cells.push(line);
    }

    let mut out = String::new();
    for (i, col) in columns.iter().enumerate() {
        out.push_str(&format!("{:<w$}  ", col, w = widths[i]));
    }
    out.push('\n');
    for line in &cells {
        for (i, cell) in line.iter().enumerate() {
            out.push_str(&format!("{:<w$}  ", cell, w = widths[i]));
        }
        out.push('\n');
    }
    Some(out)
}
