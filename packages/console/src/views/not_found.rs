use std::process::ExitCode;

use console::style;

use crate::router::ROUTES;

/// Route-miss fallback: list the registered pages and exit non-zero.
pub fn render() -> ExitCode {
    eprintln!("{}", style("No such page.").red());
    eprintln!("Registered pages:");
    for route in ROUTES {
        eprintln!("  {:<14} {}", route.path, route.name);
    }
    ExitCode::FAILURE
}
