//! Static route table mapping paths to named views.
//!
//! No guards, no async resolution, no nesting. An unmatched path resolves to
//! [`View::NotFound`], which renders the list of registered paths and exits
//! non-zero; the router never redirects.

use crate::views::View;

/// One registered route: its path, public name, and the view it renders.
#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
}

pub const ROUTES: &[Route] = &[
    Route {
        path: "/",
        name: "Home",
        view: View::Home,
    },
    Route {
        path: "/execute",
        name: "ExecuteCode",
        view: View::ExecuteCode,
    },
    Route {
        path: "/scoreboard",
        name: "ScoreBoard",
        view: View::ScoreBoard,
    },
    Route {
        path: "/scoretable",
        name: "ScoreTable",
        view: View::ScoreTable,
    },
    Route {
        path: "/anticheat",
        name: "Anticheat",
        view: View::Anticheat,
    },
    Route {
        path: "/logs",
        name: "LogViewer",
        view: View::LogViewer,
    },
];

/// Resolve a normalized path to its view.
pub fn resolve(path: &str) -> View {
    ROUTES
        .iter()
        .find(|r| r.path == path)
        .map(|r| r.view)
        .unwrap_or(View::NotFound)
}
