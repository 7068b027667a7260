//! Navigation history strategies.
//!
//! `Memory` keeps a plain stack of visited paths with no user-visible
//! location encoding, the mode used for embedded and test deployments.
//! `Hash` carries the current path in a URL fragment (`#/scoreboard`), the
//! mode used on static hosting where the server cannot rewrite paths. One
//! strategy is active per run.

/// In-memory navigation stack: visited entries plus a cursor.
#[derive(Debug)]
pub struct MemoryHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self {
            entries: vec!["/".to_string()],
            cursor: 0,
        }
    }

    /// Visit a new path, discarding any forward entries.
    pub fn push(&mut self, path: &str) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(path.to_string());
        self.cursor = self.entries.len() - 1;
    }

    /// Step back one entry; stays put at the oldest entry.
    pub fn back(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Step forward one entry; stays put at the newest entry.
    pub fn forward(&mut self) {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
        }
    }

    pub fn current(&self) -> &str {
        &self.entries[self.cursor]
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

/// Fragment-encoded location: `#/scoreboard` style.
#[derive(Debug)]
pub struct HashHistory {
    current: String,
}

impl HashHistory {
    pub fn new() -> Self {
        Self {
            current: "/".to_string(),
        }
    }

    /// Strip the fragment marker from an incoming location. A bare `#` (or
    /// an empty string) is the root; a missing leading slash is supplied.
    pub fn normalize(location: &str) -> String {
        let path = location.strip_prefix('#').unwrap_or(location);
        if path.is_empty() {
            "/".to_string()
        } else if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        }
    }

    pub fn push(&mut self, location: &str) {
        self.current = Self::normalize(location);
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    /// The current path in its user-visible fragment form.
    pub fn location(&self) -> String {
        format!("#{}", self.current)
    }
}

impl Default for HashHistory {
    fn default() -> Self {
        Self::new()
    }
}

/// The strategy active for this run.
#[derive(Debug)]
pub enum History {
    Memory(MemoryHistory),
    Hash(HashHistory),
}

impl History {
    pub fn memory() -> Self {
        History::Memory(MemoryHistory::new())
    }

    pub fn hash() -> Self {
        History::Hash(HashHistory::new())
    }

    pub fn push(&mut self, location: &str) {
        match self {
            History::Memory(h) => h.push(location),
            History::Hash(h) => h.push(location),
        }
    }

    /// The normalized path of the current entry, ready for route resolution.
    pub fn current(&self) -> &str {
        match self {
            History::Memory(h) => h.current(),
            History::Hash(h) => h.current(),
        }
    }

    /// The user-visible location, if the strategy exposes one. Memory
    /// history exposes nothing.
    pub fn location(&self) -> Option<String> {
        match self {
            History::Memory(_) => None,
            History::Hash(h) => Some(h.location()),
        }
    }
}
