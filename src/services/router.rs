use tracing::debug;

/// Read the current path and navigate elsewhere
pub trait Router {
    fn current_path(&self) -> &str;

    fn navigate(&mut self, path: &str);
}

/// Router backed by an in-memory history stack
#[derive(Debug, Clone)]
pub struct HistoryRouter {
    history: Vec<String>,
}

impl HistoryRouter {
    pub fn new(initial_path: &str) -> Self {
        Self {
            history: vec![initial_path.to_string()],
        }
    }

    /// Every path visited, oldest first
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl Router for HistoryRouter {
    fn current_path(&self) -> &str {
        self.history.last().map(String::as_str).unwrap_or("/")
    }

    fn navigate(&mut self, path: &str) {
        debug!(from = %self.current_path(), to = %path, "Navigating");
        self.history.push(path.to_string());
    }
}
