use tracing::debug;

/// Scroll-animation engine that must re-scan the page after a route change.
///
/// Both calls are fire-and-forget.
pub trait AnimationRefresher {
    /// Called once when the shell mounts
    fn init(&mut self);

    /// Called after every route change
    fn refresh(&mut self);
}

/// Refresher that only records the calls in the log
#[derive(Debug, Clone, Default)]
pub struct TracingAnimations {
    initialized: bool,
    refreshes: u64,
}

impl TracingAnimations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn refresh_count(&self) -> u64 {
        self.refreshes
    }
}

impl AnimationRefresher for TracingAnimations {
    fn init(&mut self) {
        self.initialized = true;
        debug!("Animations initialized");
    }

    fn refresh(&mut self) {
        self.refreshes += 1;
        debug!(refreshes = self.refreshes, "Animations refreshed");
    }
}
