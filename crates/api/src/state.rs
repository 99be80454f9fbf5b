use std::sync::Arc;
use wheel_lab_domain::ParameterBounds;

/// Application state shared across handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    bounds: Arc<ParameterBounds>,
}

impl AppState {
    /// Creates state with the given bounds.
    #[must_use]
    pub fn new(bounds: ParameterBounds) -> Self {
        Self {
            bounds: Arc::new(bounds),
        }
    }

    /// Creates state with the default bounds capped at `max_paths`.
    #[must_use]
    pub fn with_max_paths(max_paths: usize) -> Self {
        Self::new(ParameterBounds::default().with_max_paths(max_paths))
    }

    #[must_use]
    pub fn bounds(&self) -> &ParameterBounds {
        &self.bounds
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ParameterBounds::default())
    }
}
