use crate::config::Config;

/// Shared application state. Submissions are independent of one another, so
/// this holds configuration only; everything else lives for one request.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}
