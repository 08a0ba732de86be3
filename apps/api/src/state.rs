use std::sync::Arc;

use crate::config::Config;
use crate::summary::generator::SummaryWriter;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable summary writer. Gemini-backed when `GEMINI_API_KEY` is set.
    pub summary_writer: Arc<dyn SummaryWriter>,
}
