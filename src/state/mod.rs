use std::sync::Arc;

use crate::{config::AppConfig, dao::score_store::ScoreStore};

pub type SharedState = Arc<AppState>;

/// Central application state handed to every request handler.
///
/// Built once during bootstrap, after the score table has been ensured, and
/// kept for the lifetime of the process.
pub struct AppState {
    score_store: Arc<dyn ScoreStore>,
    config: AppConfig,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(score_store: Arc<dyn ScoreStore>, config: AppConfig) -> SharedState {
        Arc::new(Self {
            score_store,
            config,
        })
    }

    /// Store holding the karaoke score records.
    pub fn score_store(&self) -> &Arc<dyn ScoreStore> {
        &self.score_store
    }

    /// Runtime configuration the process was started with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
