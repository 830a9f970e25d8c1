//! Shared application state for request handlers.

use std::sync::Arc;

use super::config::LimitsConfig;
use crate::Classifier;

pub struct AppState {
    pub classifier: Classifier,
    pub limits: LimitsConfig,
}

pub type SharedState = Arc<AppState>;
