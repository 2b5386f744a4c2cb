pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub service_name: Arc<str>,
}

impl AppState {
    pub fn new(service_name: impl Into<Arc<str>>) -> Self {
        Self {
            service_name: service_name.into(),
        }
    }
}
