use std::sync::Arc;

use keel_db::ProjectStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Project persistence (PostgreSQL or in-memory).
    pub projects: Arc<dyn ProjectStore>,
    /// Server configuration (accessed by middleware and extractors).
    pub config: Arc<ServerConfig>,
}
