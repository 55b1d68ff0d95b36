use std::sync::Arc;

use showcase_db::Database;

use crate::assets::AssetProvider;
use crate::auth::session::SessionManager;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Lazily connected document store.
    pub db: Arc<Database>,
    pub config: Arc<ServerConfig>,
    /// Issues and checks session cookies.
    pub sessions: Arc<SessionManager>,
    /// Hosted asset provider (image deletes).
    pub assets: Arc<dyn AssetProvider>,
}
