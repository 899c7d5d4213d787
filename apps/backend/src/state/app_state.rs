use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::services::games::GameService;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Database connection shared across workers
    pub db: DatabaseConnection,
    /// Game command service with its injected coin
    pub games: Arc<GameService>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, games: GameService) -> Self {
        Self {
            db,
            games: Arc::new(games),
        }
    }
}
