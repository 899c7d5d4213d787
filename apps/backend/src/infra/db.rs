use sea_orm::{Database, DatabaseConnection};

use crate::config::db::db_url;
use crate::error::AppError;

/// Connect to the database configured in the environment.
/// This function does NOT run any migrations.
pub async fn connect_db() -> Result<DatabaseConnection, AppError> {
    let database_url = db_url()?;
    let conn = Database::connect(&database_url).await?;
    Ok(conn)
}
