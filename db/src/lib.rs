pub mod grade;
pub mod models;
pub mod test_utils;


use sea_orm::{Database, DatabaseConnection, DbErr};
use std::path::Path;
use util::config;

/// Builds a connection URL from `DATABASE_PATH`. Anything that already looks
/// like a DSN is used as-is; otherwise it is treated as a SQLite file path
/// that is created on first use.
pub fn database_url(path_or_url: &str) -> String {
    if path_or_url.starts_with("sqlite:") {
        return path_or_url.to_owned();
    }
    if let Some(parent) = Path::new(path_or_url).parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            tracing::warn!(
                path = %parent.display(),
                error = %e,
                "Could not create database directory"
            );
        }
    }
    format!("sqlite://{path_or_url}?mode=rwc")
}

pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    let url = database_url(&config::database_path());
    tracing::debug!(%url, "Connecting to database");
    Database::connect(&url).await
}
