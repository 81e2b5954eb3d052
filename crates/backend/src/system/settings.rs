//! Key/value store for system-level settings (JWT secret, admin credential).

use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

use crate::shared::data::db::get_connection;

pub async fn get(key: &str) -> anyhow::Result<Option<String>> {
    let stmt = Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "SELECT value FROM sys_settings WHERE key = ?",
        [key.into()],
    );
    let row = get_connection().query_one(stmt).await?;
    match row {
        Some(row) => Ok(Some(row.try_get("", "value")?)),
        None => Ok(None),
    }
}

pub async fn set(key: &str, value: &str) -> anyhow::Result<()> {
    let stmt = Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "INSERT INTO sys_settings (key, value) VALUES (?, ?) \
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        [key.into(), value.into()],
    );
    get_connection().execute(stmt).await?;
    Ok(())
}
