use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

async fn table_exists(conn: &DatabaseConnection, name: &str) -> anyhow::Result<bool> {
    let sql = format!(
        "SELECT name FROM sqlite_master WHERE type='table' AND name='{}';",
        name
    );
    let rows = conn
        .query_all(Statement::from_string(DatabaseBackend::Sqlite, sql))
        .await?;
    Ok(!rows.is_empty())
}

async fn column_exists(
    conn: &DatabaseConnection,
    table: &str,
    column: &str,
) -> anyhow::Result<bool> {
    let pragma = format!("PRAGMA table_info('{}');", table);
    let cols = conn
        .query_all(Statement::from_string(DatabaseBackend::Sqlite, pragma))
        .await?;
    for row in cols {
        let name: String = row.try_get("", "name").unwrap_or_default();
        if name == column {
            return Ok(true);
        }
    }
    Ok(false)
}

pub async fn initialize_database(db_path: Option<&str>) -> anyhow::Result<()> {
    // Safe to call more than once; the first connection wins.
    if DB_CONN.get().is_some() {
        return Ok(());
    }

    let db_file = db_path.unwrap_or("target/db/kyctrust.db");
    if let Some(parent) = std::path::Path::new(db_file).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(db_file).is_absolute() {
        std::path::PathBuf::from(db_file)
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    let conn = Database::connect(&db_url).await?;

    // Minimal schema bootstrap: create any table that is missing.
    if !table_exists(&conn, "services").await? {
        tracing::info!("Creating services table");
        let create_services_sql = r#"
            CREATE TABLE services (
                id TEXT PRIMARY KEY NOT NULL,
                name TEXT NOT NULL,
                price TEXT NOT NULL,
                order_index INTEGER NOT NULL DEFAULT 0,
                active INTEGER NOT NULL DEFAULT 1,
                created_at TEXT,
                updated_at TEXT
            );
        "#;
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            create_services_sql.to_string(),
        ))
        .await?;
    }

    if !table_exists(&conn, "payment_methods").await? {
        tracing::info!("Creating payment_methods table");
        let create_payment_methods_sql = r#"
            CREATE TABLE payment_methods (
                id TEXT PRIMARY KEY NOT NULL,
                name TEXT NOT NULL,
                details TEXT NOT NULL,
                active INTEGER NOT NULL DEFAULT 1,
                created_at TEXT,
                updated_at TEXT
            );
        "#;
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            create_payment_methods_sql.to_string(),
        ))
        .await?;
    }

    if !table_exists(&conn, "orders").await? {
        tracing::info!("Creating orders table");
        let create_orders_sql = r#"
            CREATE TABLE orders (
                id TEXT PRIMARY KEY NOT NULL,
                customer_name TEXT NOT NULL,
                service_name TEXT NOT NULL,
                notes TEXT,
                status TEXT NOT NULL DEFAULT 'pending',
                archived INTEGER NOT NULL DEFAULT 0,
                created_at TEXT,
                updated_at TEXT
            );
        "#;
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            create_orders_sql.to_string(),
        ))
        .await?;
    } else if !column_exists(&conn, "orders", "status").await? {
        // Early deployments shipped without the status column.
        tracing::info!("Adding status column to orders");
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            "ALTER TABLE orders ADD COLUMN status TEXT NOT NULL DEFAULT 'pending';".to_string(),
        ))
        .await?;
    }

    if !table_exists(&conn, "site_settings").await? {
        tracing::info!("Creating site_settings table");
        let create_site_settings_sql = r#"
            CREATE TABLE site_settings (
                id TEXT PRIMARY KEY NOT NULL,
                title TEXT NOT NULL,
                description TEXT NOT NULL,
                order_notice TEXT NOT NULL,
                created_at TEXT,
                updated_at TEXT
            );
        "#;
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            create_site_settings_sql.to_string(),
        ))
        .await?;
    }

    if !table_exists(&conn, "sys_settings").await? {
        tracing::info!("Creating sys_settings table");
        let create_sys_settings_sql = r#"
            CREATE TABLE sys_settings (
                key TEXT PRIMARY KEY NOT NULL,
                value TEXT NOT NULL
            );
        "#;
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            create_sys_settings_sql.to_string(),
        ))
        .await?;
    }

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}
