use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

pub async fn initialize_database(db_path: Option<&str>) -> anyhow::Result<()> {
    let db_file = db_path.unwrap_or("target/db/app.db");
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

    // Minimal schema bootstrap. Overrides are one row per flat key;
    // month snapshots are stored wholesale as JSON blobs.
    let ddl = [
        r#"
        CREATE TABLE IF NOT EXISTS sys_commission_overrides (
            key TEXT PRIMARY KEY NOT NULL,
            rate REAL NOT NULL,
            updated_at TEXT
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS p100_month_snapshots (
            id TEXT PRIMARY KEY NOT NULL,
            label TEXT NOT NULL,
            kpi_json TEXT NOT NULL,
            sales_json TEXT NOT NULL,
            updated_at TEXT
        );
        "#,
    ];
    for stmt in ddl {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            stmt.to_string(),
        ))
        .await?;
    }

    tracing::info!("Database ready at {}", db_file);
    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Database already initialized"))?;
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN.get().expect("Database is not initialized")
}
