//! Persistence for overrides and month snapshots.
//!
//! Both structures are small and change rarely, so the lifecycle is
//! load-wholesale-at-startup, write-through-on-change. Snapshots are
//! stored as JSON blobs, one row per month.

use std::collections::HashMap;

use anyhow::Result;
use sea_orm::{ConnectionTrait, FromQueryResult, Statement};

use contracts::shared::period::MonthSnapshot;

use super::db::get_connection;

#[derive(Debug, FromQueryResult)]
struct OverrideRow {
    key: String,
    rate: f64,
}

#[derive(Debug, FromQueryResult)]
struct SnapshotRow {
    kpi_json: String,
    sales_json: String,
    id: String,
    label: String,
}

/// Read the whole override map.
pub async fn load_overrides() -> Result<HashMap<String, f64>> {
    let db = get_connection();
    let stmt = Statement::from_string(
        sea_orm::DatabaseBackend::Sqlite,
        "SELECT key, rate FROM sys_commission_overrides".to_string(),
    );
    let rows = OverrideRow::find_by_statement(stmt).all(db).await?;
    Ok(rows.into_iter().map(|r| (r.key, r.rate)).collect())
}

/// Insert or replace a single override. Last write wins.
pub async fn save_override(key: &str, rate: f64) -> Result<()> {
    let db = get_connection();
    let now = chrono::Utc::now().to_rfc3339();
    let sql = r#"
        INSERT INTO sys_commission_overrides (key, rate, updated_at)
        VALUES (?, ?, ?)
        ON CONFLICT(key) DO UPDATE SET rate = excluded.rate, updated_at = excluded.updated_at
    "#;
    let stmt = Statement::from_sql_and_values(
        sea_orm::DatabaseBackend::Sqlite,
        sql,
        vec![key.into(), rate.into(), now.into()],
    );
    db.execute(stmt).await?;
    Ok(())
}

pub async fn delete_override(key: &str) -> Result<bool> {
    let db = get_connection();
    let stmt = Statement::from_sql_and_values(
        sea_orm::DatabaseBackend::Sqlite,
        "DELETE FROM sys_commission_overrides WHERE key = ?",
        vec![key.into()],
    );
    let result = db.execute(stmt).await?;
    Ok(result.rows_affected() > 0)
}

/// Read every stored month snapshot, keyed by period id.
pub async fn load_snapshots() -> Result<HashMap<String, MonthSnapshot>> {
    let db = get_connection();
    let stmt = Statement::from_string(
        sea_orm::DatabaseBackend::Sqlite,
        "SELECT id, label, kpi_json, sales_json FROM p100_month_snapshots".to_string(),
    );
    let rows = SnapshotRow::find_by_statement(stmt).all(db).await?;

    let mut snapshots = HashMap::with_capacity(rows.len());
    for row in rows {
        let mut snap = MonthSnapshot::new(row.id.clone(), row.label);
        snap.kpi_data = serde_json::from_str(&row.kpi_json)?;
        snap.sales_data = serde_json::from_str(&row.sales_json)?;
        snapshots.insert(row.id, snap);
    }
    Ok(snapshots)
}

/// Write one snapshot wholesale.
pub async fn save_snapshot(snapshot: &MonthSnapshot) -> Result<()> {
    let db = get_connection();
    let now = chrono::Utc::now().to_rfc3339();
    let kpi_json = serde_json::to_string(&snapshot.kpi_data)?;
    let sales_json = serde_json::to_string(&snapshot.sales_data)?;

    let sql = r#"
        INSERT INTO p100_month_snapshots (id, label, kpi_json, sales_json, updated_at)
        VALUES (?, ?, ?, ?, ?)
        ON CONFLICT(id) DO UPDATE SET
            label = excluded.label,
            kpi_json = excluded.kpi_json,
            sales_json = excluded.sales_json,
            updated_at = excluded.updated_at
    "#;
    let stmt = Statement::from_sql_and_values(
        sea_orm::DatabaseBackend::Sqlite,
        sql,
        vec![
            snapshot.id.clone().into(),
            snapshot.label.clone().into(),
            kpi_json.into(),
            sales_json.into(),
            now.into(),
        ],
    );
    db.execute(stmt).await?;
    Ok(())
}
