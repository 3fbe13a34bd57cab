//! In-memory application state.
//!
//! The override map and the month-snapshot history are loaded
//! wholesale at startup and kept behind `RwLock`s: resolution and
//! aggregation only ever read, mutation happens between aggregation
//! calls (override edits, uploads) under the exclusive write lock.
//! Locks are never held across await points; persistence runs after
//! the in-memory update.

use std::collections::HashMap;
use std::sync::RwLock;

use anyhow::Result;
use once_cell::sync::OnceCell;

use contracts::shared::period::MonthSnapshot;

use super::data::store;

pub struct AppState {
    pub history: RwLock<HashMap<String, MonthSnapshot>>,
    pub overrides: RwLock<HashMap<String, f64>>,
}

static STATE: OnceCell<AppState> = OnceCell::new();

/// Load persisted overrides and snapshots into memory. Called once at
/// startup, after the database is ready.
pub async fn initialize_state() -> Result<()> {
    let overrides = store::load_overrides().await?;
    let history = store::load_snapshots().await?;
    tracing::info!(
        "State loaded: {} overrides, {} month snapshots",
        overrides.len(),
        history.len()
    );
    STATE
        .set(AppState {
            history: RwLock::new(history),
            overrides: RwLock::new(overrides),
        })
        .map_err(|_| anyhow::anyhow!("State already initialized"))?;
    Ok(())
}

pub fn get_state() -> &'static AppState {
    STATE.get().expect("State is not initialized")
}

/// Snapshot of the override map for a resolution/aggregation pass.
pub fn overrides_snapshot() -> HashMap<String, f64> {
    get_state()
        .overrides
        .read()
        .expect("overrides lock poisoned")
        .clone()
}

/// Upsert one override in memory, then write through.
pub async fn set_override(key: String, rate: f64) -> Result<()> {
    {
        let mut overrides = get_state()
            .overrides
            .write()
            .expect("overrides lock poisoned");
        overrides.insert(key.clone(), rate);
    }
    store::save_override(&key, rate).await
}

/// Remove one override. Returns false when the key was absent.
pub async fn remove_override(key: &str) -> Result<bool> {
    let existed = {
        let mut overrides = get_state()
            .overrides
            .write()
            .expect("overrides lock poisoned");
        overrides.remove(key).is_some()
    };
    store::delete_override(key).await?;
    Ok(existed)
}

/// Merge new data into a month snapshot (created on first reference)
/// and write the result through.
pub async fn update_snapshot<F>(period: &str, label: &str, apply: F) -> Result<()>
where
    F: FnOnce(&mut MonthSnapshot),
{
    let updated = {
        let mut history = get_state().history.write().expect("history lock poisoned");
        let snap = history
            .entry(period.to_string())
            .or_insert_with(|| MonthSnapshot::new(period, label));
        apply(snap);
        snap.updated_at = chrono::Utc::now();
        snap.clone()
    };
    store::save_snapshot(&updated).await
}

/// Clone of the full history map for read paths.
pub fn history_snapshot() -> HashMap<String, MonthSnapshot> {
    get_state()
        .history
        .read()
        .expect("history lock poisoned")
        .clone()
}
