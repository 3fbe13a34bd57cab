use std::collections::HashMap;

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use contracts::domain::a003_commission::{DealType, OverrideKey, RateEntry};

use crate::shared::commission::{rate_table, resolver};
use crate::shared::state;

#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub class: String,
    #[serde(default)]
    pub name: String,
}

/// GET /api/commission/resolve
pub async fn resolve(Query(q): Query<ResolveQuery>) -> Json<serde_json::Value> {
    let overrides = state::overrides_snapshot();
    let rate = resolver::resolve(&q.code, &q.class, &q.name, &overrides);
    Json(json!({ "rate": rate }))
}

/// GET /api/commission/rates
pub async fn list_rates() -> Json<Vec<RateEntry>> {
    Json(rate_table::rate_entries())
}

/// GET /api/commission/overrides
pub async fn list_overrides() -> Json<HashMap<String, f64>> {
    Json(state::overrides_snapshot())
}

#[derive(Debug, Deserialize)]
pub struct OverrideRequest {
    pub identifier: String,
    pub deal_type: Option<String>,
    pub rate: f64,
}

/// PUT /api/commission/overrides
pub async fn upsert_override(
    Json(req): Json<OverrideRequest>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let identifier = req.identifier.trim().to_string();
    if identifier.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    if !req.rate.is_finite() || req.rate < 0.0 {
        return Err(StatusCode::BAD_REQUEST);
    }

    let key = match req.deal_type.as_deref().map(str::trim) {
        Some(dt) if !dt.is_empty() => {
            let deal_type = match dt.to_uppercase().as_str() {
                "BNT" => DealType::Bnt,
                "VVL" => DealType::Vvl,
                _ => return Err(StatusCode::BAD_REQUEST),
            };
            OverrideKey::CodeAndType {
                code: identifier,
                deal_type,
            }
            .render()
        }
        _ => OverrideKey::CodeOnly { code: identifier }.render(),
    };

    match state::set_override(key.clone(), req.rate).await {
        Ok(()) => Ok(Json(json!({"key": key, "rate": req.rate}))),
        Err(e) => {
            tracing::error!("Failed to save override {}: {}", key, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// DELETE /api/commission/overrides/:key
pub async fn delete_override(Path(key): Path<String>) -> Result<(), StatusCode> {
    let key = key.trim().to_uppercase();
    match state::remove_override(&key).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to delete override {}: {}", key, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
