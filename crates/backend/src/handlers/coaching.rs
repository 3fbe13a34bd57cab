use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

use crate::shared::config;
use crate::shared::llm::coaching;
use crate::shared::sales::{aggregator, merger};
use crate::shared::state;

use super::sales::PeriodQuery;
use super::select_periods;

/// POST /api/coaching/:agent_id
///
/// Always answers 200 with a directive: LLM errors degrade to the
/// fixed fallback text inside the generator.
pub async fn get_directive(
    Path(agent_id): Path<String>,
    Query(q): Query<PeriodQuery>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let cfg = match config::load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Config load failed: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let history = state::history_snapshot();
    let keys = select_periods(q.periods.as_deref(), &history);
    let (agents, rows) = merger::merge_periods(&keys, &history);

    let agent = match agents.get(&agent_id) {
        Some(agent) => agent,
        None => return Err(StatusCode::NOT_FOUND),
    };

    let overrides = state::overrides_snapshot();
    let sales = aggregator::aggregate(&rows, &agent_id, &overrides);
    let directive = coaching::generate_directive(&cfg.llm, agent, &sales).await;

    Ok(Json(json!({
        "agentId": agent_id,
        "directive": directive,
    })))
}
