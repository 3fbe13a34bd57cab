use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::Json;

use contracts::domain::a001_agent_kpi::KpiAgent;
use contracts::shared::wca::GateReport;

use crate::shared::sales::merger;
use crate::shared::state;
use crate::shared::wca::gates;

use super::sales::PeriodQuery;
use super::select_periods;

/// GET /api/wca
///
/// Gate reports for every agent of the latest stored period, sorted
/// by PIX descending.
pub async fn list_all() -> Json<Vec<GateReport>> {
    let history = state::history_snapshot();
    let keys: Vec<String> = history.keys().max().cloned().into_iter().collect();
    let (agents, _) = merger::merge_periods(&keys, &history);

    let mut reports: Vec<GateReport> = agents.values().map(gates::classify).collect();
    reports.sort_by(|a, b| {
        b.pix
            .partial_cmp(&a.pix)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.agent_id.cmp(&b.agent_id))
    });
    Json(reports)
}

/// GET /api/wca/:agent_id
pub async fn get_by_agent(
    Path(agent_id): Path<String>,
    Query(q): Query<PeriodQuery>,
) -> Result<Json<GateReport>, StatusCode> {
    let history = state::history_snapshot();
    let keys = select_periods(q.periods.as_deref(), &history);
    let (agents, _) = merger::merge_periods(&keys, &history);

    match agents.get(&agent_id) {
        Some(agent) => Ok(Json(gates::classify(agent))),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// GET /api/kpi/merged
pub async fn merged_kpi(Query(q): Query<PeriodQuery>) -> Json<Vec<KpiAgent>> {
    let history = state::history_snapshot();
    let keys = select_periods(q.periods.as_deref(), &history);
    let (agents, _) = merger::merge_periods(&keys, &history);

    let mut list: Vec<KpiAgent> = agents.into_values().collect();
    list.sort_by(|a, b| a.id.cmp(&b.id));
    Json(list)
}
