use axum::extract::{Path, Query};
use axum::Json;
use serde::Deserialize;

use contracts::domain::a002_sale::SaleRow;
use contracts::shared::sales::AggregatedSales;

use crate::shared::sales::{aggregator, merger};
use crate::shared::state;

use super::select_periods;

#[derive(Debug, Deserialize)]
pub struct PeriodQuery {
    pub periods: Option<String>,
}

/// GET /api/sales/:agent_id
pub async fn get_aggregated(
    Path(agent_id): Path<String>,
    Query(q): Query<PeriodQuery>,
) -> Json<AggregatedSales> {
    let history = state::history_snapshot();
    let keys = select_periods(q.periods.as_deref(), &history);
    let (_, rows) = merger::merge_periods(&keys, &history);
    let overrides = state::overrides_snapshot();
    Json(aggregator::aggregate(&rows, &agent_id, &overrides))
}

/// GET /api/sales/:agent_id/rows
pub async fn get_rows(
    Path(agent_id): Path<String>,
    Query(q): Query<PeriodQuery>,
) -> Json<Vec<SaleRow>> {
    let history = state::history_snapshot();
    let keys = select_periods(q.periods.as_deref(), &history);
    let (_, rows) = merger::merge_periods(&keys, &history);
    let overrides = state::overrides_snapshot();
    let own: Vec<SaleRow> = rows.into_iter().filter(|r| r.id == agent_id).collect();
    Json(aggregator::enrich(&own, &overrides))
}
