use axum::Json;

use contracts::shared::period::PeriodSummary;

use crate::shared::state;

/// GET /api/periods
pub async fn list_all() -> Json<Vec<PeriodSummary>> {
    let history = state::history_snapshot();
    let mut summaries: Vec<PeriodSummary> = history
        .values()
        .map(|snap| PeriodSummary {
            id: snap.id.clone(),
            label: snap.label.clone(),
            agent_count: snap.kpi_data.len(),
            sale_count: snap.sales_data.len(),
        })
        .collect();
    summaries.sort_by(|a, b| a.id.cmp(&b.id));
    Json(summaries)
}
