use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::a001_agent_kpi::KpiAgent;
use crate::domain::a002_sale::SaleRow;

/// Canonical key for an unrecognizable period label. Sorts first.
pub const UNKNOWN_PERIOD: &str = "0000-00";

/// Everything uploaded for one calendar month, keyed by the canonical
/// `"YYYY-MM"` period id.
///
/// Created on first upload referencing the period; later uploads merge
/// into it (KPI records replaced per agent id, sale rows appended).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthSnapshot {
    /// Canonical `"YYYY-MM"` key.
    pub id: String,
    /// Display label, e.g. "November 2025".
    pub label: String,
    pub kpi_data: HashMap<String, KpiAgent>,
    pub sales_data: Vec<SaleRow>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MonthSnapshot {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            label: label.into(),
            kpi_data: HashMap::new(),
            sales_data: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Listing entry for the period picker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSummary {
    pub id: String,
    pub label: String,
    pub agent_count: usize,
    pub sale_count: usize,
}
