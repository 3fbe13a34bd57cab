use serde::{Deserialize, Serialize};

/// Per-agent sales rollup for a queried period set.
///
/// Computed, never stored: commission totals depend on the live
/// override map. `Default` is the answer for an agent with no rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedSales {
    pub netto_total: f64,
    pub storno_total: f64,
    pub brutto_total: f64,
    pub pending_total: f64,
    pub commission_total: f64,

    // Deal-type x product-category net breakdown.
    pub bnt_total: f64,
    pub bnt_mobil: f64,
    pub bnt_tv: f64,
    pub bnt_kip: f64,
    pub vvl_total: f64,
    pub vvl_mobil: f64,
    pub vvl_tv: f64,
    pub vvl_kip: f64,

    /// Cancellation rate, percent of gross.
    pub storno_rate: f64,
}
