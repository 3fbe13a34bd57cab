use serde::{Deserialize, Serialize};

/// One transaction line from a sales export.
///
/// `commission` is never stored: it is attached on each query by the
/// resolver so that override edits retroactively apply to historical
/// rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaleRow {
    /// Agent identifier the row belongs to.
    pub id: String,
    /// Product display name.
    pub prod: String,
    /// Product code. May be empty, may carry a `:`-delimited suffix.
    pub code: String,
    /// Product class / category, free text ("BNT MOB NEU", "VVL-KIP", ...).
    pub class: String,
    pub osf: f64,
    /// Transaction date as exported, free text.
    pub date: String,

    /// Completed units.
    pub netto: f64,
    /// Cancelled units.
    pub storno: f64,
    /// Gross units before cancellation / pending resolution.
    pub brutto: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub commission: Option<f64>,
}

impl SaleRow {
    /// Units still in flight, never negative.
    pub fn pending(&self) -> f64 {
        (self.brutto - (self.netto + self.storno)).max(0.0)
    }
}
