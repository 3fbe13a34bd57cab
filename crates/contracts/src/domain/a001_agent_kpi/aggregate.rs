use serde::{Deserialize, Serialize};

/// One agent's KPI record for one reporting period.
///
/// Built wholesale from a KPI export upload and treated as immutable
/// afterwards; a later upload for the same period replaces the record
/// per agent id. The composite `pix` score is computed upstream and
/// consumed as given.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KpiAgent {
    /// Stable agent identifier (numeric string in the exports).
    pub id: String,
    pub name: String,

    /// Tenure in months.
    pub months: f64,
    /// Call volume in the period; weighting base for multi-month merges.
    pub calls: f64,

    // "MW" percentage-rate metrics, each paired with a "PIX" point score.
    pub bnt_mw: f64,
    pub bnt_pix: f64,
    pub cs_mw: f64,
    pub cs_pix: f64,
    pub ff7_mw: f64,
    pub ff7_pix: f64,
    pub vvl_mw: f64,
    pub vvl_pix: f64,

    /// Hang-up / abandon quality rate (AQ), percent.
    pub aufleger: f64,
    pub tnps: f64,
    /// Detractor share, percent. Lower is better.
    pub deep: f64,
    /// Feedback quote, percent.
    pub fbq: f64,
    /// Composite performance score, 0..10.
    pub pix: f64,

    /// Free-text tier label from the export ("1".."Newcomer").
    pub ebene: String,
}

impl KpiAgent {
    pub fn empty(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            months: 0.0,
            calls: 0.0,
            bnt_mw: 0.0,
            bnt_pix: 0.0,
            cs_mw: 0.0,
            cs_pix: 0.0,
            ff7_mw: 0.0,
            ff7_pix: 0.0,
            vvl_mw: 0.0,
            vvl_pix: 0.0,
            aufleger: 0.0,
            tnps: 0.0,
            deep: 0.0,
            fbq: 0.0,
            pix: 0.0,
            ebene: String::new(),
        }
    }
}
