//! KPI export import.
//!
//! Consumes the pre-parsed rows of a "PIX" dashboard export. The
//! layout is positional: columns are addressed by spreadsheet letter,
//! the upstream parser already dropped the four header lines. Rows
//! whose agent-id column is not numeric (repeated headers, footer
//! notes) are skipped.

use std::collections::HashMap;

use anyhow::Result;

use contracts::domain::a001_agent_kpi::KpiAgent;
use contracts::usecases::{ImportResult, SheetData};

use crate::shared::numeric::{cell_num, cell_str};
use crate::shared::period::{month_label, normalize_period_key};
use crate::shared::state;

/// Column map of the KPI export.
const COL_NAME: &str = "C";
const COL_ID: &str = "D";
const COL_MONTHS: &str = "E";
const COL_CALLS: &str = "F";
const COL_BNT_MW: &str = "H";
const COL_BNT_PIX: &str = "J";
const COL_CS_MW: &str = "K";
const COL_CS_PIX: &str = "M";
const COL_FF7_MW: &str = "N";
const COL_FF7_PIX: &str = "P";
const COL_VVL_MW: &str = "Q";
const COL_VVL_PIX: &str = "S";
const COL_AUFLEGER: &str = "W";
const COL_TNPS: &str = "Z";
const COL_DEEP: &str = "AC";
const COL_FBQ: &str = "AF";
const COL_PIX: &str = "AI";
const COL_EBENE: &str = "AJ";

/// Map sheet rows to KPI records keyed by agent id.
///
/// Returns the records and the number of skipped rows.
pub fn map_kpi_rows(rows: &[HashMap<String, String>]) -> (HashMap<String, KpiAgent>, usize) {
    let mut agents = HashMap::new();
    let mut skipped = 0;

    for row in rows {
        let id = cell_str(row, COL_ID);
        if id.is_empty() || id.parse::<u64>().is_err() {
            skipped += 1;
            continue;
        }

        let name = match cell_str(row, COL_NAME) {
            n if n.is_empty() => format!("Agent {}", id),
            n => n,
        };
        let ebene = match cell_str(row, COL_EBENE) {
            e if e.is_empty() => "Newcomer".to_string(),
            e => e,
        };

        let agent = KpiAgent {
            id: id.clone(),
            name,
            months: cell_num(row, COL_MONTHS),
            calls: cell_num(row, COL_CALLS),
            bnt_mw: cell_num(row, COL_BNT_MW),
            bnt_pix: cell_num(row, COL_BNT_PIX),
            cs_mw: cell_num(row, COL_CS_MW),
            cs_pix: cell_num(row, COL_CS_PIX),
            ff7_mw: cell_num(row, COL_FF7_MW),
            ff7_pix: cell_num(row, COL_FF7_PIX),
            vvl_mw: cell_num(row, COL_VVL_MW),
            vvl_pix: cell_num(row, COL_VVL_PIX),
            aufleger: cell_num(row, COL_AUFLEGER),
            tnps: cell_num(row, COL_TNPS),
            deep: cell_num(row, COL_DEEP),
            fbq: cell_num(row, COL_FBQ),
            pix: cell_num(row, COL_PIX),
            ebene,
        };
        agents.insert(id, agent);
    }

    (agents, skipped)
}

/// Import a KPI sheet into the month snapshot derived from its file
/// name. Records replace existing ones per agent id; agents absent
/// from the new sheet keep their previous record.
pub async fn import_kpi_sheet(sheet: SheetData) -> Result<ImportResult> {
    let period = normalize_period_key(&sheet.metadata.file_name);
    let label = month_label(&period);

    let (agents, skipped) = map_kpi_rows(&sheet.rows);
    let imported = agents.len();

    state::update_snapshot(&period, &label, |snap| {
        for (id, agent) in agents {
            snap.kpi_data.insert(id, agent);
        }
    })
    .await?;

    tracing::info!(
        "KPI import: {} agents into {}, {} rows skipped",
        imported,
        period,
        skipped
    );

    Ok(ImportResult {
        period,
        imported_count: imported,
        skipped_count: skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[(&str, &str)]) -> HashMap<String, String> {
        cells
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn maps_a_regular_row() {
        let rows = vec![row(&[
            ("C", "Deniz Kaya"),
            ("D", "101"),
            ("E", "12"),
            ("F", "340"),
            ("H", "5,2 %"),
            ("J", "7,0"),
            ("W", "91,5 %"),
            ("AC", "3,1"),
            ("AF", "28,0"),
            ("AI", "7,4"),
            ("AJ", "2"),
        ])];
        let (agents, skipped) = map_kpi_rows(&rows);
        assert_eq!(skipped, 0);
        let agent = &agents["101"];
        assert_eq!(agent.name, "Deniz Kaya");
        assert_eq!(agent.months, 12.0);
        assert_eq!(agent.calls, 340.0);
        assert_eq!(agent.bnt_mw, 5.2);
        assert_eq!(agent.aufleger, 91.5);
        assert_eq!(agent.pix, 7.4);
        assert_eq!(agent.ebene, "2");
    }

    #[test]
    fn skips_header_and_footer_rows() {
        let rows = vec![
            row(&[("D", "Agent")]),
            row(&[("D", "")]),
            row(&[("D", "202"), ("F", "100")]),
        ];
        let (agents, skipped) = map_kpi_rows(&rows);
        assert_eq!(agents.len(), 1);
        assert_eq!(skipped, 2);
        assert_eq!(agents["202"].name, "Agent 202");
    }

    #[test]
    fn missing_cells_default_to_zero() {
        let rows = vec![row(&[("D", "303")])];
        let (agents, _) = map_kpi_rows(&rows);
        assert_eq!(agents["303"].calls, 0.0);
        assert_eq!(agents["303"].pix, 0.0);
        assert_eq!(agents["303"].ebene, "Newcomer");
    }
}
