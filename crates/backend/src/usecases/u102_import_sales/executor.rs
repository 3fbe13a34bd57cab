//! Sales export import ("Croco" report).
//!
//! One row per transaction line. Rows are appended to the month
//! snapshot, not deduplicated: re-uploading a report doubles the rows
//! by design and is handled upstream by re-exporting whole months.

use std::collections::HashMap;

use anyhow::Result;

use contracts::domain::a002_sale::SaleRow;
use contracts::usecases::{ImportResult, SheetData};

use crate::shared::numeric::{cell_num, cell_str};
use crate::shared::period::{month_label, normalize_period_key};
use crate::shared::state;

/// Column map of the sales export.
const COL_DATE: &str = "A";
const COL_ID: &str = "B";
const COL_PROD: &str = "G";
const COL_CODE: &str = "H";
const COL_CLASS: &str = "K";
const COL_BRUTTO: &str = "T";
const COL_STORNO: &str = "V";
const COL_NETTO: &str = "X";
const COL_OSF: &str = "Z";

/// Map sheet rows to sale rows, skipping lines without a numeric
/// agent id.
pub fn map_sales_rows(rows: &[HashMap<String, String>]) -> (Vec<SaleRow>, usize) {
    let mut sales = Vec::with_capacity(rows.len());
    let mut skipped = 0;

    for row in rows {
        let id = cell_str(row, COL_ID);
        if id.is_empty() || id.parse::<u64>().is_err() {
            skipped += 1;
            continue;
        }

        let prod = match cell_str(row, COL_PROD) {
            p if p.is_empty() => "Unbekannt".to_string(),
            p => p,
        };

        sales.push(SaleRow {
            id,
            prod,
            code: cell_str(row, COL_CODE),
            class: cell_str(row, COL_CLASS),
            osf: cell_num(row, COL_OSF),
            date: cell_str(row, COL_DATE),
            netto: cell_num(row, COL_NETTO),
            storno: cell_num(row, COL_STORNO),
            brutto: cell_num(row, COL_BRUTTO),
            commission: None,
        });
    }

    (sales, skipped)
}

/// Import a sales sheet into the month snapshot derived from its file
/// name.
pub async fn import_sales_sheet(sheet: SheetData) -> Result<ImportResult> {
    let period = normalize_period_key(&sheet.metadata.file_name);
    let label = month_label(&period);

    let (sales, skipped) = map_sales_rows(&sheet.rows);
    let imported = sales.len();

    state::update_snapshot(&period, &label, |snap| {
        snap.sales_data.extend(sales);
    })
    .await?;

    tracing::info!(
        "Sales import: {} rows into {}, {} skipped",
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
    fn maps_a_sale_line() {
        let rows = vec![row(&[
            ("A", "03.11.2025"),
            ("B", "101"),
            ("G", "GigaMobil M"),
            ("H", "40124:SUB1"),
            ("K", "BNT MOB NEU"),
            ("T", "1"),
            ("V", "0"),
            ("X", "1"),
            ("Z", "0,5"),
        ])];
        let (sales, skipped) = map_sales_rows(&rows);
        assert_eq!(skipped, 0);
        assert_eq!(sales[0].id, "101");
        assert_eq!(sales[0].code, "40124:SUB1");
        assert_eq!(sales[0].netto, 1.0);
        assert_eq!(sales[0].osf, 0.5);
        assert_eq!(sales[0].commission, None);
    }

    #[test]
    fn skips_rows_without_agent_id() {
        let rows = vec![
            row(&[("B", ""), ("G", "Summe")]),
            row(&[("B", "Gesamt")]),
            row(&[("B", "101"), ("G", "GigaTV Home")]),
        ];
        let (sales, skipped) = map_sales_rows(&rows);
        assert_eq!(sales.len(), 1);
        assert_eq!(skipped, 2);
    }

    #[test]
    fn empty_product_name_gets_placeholder() {
        let rows = vec![row(&[("B", "101")])];
        let (sales, _) = map_sales_rows(&rows);
        assert_eq!(sales[0].prod, "Unbekannt");
    }
}
