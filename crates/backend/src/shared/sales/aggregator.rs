//! Per-agent sales aggregation.
//!
//! Folds raw sale rows into the [`AggregatedSales`] rollup consumed by
//! every report view. Commission is resolved per row against the live
//! override map on every call; results are deliberately not cached so
//! that an override edit retroactively changes historical rows.

use std::collections::HashMap;

use contracts::domain::a002_sale::SaleRow;
use contracts::domain::a003_commission::DealType;
use contracts::shared::sales::AggregatedSales;

use crate::shared::commission::resolver::{deal_type_of, resolve};

/// Class substrings for the mobile product category.
pub const MOB_KEYWORDS: &[&str] = &["MOB", "MOBILE"];
/// Class substrings for the TV product category.
pub const TV_KEYWORDS: &[&str] = &["PTV", "ENV", "TV", "CONNECT"];
/// Class substrings for the broadband / internet-and-phone category.
pub const KIP_KEYWORDS: &[&str] = &["KIP", "DSL", "FIB", "I&P", "INTERNET"];

fn contains_any(class: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| class.contains(kw))
}

/// Attach a resolved commission to every row.
pub fn enrich(rows: &[SaleRow], overrides: &HashMap<String, f64>) -> Vec<SaleRow> {
    rows.iter()
        .map(|row| {
            let mut enriched = row.clone();
            enriched.commission = Some(resolve(&row.code, &row.class, &row.prod, overrides));
            enriched
        })
        .collect()
}

/// Aggregate all rows of one agent.
///
/// An agent with no rows yields the all-zero record, never an absent
/// value. Cancelled rows (`storno > 0`) count toward gross and
/// cancellation totals but never toward net sales or commission.
pub fn aggregate(
    rows: &[SaleRow],
    agent_id: &str,
    overrides: &HashMap<String, f64>,
) -> AggregatedSales {
    let mut s = AggregatedSales::default();

    for row in rows.iter().filter(|r| r.id == agent_id) {
        let commission = row
            .commission
            .unwrap_or_else(|| resolve(&row.code, &row.class, &row.prod, overrides));

        let count = row.netto;
        if count > 0.0 && row.storno == 0.0 {
            s.netto_total += count;
            s.commission_total += commission * count;
        }
        s.storno_total += row.storno;
        s.brutto_total += row.brutto;

        let class = row.class.to_uppercase();
        let is_bnt = class.contains("BNT");
        let is_vvl = deal_type_of(&class) == DealType::Vvl;

        let is_mob = contains_any(&class, MOB_KEYWORDS);
        let is_tv = contains_any(&class, TV_KEYWORDS);
        let is_kip = contains_any(&class, KIP_KEYWORDS);

        if is_bnt {
            s.bnt_total += count;
            if is_mob {
                s.bnt_mobil += count;
            } else if is_tv {
                s.bnt_tv += count;
            } else if is_kip {
                s.bnt_kip += count;
            }
        }
        if is_vvl {
            s.vvl_total += count;
            if is_mob {
                s.vvl_mobil += count;
            } else if is_tv {
                s.vvl_tv += count;
            } else if is_kip {
                s.vvl_kip += count;
            }
        }
    }

    s.pending_total = (s.brutto_total - (s.netto_total + s.storno_total)).max(0.0);
    // Denominator: gross, so pending rows are part of the base. The
    // netto+storno lineage is the one-line alternative here.
    s.storno_rate = if s.brutto_total > 0.0 {
        s.storno_total / s.brutto_total * 100.0
    } else {
        0.0
    };
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, code: &str, class: &str, prod: &str, netto: f64, storno: f64, brutto: f64) -> SaleRow {
        SaleRow {
            id: id.into(),
            prod: prod.into(),
            code: code.into(),
            class: class.into(),
            osf: 0.0,
            date: "01.11.2025".into(),
            netto,
            storno,
            brutto,
            commission: None,
        }
    }

    #[test]
    fn dsl_bnt_row_full_rollup() {
        let rows = vec![row("101", "", "DSL BNT NEU", "DSL Classic", 1.0, 0.0, 1.0)];
        let s = aggregate(&rows, "101", &HashMap::new());
        assert_eq!(s.netto_total, 1.0);
        assert_eq!(s.commission_total, 10.0);
        assert_eq!(s.bnt_total, 1.0);
        assert_eq!(s.bnt_kip, 1.0);
        assert_eq!(s.pending_total, 0.0);
    }

    #[test]
    fn cancelled_row_excluded_from_net_and_commission() {
        // Commission resolves to 10 (VVL MOB via table), but storno
        // keeps it out of the earned totals.
        let rows = vec![row("101", "41124", "VVL-MOB", "GigaMobil M", 1.0, 1.0, 1.0)];
        let s = aggregate(&rows, "101", &HashMap::new());
        assert_eq!(s.netto_total, 0.0);
        assert_eq!(s.commission_total, 0.0);
        assert_eq!(s.storno_total, 1.0);
        assert_eq!(s.brutto_total, 1.0);
        assert_eq!(s.storno_rate, 100.0);
    }

    #[test]
    fn pending_invariant_never_negative() {
        let rows = vec![
            row("101", "40124", "BNT MOB", "GigaMobil M", 1.0, 0.0, 3.0),
            row("101", "40124", "BNT MOB", "GigaMobil M", 2.0, 0.0, 1.0),
        ];
        let s = aggregate(&rows, "101", &HashMap::new());
        assert_eq!(s.brutto_total, 4.0);
        assert_eq!(s.netto_total, 3.0);
        assert_eq!(
            s.pending_total,
            (s.brutto_total - s.netto_total - s.storno_total).max(0.0)
        );
    }

    #[test]
    fn no_rows_yields_zero_record_not_nan() {
        let s = aggregate(&[], "101", &HashMap::new());
        assert_eq!(s, AggregatedSales::default());
        assert_eq!(s.storno_rate, 0.0);
    }

    #[test]
    fn other_agents_rows_ignored() {
        let rows = vec![
            row("101", "40124", "BNT MOB", "GigaMobil M", 1.0, 0.0, 1.0),
            row("202", "40124", "BNT MOB", "GigaMobil M", 5.0, 0.0, 5.0),
        ];
        let s = aggregate(&rows, "101", &HashMap::new());
        assert_eq!(s.netto_total, 1.0);
    }

    #[test]
    fn override_changes_commission_on_reaggregation() {
        let rows = vec![row("101", "40124", "BNT MOB", "GigaMobil M", 2.0, 0.0, 2.0)];
        let before = aggregate(&rows, "101", &HashMap::new());
        assert_eq!(before.commission_total, 40.0);

        let mut ov = HashMap::new();
        ov.insert("40124#BNT".to_string(), 5.0);
        let after = aggregate(&rows, "101", &ov);
        assert_eq!(after.commission_total, 10.0);
    }

    #[test]
    fn category_split_is_exclusive_per_row() {
        // KIP class also matching nothing else lands once.
        let rows = vec![
            row("101", "44310", "BNT KIP", "GigaZuhause 250 Kabel", 1.0, 0.0, 1.0),
            row("101", "42201", "BNT PTV", "GigaTV Home", 1.0, 0.0, 1.0),
            row("101", "41124", "VVL MOB", "GigaMobil M", 1.0, 0.0, 1.0),
        ];
        let s = aggregate(&rows, "101", &HashMap::new());
        assert_eq!(s.bnt_total, 2.0);
        assert_eq!(s.bnt_kip, 1.0);
        assert_eq!(s.bnt_tv, 1.0);
        assert_eq!(s.bnt_mobil, 0.0);
        assert_eq!(s.vvl_total, 1.0);
        assert_eq!(s.vvl_mobil, 1.0);
    }

    #[test]
    fn enrich_attaches_commission() {
        let rows = vec![row("101", "40124", "BNT MOB", "GigaMobil M", 1.0, 0.0, 1.0)];
        let enriched = enrich(&rows, &HashMap::new());
        assert_eq!(enriched[0].commission, Some(20.0));
    }
}
