//! Multi-period history merge.
//!
//! Combines KPI records and sale rows across a set of selected months.
//! Rate metrics are weighted by call volume so a 50-call month cannot
//! distort the average as much as a 500-call month; point scores are
//! plain means; identity fields come from the most recent month.

use std::collections::{BTreeMap, HashMap};

use contracts::domain::a001_agent_kpi::KpiAgent;
use contracts::domain::a002_sale::SaleRow;
use contracts::shared::period::MonthSnapshot;

/// Merge the selected periods into one KPI map and one flat row list.
///
/// `history` is the full snapshot store; keys absent from it are
/// ignored. Row commissions are not attached here — callers resolve
/// against the live override map.
pub fn merge_periods(
    keys: &[String],
    history: &HashMap<String, MonthSnapshot>,
) -> (HashMap<String, KpiAgent>, Vec<SaleRow>) {
    // Deterministic chronological walk regardless of input order.
    let selected: BTreeMap<&str, &MonthSnapshot> = keys
        .iter()
        .filter_map(|k| history.get(k).map(|snap| (k.as_str(), snap)))
        .collect();

    let mut sales: Vec<SaleRow> = Vec::new();
    // Agent id -> (per-period records in chronological order).
    let mut appearances: HashMap<String, Vec<&KpiAgent>> = HashMap::new();

    for snap in selected.values() {
        sales.extend(snap.sales_data.iter().cloned());
        for agent in snap.kpi_data.values() {
            appearances.entry(agent.id.clone()).or_default().push(agent);
        }
    }

    let merged: HashMap<String, KpiAgent> = appearances
        .into_iter()
        .map(|(id, records)| {
            let agent = merge_agent(&id, &records);
            (id, agent)
        })
        .collect();

    (merged, sales)
}

fn merge_agent(id: &str, records: &[&KpiAgent]) -> KpiAgent {
    let latest = records.last().expect("agent appears in at least one period");
    let n = records.len() as f64;
    let total_calls: f64 = records.iter().map(|r| r.calls).sum();

    // Calls-weighted average; plain mean when no calls were recorded.
    let weighted = |metric: fn(&KpiAgent) -> f64| -> f64 {
        if total_calls > 0.0 {
            records.iter().map(|r| metric(r) * r.calls).sum::<f64>() / total_calls
        } else {
            records.iter().map(|r| metric(r)).sum::<f64>() / n
        }
    };
    let mean = |metric: fn(&KpiAgent) -> f64| -> f64 {
        records.iter().map(|r| metric(r)).sum::<f64>() / n
    };

    KpiAgent {
        id: id.to_string(),
        name: latest.name.clone(),
        months: records.iter().map(|r| r.months).fold(0.0, f64::max),
        calls: total_calls,

        bnt_mw: weighted(|r| r.bnt_mw),
        vvl_mw: weighted(|r| r.vvl_mw),
        cs_mw: weighted(|r| r.cs_mw),
        ff7_mw: weighted(|r| r.ff7_mw),
        aufleger: weighted(|r| r.aufleger),

        bnt_pix: mean(|r| r.bnt_pix),
        cs_pix: mean(|r| r.cs_pix),
        ff7_pix: mean(|r| r.ff7_pix),
        vvl_pix: mean(|r| r.vvl_pix),
        tnps: mean(|r| r.tnps),
        deep: mean(|r| r.deep),
        fbq: mean(|r| r.fbq),
        pix: mean(|r| r.pix),

        ebene: latest.ebene.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent(id: &str, calls: f64, bnt_mw: f64, pix: f64, months: f64) -> KpiAgent {
        KpiAgent {
            calls,
            bnt_mw,
            pix,
            months,
            ..KpiAgent::empty(id, format!("Agent {id}"))
        }
    }

    fn snapshot(key: &str, agents: Vec<KpiAgent>) -> MonthSnapshot {
        let mut snap = MonthSnapshot::new(key, key);
        for a in agents {
            snap.kpi_data.insert(a.id.clone(), a);
        }
        snap
    }

    #[test]
    fn single_period_merge_is_identity() {
        let mut history = HashMap::new();
        history.insert(
            "2025-11".to_string(),
            snapshot("2025-11", vec![agent("101", 150.0, 5.5, 7.2, 12.0)]),
        );
        let (kpi, _) = merge_periods(&["2025-11".to_string()], &history);
        let merged = &kpi["101"];
        assert_eq!(merged.calls, 150.0);
        assert_eq!(merged.bnt_mw, 5.5);
        assert_eq!(merged.pix, 7.2);
        assert_eq!(merged.months, 12.0);
    }

    #[test]
    fn rate_metrics_are_calls_weighted() {
        let mut history = HashMap::new();
        history.insert(
            "2025-10".to_string(),
            snapshot("2025-10", vec![agent("101", 100.0, 5.0, 6.0, 10.0)]),
        );
        history.insert(
            "2025-11".to_string(),
            snapshot("2025-11", vec![agent("101", 200.0, 3.0, 8.0, 11.0)]),
        );
        let keys = vec!["2025-10".to_string(), "2025-11".to_string()];
        let (kpi, _) = merge_periods(&keys, &history);
        let merged = &kpi["101"];

        assert_eq!(merged.calls, 300.0);
        // (5*100 + 3*200) / 300
        assert!((merged.bnt_mw - 11.0 / 3.0).abs() < 1e-9);
        // Point score: plain mean.
        assert_eq!(merged.pix, 7.0);
        // Tenure does not reset.
        assert_eq!(merged.months, 11.0);
    }

    #[test]
    fn identity_fields_come_from_latest_period() {
        let mut a_old = agent("101", 100.0, 0.0, 0.0, 5.0);
        a_old.name = "Old Name".into();
        a_old.ebene = "1".into();
        let mut a_new = agent("101", 100.0, 0.0, 0.0, 6.0);
        a_new.name = "New Name".into();
        a_new.ebene = "2".into();

        let mut history = HashMap::new();
        history.insert("2025-01".to_string(), snapshot("2025-01", vec![a_old]));
        history.insert("2025-02".to_string(), snapshot("2025-02", vec![a_new]));

        // Selection order must not matter.
        let keys = vec!["2025-02".to_string(), "2025-01".to_string()];
        let (kpi, _) = merge_periods(&keys, &history);
        assert_eq!(kpi["101"].name, "New Name");
        assert_eq!(kpi["101"].ebene, "2");
    }

    #[test]
    fn zero_call_periods_fall_back_to_plain_mean() {
        let mut history = HashMap::new();
        history.insert(
            "2025-10".to_string(),
            snapshot("2025-10", vec![agent("101", 0.0, 4.0, 0.0, 1.0)]),
        );
        history.insert(
            "2025-11".to_string(),
            snapshot("2025-11", vec![agent("101", 0.0, 6.0, 0.0, 2.0)]),
        );
        let keys = vec!["2025-10".to_string(), "2025-11".to_string()];
        let (kpi, _) = merge_periods(&keys, &history);
        assert_eq!(kpi["101"].bnt_mw, 5.0);
    }

    #[test]
    fn sales_are_concatenated() {
        let mut s1 = snapshot("2025-10", vec![]);
        s1.sales_data.push(SaleRow {
            id: "101".into(),
            prod: "GigaMobil M".into(),
            code: "40124".into(),
            class: "BNT MOB".into(),
            osf: 0.0,
            date: "".into(),
            netto: 1.0,
            storno: 0.0,
            brutto: 1.0,
            commission: None,
        });
        let mut s2 = snapshot("2025-11", vec![]);
        s2.sales_data.push(s1.sales_data[0].clone());
        s2.sales_data.push(s1.sales_data[0].clone());

        let mut history = HashMap::new();
        history.insert("2025-10".to_string(), s1);
        history.insert("2025-11".to_string(), s2);

        let keys = vec!["2025-10".to_string(), "2025-11".to_string()];
        let (_, sales) = merge_periods(&keys, &history);
        assert_eq!(sales.len(), 3);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let history = HashMap::new();
        let (kpi, sales) = merge_periods(&["2030-01".to_string()], &history);
        assert!(kpi.is_empty());
        assert!(sales.is_empty());
    }
}
