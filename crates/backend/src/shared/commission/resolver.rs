//! Commission resolution engine.
//!
//! Maps an arbitrary (product code, product class, product name)
//! triple from a sales export to a commission rate. Input data is
//! inconsistent across export-tool versions (clean SKU, colon-suffixed
//! variant, or no code at all), so resolution walks a fixed priority
//! chain: manual overrides, the DSL hard lock, then the static rate
//! table with candidate scoring.
//!
//! Resolution order decision: overrides beat the DSL hard lock. A
//! manual correction must always win, otherwise a misfiled DSL row
//! could never be fixed from the override manager.
//!
//! The keyword lists below are the single configurable source for
//! deal-type detection; the set has drifted across bonus-rule
//! generations, so additions belong here and nowhere else.

use std::collections::HashMap;

use contracts::domain::a003_commission::{DealType, OverrideKey};

use super::rate_table::{RateRow, RATE_TABLE};

/// Class substrings that mark a retention-shaped deal (VVL).
/// Everything else is new business (BNT).
pub const VVL_KEYWORDS: &[&str] = &[
    "VVL", "TW", "UPSELL", "UP", "PREV", "CHANGE", "TAKEOVER", "EQUAL", "RET",
];

/// Keywords that score extra when present on both sides of a
/// candidate comparison.
pub const SPECIAL_KEYWORDS: &[&str] = &["OPTION", "NBA"];

/// Fixed rate for DSL new business, per team rule.
pub const DSL_BNT_RATE: f64 = 10.00;

/// Derive the deal type from a (normalized or raw) class string.
pub fn deal_type_of(class: &str) -> DealType {
    let upper = class.to_uppercase();
    if VVL_KEYWORDS.iter().any(|kw| upper.contains(kw)) {
        DealType::Vvl
    } else {
        DealType::Bnt
    }
}

/// Resolve the commission rate for one sale row.
///
/// Pure and total: all identifying strings may be empty and the
/// function never fails. `0.0` is the "unresolved" sentinel and means
/// "needs manual attention", not a legitimate zero-value commission.
pub fn resolve(
    code: &str,
    class: &str,
    name: &str,
    overrides: &HashMap<String, f64>,
) -> f64 {
    let code = code.trim().to_uppercase();
    let class = class.trim().to_uppercase();
    let name = name.trim().to_uppercase();

    if code.is_empty() && name.is_empty() {
        return 0.0;
    }

    let target = deal_type_of(&class);

    // 1. Manual overrides, narrowest key first.
    for key in OverrideKey::lookup_chain(&code, &name, target) {
        if let Some(rate) = overrides.get(&key.render()) {
            return *rate;
        }
    }

    // 2. DSL new business is a fixed team rate.
    if target == DealType::Bnt && (name.contains("DSL") || class.contains("DSL")) {
        return DSL_BNT_RATE;
    }

    // 3. Static table.
    let candidates = find_candidates(&code, &name);
    if candidates.is_empty() {
        return 0.0;
    }

    let mut best: Option<(&RateRow, i32)> = None;
    for row in &candidates {
        let score = score_candidate(row, &class, target);
        if score > best.map(|(_, s)| s).unwrap_or(0) {
            best = Some((row, score));
        }
    }
    if let Some((row, _)) = best {
        return row.value;
    }

    // 4. No candidate scored: fall back to the deal-type group, then
    //    to the first match of any kind.
    candidates
        .iter()
        .find(|row| deal_type_of(row.class) == target)
        .or_else(|| candidates.first())
        .map(|row| row.value)
        .unwrap_or(0.0)
}

/// Filter the rate table down to rows identifying the same product.
///
/// Priority: exact code, base-segment of a `:`-suffixed code, exact
/// product name, then "table name is contained in the input name".
fn find_candidates(code: &str, name: &str) -> Vec<&'static RateRow> {
    if !code.is_empty() {
        let exact: Vec<&RateRow> = RATE_TABLE
            .iter()
            .filter(|row| row.code.to_uppercase() == code)
            .collect();
        if !exact.is_empty() {
            return exact;
        }
        if let Some(base) = code.split(':').next() {
            if base != code {
                let by_base: Vec<&RateRow> = RATE_TABLE
                    .iter()
                    .filter(|row| row.code.to_uppercase().starts_with(base))
                    .collect();
                if !by_base.is_empty() {
                    return by_base;
                }
            }
        }
    }

    if name.is_empty() {
        return Vec::new();
    }
    let by_name: Vec<&RateRow> = RATE_TABLE
        .iter()
        .filter(|row| row.prod.to_uppercase() == name)
        .collect();
    if !by_name.is_empty() {
        return by_name;
    }
    RATE_TABLE
        .iter()
        .filter(|row| name.contains(&row.prod.to_uppercase()))
        .collect()
}

/// Similarity score between a table row and the input class.
fn score_candidate(row: &RateRow, class: &str, target: DealType) -> i32 {
    let row_class = row.class.to_uppercase();
    let mut score = 0;

    if row_class == *class {
        score += 100;
    } else if !row_class.is_empty() && class.contains(&row_class) {
        score += 50;
    } else if !class.is_empty() && row_class.contains(class) {
        score += 40;
    }

    if deal_type_of(&row_class) == target {
        score += 20;
    }

    for kw in SPECIAL_KEYWORDS {
        if row_class.contains(kw) && class.contains(kw) {
            score += 10;
        }
    }

    score
}
