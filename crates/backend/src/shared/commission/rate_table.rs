//! Static commission rate reference data.
//!
//! One row per (code, class, product) combination of the current
//! bonus sheet. The resolver searches this table after the manual
//! override map; the table itself carries no logic.

use contracts::domain::a003_commission::RateEntry;

/// Static table row. `&'static str` twin of [`RateEntry`].
#[derive(Debug, Clone, Copy)]
pub struct RateRow {
    pub code: &'static str,
    pub class: &'static str,
    pub prod: &'static str,
    pub value: f64,
}

/// Current bonus sheet. Codes are the clean SKU form; exports may
/// append a `:`-delimited variant suffix.
pub static RATE_TABLE: &[RateRow] = &[
    // Mobile new business
    RateRow { code: "40123", class: "BNT MOB", prod: "GigaMobil S", value: 15.0 },
    RateRow { code: "40124", class: "BNT MOB", prod: "GigaMobil M", value: 20.0 },
    RateRow { code: "40125", class: "BNT MOB", prod: "GigaMobil L", value: 25.0 },
    RateRow { code: "40126", class: "BNT MOB", prod: "GigaMobil XL", value: 30.0 },
    RateRow { code: "40131", class: "BNT MOB NBA", prod: "GigaMobil M NBA", value: 22.0 },
    RateRow { code: "40140", class: "BNT MOB", prod: "CallYa Allnet Flat", value: 5.0 },
    // Mobile retention
    RateRow { code: "41123", class: "VVL MOB", prod: "GigaMobil S", value: 8.0 },
    RateRow { code: "41124", class: "VVL MOB", prod: "GigaMobil M", value: 10.0 },
    RateRow { code: "41125", class: "VVL MOB", prod: "GigaMobil L", value: 12.0 },
    RateRow { code: "41126", class: "VVL MOB", prod: "GigaMobil XL", value: 14.0 },
    RateRow { code: "41131", class: "VVL MOB NBA", prod: "GigaMobil M NBA", value: 11.0 },
    // TV
    RateRow { code: "42201", class: "BNT PTV", prod: "GigaTV Home", value: 12.0 },
    RateRow { code: "42202", class: "BNT PTV", prod: "GigaTV Net", value: 12.0 },
    RateRow { code: "42210", class: "BNT ENV", prod: "GigaTV inkl. Netflix", value: 18.0 },
    RateRow { code: "43201", class: "VVL PTV", prod: "GigaTV Home", value: 6.0 },
    RateRow { code: "43210", class: "VVL ENV", prod: "GigaTV inkl. Netflix", value: 9.0 },
    // Broadband / Internet & Phone
    RateRow { code: "44301", class: "BNT KIP", prod: "GigaZuhause 50 DSL", value: 10.0 },
    RateRow { code: "44302", class: "BNT KIP", prod: "GigaZuhause 100 DSL", value: 10.0 },
    RateRow { code: "44310", class: "BNT KIP", prod: "GigaZuhause 250 Kabel", value: 20.0 },
    RateRow { code: "44311", class: "BNT KIP", prod: "GigaZuhause 500 Kabel", value: 25.0 },
    RateRow { code: "44312", class: "BNT KIP", prod: "GigaZuhause 1000 Kabel", value: 30.0 },
    RateRow { code: "45301", class: "VVL KIP", prod: "GigaZuhause 50 DSL", value: 5.0 },
    RateRow { code: "45310", class: "VVL KIP TW", prod: "GigaZuhause 250 Kabel", value: 10.0 },
    RateRow { code: "45311", class: "VVL KIP UPSELL", prod: "GigaZuhause 500 Kabel", value: 12.0 },
    // Options
    RateRow { code: "46101", class: "BNT MOB OPTION", prod: "OneNumber Option", value: 3.0 },
    RateRow { code: "46102", class: "VVL MOB OPTION", prod: "OneNumber Option", value: 2.0 },
    RateRow { code: "46110", class: "BNT KIP OPTION", prod: "Vodafone Station Option", value: 4.0 },
];

/// Owned copies for the API listing.
pub fn rate_entries() -> Vec<RateEntry> {
    RATE_TABLE
        .iter()
        .map(|row| RateEntry {
            code: row.code.to_string(),
            class: row.class.to_string(),
            prod: row.prod.to_string(),
            value: row.value,
        })
        .collect()
}
