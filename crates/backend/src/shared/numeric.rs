//! Spreadsheet cell normalization.
//!
//! The exports mix plain numbers, percent strings, comma decimals and
//! currency-suffixed values depending on the export tool version.
//! Everything funnels through [`parse_cell`]; anything unparseable is
//! `0.0` so downstream math never sees NaN.

/// Parse a loosely-typed spreadsheet cell into a number.
///
/// Accepted: `"42"`, `"3,5"`, `"87,5 %"`, `"10,00 €"`, `"1.5"`.
/// Blank or non-numeric input yields `0.0`.
pub fn parse_cell(value: &str) -> f64 {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    let cleaned: String = trimmed
        .chars()
        .filter(|c| *c != ' ' && *c != '%' && *c != '€')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    match cleaned.parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

/// Cell lookup helper for rows keyed by column letter.
pub fn cell_num(row: &std::collections::HashMap<String, String>, col: &str) -> f64 {
    row.get(col).map(|v| parse_cell(v)).unwrap_or(0.0)
}

/// String cell with surrounding whitespace removed; missing cells are empty.
pub fn cell_str(row: &std::collections::HashMap<String, String>, col: &str) -> String {
    row.get(col).map(|v| v.trim().to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_and_decimal_values() {
        assert_eq!(parse_cell("42"), 42.0);
        assert_eq!(parse_cell("1.5"), 1.5);
        assert_eq!(parse_cell("3,5"), 3.5);
        assert_eq!(parse_cell("-2,25"), -2.25);
    }

    #[test]
    fn percent_and_currency_suffixes() {
        assert_eq!(parse_cell("87,5 %"), 87.5);
        assert_eq!(parse_cell("10,00 €"), 10.0);
        assert_eq!(parse_cell(" 25% "), 25.0);
    }

    #[test]
    fn garbage_yields_zero() {
        assert_eq!(parse_cell(""), 0.0);
        assert_eq!(parse_cell("   "), 0.0);
        assert_eq!(parse_cell("n/a"), 0.0);
        assert_eq!(parse_cell("Agent"), 0.0);
    }
}
