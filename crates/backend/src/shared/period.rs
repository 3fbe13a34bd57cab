//! Period key canonicalization.
//!
//! Month keys arrive as free text: sales export file names carry
//! "MM-YYYY", KPI sheets sometimes embed "YYYY-MM" in a cell, and
//! both show up surrounded by arbitrary prose. Everything maps to the
//! sortable canonical `"YYYY-MM"` key; unrecognizable input maps to
//! the [`UNKNOWN_PERIOD`] sentinel.

pub use contracts::shared::period::UNKNOWN_PERIOD;

const MONTH_NAMES_DE: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

/// Extract the first `MM-YYYY` or `YYYY-MM` group from free text and
/// canonicalize it to `"YYYY-MM"`. Separators `-`, `.` and `/` are
/// accepted. Unparseable input yields [`UNKNOWN_PERIOD`].
pub fn normalize_period_key(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();

    // Digit runs with their byte-independent char positions.
    let mut runs: Vec<(usize, usize)> = Vec::new(); // (start, len)
    let mut i = 0;
    while i < chars.len() {
        if chars[i].is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            runs.push((start, i - start));
        } else {
            i += 1;
        }
    }

    for pair in runs.windows(2) {
        let (s1, l1) = pair[0];
        let (s2, l2) = pair[1];
        // Exactly one separator char between the two runs.
        if s2 != s1 + l1 + 1 {
            continue;
        }
        let sep = chars[s1 + l1];
        if sep != '-' && sep != '.' && sep != '/' {
            continue;
        }
        let a: String = chars[s1..s1 + l1].iter().collect();
        let b: String = chars[s2..s2 + l2].iter().collect();

        let (year, month) = match (l1, l2) {
            (4, 2) => (a.parse::<i32>(), b.parse::<u32>()),
            (2, 4) => (b.parse::<i32>(), a.parse::<u32>()),
            _ => continue,
        };
        if let (Ok(y), Ok(m)) = (year, month) {
            if (1..=12).contains(&m) && y >= 1000 {
                return format!("{:04}-{:02}", y, m);
            }
        }
    }

    UNKNOWN_PERIOD.to_string()
}

/// German display label for a canonical period key.
pub fn month_label(period_key: &str) -> String {
    let mut parts = period_key.splitn(2, '-');
    let year = parts.next().unwrap_or_default();
    let month: usize = parts
        .next()
        .and_then(|m| m.parse().ok())
        .unwrap_or(0);
    if !(1..=12).contains(&month) || year == "0000" {
        return "Unbekannt".to_string();
    }
    format!("{} {}", MONTH_NAMES_DE[month - 1], year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_month_year() {
        assert_eq!(normalize_period_key("Croco_Sales_11-2025.xlsx"), "2025-11");
        assert_eq!(normalize_period_key("report 01/2024 final"), "2024-01");
    }

    #[test]
    fn cell_year_month() {
        assert_eq!(normalize_period_key("2025-11"), "2025-11");
        assert_eq!(normalize_period_key("Stand: 2024.06"), "2024-06");
    }

    #[test]
    fn invalid_month_or_noise_is_sentinel() {
        assert_eq!(normalize_period_key("13-2025"), UNKNOWN_PERIOD);
        assert_eq!(normalize_period_key("kein Datum"), UNKNOWN_PERIOD);
        assert_eq!(normalize_period_key(""), UNKNOWN_PERIOD);
        // Sentinel sorts before any real key.
        assert!(UNKNOWN_PERIOD < "2020-01");
    }

    #[test]
    fn labels() {
        assert_eq!(month_label("2025-11"), "November 2025");
        assert_eq!(month_label(UNKNOWN_PERIOD), "Unbekannt");
    }
}
