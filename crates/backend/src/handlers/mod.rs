pub mod coaching;
pub mod commission;
pub mod import;
pub mod periods;
pub mod sales;
pub mod wca;

use std::collections::HashMap;

use contracts::shared::period::MonthSnapshot;

/// Resolve the `periods` query parameter against the history: a
/// comma-separated list selects those keys, absence selects every
/// stored period.
pub(crate) fn select_periods(
    param: Option<&str>,
    history: &HashMap<String, MonthSnapshot>,
) -> Vec<String> {
    match param {
        Some(list) if !list.trim().is_empty() => list
            .split(',')
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect(),
        _ => {
            let mut keys: Vec<String> = history.keys().cloned().collect();
            keys.sort();
            keys
        }
    }
}
