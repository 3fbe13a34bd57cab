use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Pre-parsed spreadsheet payload handed over by the upload layer.
///
/// File parsing happens outside this system; what arrives here is one
/// loosely-typed map per data row, keyed by spreadsheet column letter
/// ("A", "B", ..., "AJ"). Header rows are already skipped by the
/// parser's range setting, but defensive row filtering still happens
/// in the executors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetData {
    pub metadata: SheetMetadata,
    pub rows: Vec<HashMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetMetadata {
    /// Original file name; the month key is usually extracted from it.
    pub file_name: String,
    pub row_count: usize,
}

/// Outcome of a sheet import.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    /// Canonical period the rows were filed under.
    pub period: String,
    pub imported_count: usize,
    pub skipped_count: usize,
}
