pub mod sheet_import;

pub use sheet_import::{ImportResult, SheetData, SheetMetadata};
