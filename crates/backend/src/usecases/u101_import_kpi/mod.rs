pub mod executor;

pub use executor::import_kpi_sheet;
