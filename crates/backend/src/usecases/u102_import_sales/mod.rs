pub mod executor;

pub use executor::import_sales_sheet;
