pub mod u101_import_kpi;
pub mod u102_import_sales;
