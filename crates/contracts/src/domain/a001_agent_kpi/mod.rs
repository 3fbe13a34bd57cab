pub mod aggregate;

pub use aggregate::KpiAgent;
