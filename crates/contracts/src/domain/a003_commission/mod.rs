pub mod aggregate;

pub use aggregate::{DealType, OverrideKey, RateEntry};
