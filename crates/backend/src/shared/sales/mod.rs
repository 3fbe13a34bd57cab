pub mod aggregator;
pub mod merger;
