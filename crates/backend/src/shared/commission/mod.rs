pub mod rate_table;
pub mod resolver;
