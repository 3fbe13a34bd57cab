pub mod commission;
pub mod config;
pub mod data;
pub mod llm;
pub mod numeric;
pub mod period;
pub mod sales;
pub mod state;
pub mod wca;
