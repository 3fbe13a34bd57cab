pub mod period;
pub mod sales;
pub mod wca;
