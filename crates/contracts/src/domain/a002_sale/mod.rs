pub mod aggregate;

pub use aggregate::SaleRow;
