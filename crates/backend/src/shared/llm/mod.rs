pub mod coaching;
pub mod openai_provider;
pub mod types;

pub use types::*;
