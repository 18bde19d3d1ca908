pub mod engine;
pub mod filter;
