pub mod filter;
pub mod upload;
