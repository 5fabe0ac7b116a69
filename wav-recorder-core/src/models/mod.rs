pub mod config;
pub mod error;
pub mod export_result;
pub mod state;
