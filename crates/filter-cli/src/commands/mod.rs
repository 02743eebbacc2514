//! Command implementations for filter-cli

pub mod apply;
pub mod export;

pub use apply::run_apply;
pub use export::run_export;
