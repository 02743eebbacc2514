//! SyncEngine for reconciling the filter file with the remote service
//!
//! This module provides:
//! - **apply**: Delete every remote filter and re-create them from the file
//! - **export**: Decompile the remote filters back into a filter file

mod cancel;
mod engine;
mod report;

pub use cancel::CancelFlag;
pub use engine::SyncEngine;
pub use report::{ExportReport, SyncReport, SyncStage};
