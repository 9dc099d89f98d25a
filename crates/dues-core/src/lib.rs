//! dues-core
//!
//! Reconciliation logic for lot dues: fund aggregation, quota debt
//! calculation and the storage-facing wrapper that degrades on read failures.
//! Depends on dues-domain. No CLI, no terminal I/O, no direct storage interactions.

pub mod debt_service;
pub mod error;
pub mod format;
pub mod fund_service;
pub mod reconciliation_service;
pub mod storage;
pub mod summary_service;
pub mod time;

pub use debt_service::*;
pub use error::CoreError;
pub use fund_service::*;
pub use reconciliation_service::*;
pub use summary_service::*;
