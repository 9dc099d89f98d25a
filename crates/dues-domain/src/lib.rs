//! dues-domain
//!
//! Pure domain models (Lot, Contribution, Expense, QuotaConfig) and the report
//! structures produced by reconciliation.
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod balance;
pub mod common;
pub mod contribution;
pub mod expense;
pub mod lot;
pub mod quota;

pub use balance::*;
pub use common::*;
pub use contribution::*;
pub use expense::*;
pub use lot::*;
pub use quota::*;
