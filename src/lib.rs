#![doc(test(attr(deny(warnings))))]

//! Dues Engine reconciles lot dues for a residential community: per-fund
//! income and expense balances, and per-lot outstanding debt and status.
//!
//! The computation lives in `dues-core`; this crate wires it to the JSON
//! storage, the persisted configuration and the `dues_report` binary.

pub mod cli;
pub mod errors;
pub mod report;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    init_with_filter(None);
}

/// Initializes global tracing with an optional extra filter directive.
pub fn init_with_filter(directive: Option<&str>) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing(directive);
        tracing::debug!("Dues Engine tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
