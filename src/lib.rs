#![doc(test(attr(deny(warnings))))]

//! Pocket Ledger records income and expense transactions in a CSV table and
//! reports totals over inclusive date ranges.

pub mod cli;
pub mod config;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod query;
pub mod report;
pub mod services;
pub mod storage;
pub mod utils;
pub mod validation;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Pocket Ledger tracing initialized.");
    });
}

/// Version line including the build metadata captured by `build.rs`.
pub fn version_banner() -> String {
    format!(
        "pocket_ledger {} ({} {}, built {} for {})",
        env!("CARGO_PKG_VERSION"),
        env!("POCKET_LEDGER_BUILD_HASH"),
        env!("POCKET_LEDGER_BUILD_STATUS"),
        env!("POCKET_LEDGER_BUILD_TIMESTAMP"),
        env!("POCKET_LEDGER_BUILD_TARGET"),
    )
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }

    #[test]
    fn banner_names_the_package() {
        assert!(super::version_banner().starts_with("pocket_ledger "));
    }
}
