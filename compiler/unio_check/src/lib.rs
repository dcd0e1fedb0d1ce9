//! Union coverage and pattern exhaustiveness checking.
//!
//! [`analyze`] is the entry point: given a declared union and a literal list
//! of match cases it
//!
//! 1. extracts the [`PatternType`](unio_patterns::PatternType)s of every case,
//! 2. binds each case to the union members it can match (membership),
//! 3. checks that every required member is touched by some case (coverage),
//! 4. checks that the cases touching a member cover all of its values
//!    (exhaustiveness, see [`ExhaustivenessChecker`]).
//!
//! Every problem of one call is reported together. The only exception is a
//! pattern shape the extractor cannot model, which stops the analysis at once.
//!
//! [`check_membership`] and [`check_narrowing`] are the single-query helpers
//! used when a handle typed by a union is sent a value or narrowed to a
//! sub-union.

mod analyze;
mod config;
mod exhaustiveness;
mod membership;
mod request;

pub use analyze::{analyze, AnalysisSession};
pub use config::{CheckConfig, GuardPolicy};
pub use exhaustiveness::{Coverage, ExhaustivenessChecker, Limit};
pub use membership::{check_membership, check_narrowing};
pub use request::{
    Analysis, AnalysisFailure, AnalysisRequest, Completeness, MatchResult, MatchTable,
    SubCoverage,
};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=unio_check=debug` or
/// `RUST_LOG=unio_check=trace,unio_patterns=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
