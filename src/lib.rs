//! Cohort-normalized screening of researcher bibliometric profiles.
//!
//! `bibaudit` reads a delimited table of per-researcher citation indicators,
//! computes cohort-wide baselines (means and decile cut points) for a fixed
//! set of raw metrics and derived ratios, then screens each record against
//! those baselines and ranks the worst performers per indicator.
//!
//! The pipeline is a single synchronous pass: load and coerce the whole
//! table, compute the immutable [`Norms`], analyze each [`Record`], render
//! the reports. Baselines are always computed from the full dataset before
//! any record is analyzed.

use lazy_static::lazy_static;

pub mod analysis;
pub mod data;
pub mod error;
pub mod norms;
pub mod rank;
pub mod report;
pub mod stats;

pub use crate::analysis::{analyze_profile, Check, Flag};
pub use crate::data::{load_records, Record};
pub use crate::error::{Error, Result};
pub use crate::norms::{Norm, Norms};
pub use crate::rank::{worst_performers, Direction, Metric};

lazy_static! {
    static ref DEBUG_ENABLED: bool = std::env::var_os("BIBAUDIT_DEBUG").is_some();
}

/// Returns true if the `BIBAUDIT_DEBUG` environment variable is set.
pub(crate) fn debug_enabled() -> bool {
    *DEBUG_ENABLED
}
