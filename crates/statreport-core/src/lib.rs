//! statreport-core: Statistical computation engine for statreport
//!
//! This crate computes the descriptive summaries, hypothesis tests and worked
//! examples behind a statistical report. Every function is a pure computation
//! over immutable samples; precision-sensitive operations take a
//! [`Precision`] and run either in `f64` or in `rust_decimal::Decimal`.

pub mod descriptive;
pub mod diagnostics;
pub mod errors;
pub mod format;
pub mod models;
pub mod numeric;
pub mod ranking;
pub mod special;
pub mod tests;
pub mod types;
pub mod worked;

pub use errors::{StatsError, StatsResult};
pub use numeric::{Number, Numeric};
pub use types::*;
