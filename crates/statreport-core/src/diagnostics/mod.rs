//! Distribution diagnostics for sample summaries

mod normality;

pub use normality::{kurtosis_test, normal_test, skew_test, MomentTestResult, NormalTestResult};
