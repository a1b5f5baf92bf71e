//! Regression models

mod regression;

pub(crate) use regression::{correlation_t_test, PairedSums};
pub use regression::{linear_regression, regression_line, LinearRegression, RegressionLine};
