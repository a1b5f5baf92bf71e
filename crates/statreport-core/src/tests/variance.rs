//! O'Brien's test for homogeneity of variance
//!
//! Each value is replaced by O'Brien's transform of its deviation from the
//! sample mean; the transformed sample's mean equals the sample variance, so
//! a one-way ANOVA on the transformed samples tests whether the variances
//! differ.

use tracing::debug;

use super::parametric::anova_p_only;
use crate::errors::{StatsError, StatsResult};
use crate::format::format_p_value;
use crate::numeric::{mean_in, variance_in};
use crate::types::{ObrienOptions, Precision};

/// Message used when the homogeneity test cannot be computed
pub const HOMOGENEITY_UNAVAILABLE: &str =
    "Unable to calculate O'Brien's test for homogeneity of variance";

/// Outcome of the homogeneity-of-variance check attached to ANOVA and t-test
/// results
#[derive(Debug, Clone, PartialEq)]
pub enum Homogeneity {
    /// p-value of O'Brien's test
    Calculated { p: f64 },
    /// The test could not be run; the reason is the underlying error
    Unavailable { reason: String },
}

impl Homogeneity {
    /// Display text: the formatted p-value or a fixed "unable to calculate"
    /// message
    pub fn message(&self) -> String {
        match self {
            Homogeneity::Calculated { p } => format_p_value(*p),
            Homogeneity::Unavailable { .. } => HOMOGENEITY_UNAVAILABLE.to_string(),
        }
    }

    pub fn p_value(&self) -> Option<f64> {
        match self {
            Homogeneity::Calculated { p } => Some(*p),
            Homogeneity::Unavailable { .. } => None,
        }
    }
}

/// Apply O'Brien's transform to every sample
///
/// For a sample of size n with mean m and variance v, each value x becomes
/// ((n - 1.5)·n·(x - m)² - 0.5·v·(n - 1)) / ((n - 1)(n - 2)).
///
/// # Errors
/// * [`StatsError::InsufficientData`] when a sample has fewer than 3 values
/// * [`StatsError::Convergence`] when the sample variance exceeds the mean of
///   the transformed sample by more than `options.tolerance`, or with
///   `options.relative` when they differ by more than the tolerance scaled by
///   the variance
pub fn obrien_transform(
    samples: &[&[f64]],
    options: &ObrienOptions,
) -> StatsResult<Vec<Vec<f64>>> {
    samples
        .iter()
        .map(|values| {
            let n = values.len();
            if n < 3 {
                return Err(StatsError::insufficient("O'Brien transform", 3, n));
            }
            let mean = mean_in::<f64>(values)?;
            let variance = variance_in::<f64>(values)?;
            let nf = n as f64;

            let transformed: Vec<f64> = values
                .iter()
                .map(|&x| {
                    let t1 = (nf - 1.5) * nf * (x - mean) * (x - mean);
                    let t2 = 0.5 * variance * (nf - 1.0);
                    let t3 = (nf - 1.0) * (nf - 2.0);
                    (t1 - t2) / t3
                })
                .collect();

            let transformed_mean = mean_in::<f64>(&transformed)?;
            if !converged(variance, transformed_mean, options) {
                debug!(variance, transformed_mean, "O'Brien transform did not converge");
                return Err(StatsError::Convergence {
                    context: "O'Brien transform",
                    tolerance: options.tolerance,
                });
            }
            Ok(transformed)
        })
        .collect()
}

fn converged(variance: f64, transformed_mean: f64, options: &ObrienOptions) -> bool {
    if options.relative {
        (variance - transformed_mean).abs() <= options.tolerance * variance.abs().max(1.0)
    } else {
        variance - transformed_mean <= options.tolerance
    }
}

/// p-value of O'Brien's test across all samples
pub fn obrien_test(
    samples: &[&[f64]],
    precision: Precision,
    options: &ObrienOptions,
) -> StatsResult<f64> {
    let transformed = obrien_transform(samples, options)?;
    let refs: Vec<&[f64]> = transformed.iter().map(Vec::as_slice).collect();
    Ok(anova_p_only(&refs, precision)?.to_f64())
}

/// Run O'Brien's test, converting any failure into
/// [`Homogeneity::Unavailable`]
pub fn homogeneity_of_variance(
    samples: &[&[f64]],
    precision: Precision,
    options: &ObrienOptions,
) -> Homogeneity {
    match obrien_test(samples, precision, options) {
        Ok(p) => Homogeneity::Calculated { p },
        Err(err) => {
            debug!(error = %err, "homogeneity of variance unavailable");
            Homogeneity::Unavailable {
                reason: err.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_transform_mean_equals_variance() {
        let a = [2.0, 4.0, 4.0, 5.0, 9.0];
        let transformed = obrien_transform(&[&a], &ObrienOptions::default()).unwrap();
        let mean = transformed[0].iter().sum::<f64>() / transformed[0].len() as f64;
        let variance = variance_in::<f64>(&a).unwrap();
        assert_relative_eq!(mean, variance, epsilon = 1e-10);
    }

    #[test]
    fn test_equal_spread_gives_high_p() {
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = [11.0, 12.0, 13.0, 14.0, 15.0];
        let p = obrien_test(&[&a, &b], Precision::Standard, &ObrienOptions::default()).unwrap();
        assert_relative_eq!(p, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_different_spread_gives_low_p() {
        let a = [10.0, 10.1, 9.9, 10.0, 10.05, 9.95, 10.0, 10.02, 9.98, 10.0];
        let b = [0.0, 20.0, 3.0, 17.0, 6.0, 14.0, 9.0, 11.0, -5.0, 25.0];
        let p = obrien_test(&[&a, &b], Precision::Standard, &ObrienOptions::default()).unwrap();
        assert!(p < 0.05);
    }

    #[test]
    fn test_small_sample_is_unavailable() {
        let a = [1.0, 2.0];
        let b = [3.0, 4.0, 5.0];
        let outcome =
            homogeneity_of_variance(&[&a, &b], Precision::Standard, &ObrienOptions::default());
        assert!(matches!(outcome, Homogeneity::Unavailable { .. }));
        assert_eq!(outcome.message(), HOMOGENEITY_UNAVAILABLE);
    }

    #[test]
    fn test_fixed_tolerance_is_one_sided() {
        let options = ObrienOptions::default();
        assert!(converged(4.0, 4.0 - 5e-8, &options));
        assert!(!converged(4.0, 4.0 - 2e-7, &options));
        // a transformed mean above the variance never fails the fixed check
        assert!(converged(4.0, 4.5, &options));
    }

    #[test]
    fn test_fixed_tolerance_rejects_large_magnitude_drift() {
        let fixed = ObrienOptions::default();
        let relative = ObrienOptions {
            relative: true,
            ..ObrienOptions::default()
        };
        // rounding drift of 1e-6 on a variance of two million
        let (variance, transformed_mean) = (2.0e6, 2.0e6 - 1e-6);
        assert!(!converged(variance, transformed_mean, &fixed));
        assert!(converged(variance, transformed_mean, &relative));
        assert!(!converged(variance, variance + 1.0, &relative));
    }

    #[test]
    fn test_relative_mode_transforms_ordinary_data() {
        let a = [2.0, 4.0, 4.0, 5.0, 9.0];
        let b = [1.0, 3.0, 8.0, 6.0];
        let relative = ObrienOptions {
            relative: true,
            ..ObrienOptions::default()
        };
        let fixed = obrien_transform(&[&a, &b], &ObrienOptions::default()).unwrap();
        let scaled = obrien_transform(&[&a, &b], &relative).unwrap();
        assert_eq!(fixed, scaled);
    }

    #[test]
    fn test_message_formats_p() {
        let outcome = Homogeneity::Calculated { p: 0.5 };
        assert_eq!(outcome.message(), "0.5000");
        assert_eq!(outcome.p_value(), Some(0.5));
    }
}
