//! D'Agostino-Pearson omnibus test for normality
//!
//! Combines a skewness test (D'Agostino, 1970) and a kurtosis test
//! (Anscombe & Glynn, 1983) into K² = Z_skew² + Z_kurt², referred to a
//! chi-square distribution with two degrees of freedom.

use tracing::warn;

use crate::descriptive::central_moments;
use crate::errors::{StatsError, StatsResult};
use crate::special::{chi_square_tail_probability, normal_cdf};

/// Result of the skewness or kurtosis component test
#[derive(Debug, Clone, PartialEq)]
pub struct MomentTestResult {
    /// Normal deviate for the moment
    pub z: f64,
    /// Two-sided p-value
    pub p_value: f64,
}

/// Result of the omnibus normality test
#[derive(Debug, Clone, PartialEq)]
pub struct NormalTestResult {
    /// K² statistic
    pub statistic: f64,
    /// p-value for the test
    pub p_value: f64,
    /// Sample skewness
    pub skewness: f64,
    /// Sample kurtosis (excess)
    pub kurtosis: f64,
    /// Skewness component
    pub skew_test: MomentTestResult,
    /// Kurtosis component
    pub kurtosis_test: MomentTestResult,
    /// Number of observations
    pub n: usize,
}

fn validate(data: &[f64], context: &'static str, required: usize) -> StatsResult<(f64, f64, f64)> {
    if data.len() < required {
        return Err(StatsError::insufficient(context, required, data.len()));
    }
    if let Some(&bad) = data.iter().find(|x| !x.is_finite()) {
        return Err(StatsError::invalid(context, "value", bad));
    }
    let moments = central_moments(data);
    if moments.0 <= 0.0 {
        return Err(StatsError::InadequateVariability(format!(
            "{} is undefined for zero variance",
            context
        )));
    }
    Ok(moments)
}

fn finite_deviate(z: f64, context: &'static str, n: usize) -> StatsResult<f64> {
    if z.is_finite() {
        Ok(z)
    } else {
        Err(StatsError::invalid(context, "n", n as f64))
    }
}

/// Test whether the skewness differs from that of a normal distribution
pub fn skew_test(data: &[f64]) -> StatsResult<MomentTestResult> {
    let (m2, m3, _) = validate(data, "skew test", 3)?;
    let n = data.len() as f64;

    let b2 = m3 / m2.powf(1.5);
    let y = b2 * ((n + 1.0) * (n + 3.0) / (6.0 * (n - 2.0))).sqrt();
    let beta2 = 3.0 * (n * n + 27.0 * n - 70.0) * (n + 1.0) * (n + 3.0)
        / ((n - 2.0) * (n + 5.0) * (n + 7.0) * (n + 9.0));
    let w2 = -1.0 + (2.0 * (beta2 - 1.0)).sqrt();
    let delta = 1.0 / w2.sqrt().ln().sqrt();
    let alpha = (2.0 / (w2 - 1.0)).sqrt();
    let y = if y == 0.0 { 1.0 } else { y };
    let ratio = y / alpha;
    let z = finite_deviate(
        delta * (ratio + (ratio * ratio + 1.0).sqrt()).ln(),
        "skew test",
        data.len(),
    )?;

    Ok(MomentTestResult {
        z,
        p_value: 2.0 * (1.0 - normal_cdf(z)?),
    })
}

/// Test whether the kurtosis differs from that of a normal distribution
///
/// Warns when fewer than 20 values are supplied.
pub fn kurtosis_test(data: &[f64]) -> StatsResult<MomentTestResult> {
    let (m2, _, m4) = validate(data, "kurtosis test", 4)?;
    let n = data.len() as f64;
    if data.len() < 20 {
        warn!(n = data.len(), "kurtosis test is only valid for n >= 20");
    }

    let b2 = m4 / (m2 * m2);
    let expected = 3.0 * (n - 1.0) / (n + 1.0);
    let var_b2 = 24.0 * n * (n - 2.0) * (n - 3.0)
        / ((n + 1.0) * (n + 1.0) * (n + 3.0) * (n + 5.0));
    let x = (b2 - expected) / var_b2.sqrt();
    let sqrt_beta1 = 6.0 * (n * n - 5.0 * n + 2.0) / ((n + 7.0) * (n + 9.0))
        * (6.0 * (n + 3.0) * (n + 5.0) / (n * (n - 2.0) * (n - 3.0))).sqrt();
    let a = 6.0
        + 8.0 / sqrt_beta1 * (2.0 / sqrt_beta1 + (1.0 + 4.0 / (sqrt_beta1 * sqrt_beta1)).sqrt());
    let term1 = 1.0 - 2.0 / (9.0 * a);
    let denom = 1.0 + x * (2.0 / (a - 4.0)).sqrt();
    // a non-positive denominator leaves no cube root to take; the deviate is 0
    let z = if denom <= 0.0 {
        0.0
    } else {
        let term2 = ((1.0 - 2.0 / a) / denom).cbrt();
        (term1 - term2) / (2.0 / (9.0 * a)).sqrt()
    };
    let z = finite_deviate(z, "kurtosis test", data.len())?;

    Ok(MomentTestResult {
        z,
        p_value: 2.0 * (1.0 - normal_cdf(z)?),
    })
}

/// D'Agostino-Pearson test for normality
///
/// # Arguments
/// * `data` - Sample data; every value must be finite
///
/// # Errors
/// Fails for fewer than 4 values, non-finite values, zero variance, or a
/// sample size at which the moment transforms are undefined.
pub fn normal_test(data: &[f64]) -> StatsResult<NormalTestResult> {
    let (m2, m3, m4) = validate(data, "normality test", 4)?;
    let skew = skew_test(data)?;
    let kurt = kurtosis_test(data)?;
    let statistic = skew.z * skew.z + kurt.z * kurt.z;

    Ok(NormalTestResult {
        statistic,
        p_value: chi_square_tail_probability(statistic, 2)?,
        skewness: m3 / m2.powf(1.5),
        kurtosis: m4 / (m2 * m2) - 3.0,
        skew_test: skew,
        kurtosis_test: kurt,
        n: data.len(),
    })
}
