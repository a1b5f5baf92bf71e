//! Simple (one-predictor) least-squares regression

use crate::errors::{StatsError, StatsResult};
use crate::numeric::sample_standard_deviation;
use crate::special::incomplete_beta;
use crate::types::Precision;

/// Guard against division by zero when r is exactly ±1
const TINY: f64 = 1.0e-20;

/// Raw sums shared by the Pearson correlation and the regression fit
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PairedSums {
    pub n: usize,
    pub sum_x: f64,
    pub sum_y: f64,
    pub sum_xy: f64,
    pub sum_x2: f64,
    pub sum_y2: f64,
}

impl PairedSums {
    pub fn new(x: &[f64], y: &[f64], context: &'static str) -> StatsResult<Self> {
        if x.len() != y.len() {
            return Err(StatsError::MismatchedSampleSize {
                context,
                len_a: x.len(),
                len_b: y.len(),
            });
        }
        let mut sums = Self {
            n: x.len(),
            sum_x: 0.0,
            sum_y: 0.0,
            sum_xy: 0.0,
            sum_x2: 0.0,
            sum_y2: 0.0,
        };
        for (&a, &b) in x.iter().zip(y) {
            sums.sum_x += a;
            sums.sum_y += b;
            sums.sum_xy += a * b;
            sums.sum_x2 += a * a;
            sums.sum_y2 += b * b;
        }
        Ok(sums)
    }

    /// nΣxy - ΣxΣy
    pub fn r_numerator(&self) -> f64 {
        self.n as f64 * self.sum_xy - self.sum_x * self.sum_y
    }

    /// nΣx² - (Σx)²
    pub fn x_spread(&self) -> f64 {
        self.n as f64 * self.sum_x2 - self.sum_x * self.sum_x
    }

    /// nΣy² - (Σy)²
    pub fn y_spread(&self) -> f64 {
        self.n as f64 * self.sum_y2 - self.sum_y * self.sum_y
    }

    pub fn r_denominator(&self) -> f64 {
        (self.x_spread() * self.y_spread()).sqrt()
    }

    /// Pearson's r, failing when either variable is constant
    pub fn r(&self, context: &'static str) -> StatsResult<f64> {
        let den = self.r_denominator();
        if den == 0.0 || den.is_nan() {
            return Err(StatsError::DegenerateGroup(format!(
                "{}: limited variability in one dimension",
                context
            )));
        }
        // rounding can push a perfect correlation just past ±1
        Ok((self.r_numerator() / den).clamp(-1.0, 1.0))
    }
}

/// t statistic and two-tailed p for a correlation coefficient with `df`
/// degrees of freedom
pub(crate) fn correlation_t_test(r: f64, df: usize, tiny: f64) -> StatsResult<(f64, f64)> {
    let df = df as f64;
    let t = r * (df / ((1.0 - r + tiny) * (1.0 + r + tiny))).sqrt();
    let denominator = df + t * t;
    if denominator == 0.0 || !denominator.is_finite() {
        return Err(StatsError::DegenerateGroup(
            "correlation t statistic is undefined".into(),
        ));
    }
    let p = incomplete_beta(0.5 * df, 0.5, df / denominator, Precision::Standard)?.to_f64();
    Ok((t, p))
}

/// Least-squares fit of y on x
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegression {
    pub slope: f64,
    pub intercept: f64,
    /// Pearson's r
    pub r: f64,
    /// Two-tailed p-value for the slope
    pub p_value: f64,
    /// Standard error of the estimate
    pub std_err_estimate: f64,
}

/// Regression line end points for charting
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionLine {
    pub slope: f64,
    pub intercept: f64,
    pub r: f64,
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

/// Fit a straight line to paired observations
///
/// # Arguments
/// * `x` - Predictor values
/// * `y` - Response values, paired with `x`
///
/// # Returns
/// * `LinearRegression` with slope, intercept, r, p-value and the standard
///   error of the estimate
pub fn linear_regression(x: &[f64], y: &[f64]) -> StatsResult<LinearRegression> {
    let sums = PairedSums::new(x, y, "linear regression")?;
    if sums.n < 3 {
        return Err(StatsError::insufficient("linear regression", 3, sums.n));
    }

    let r = sums.r("linear regression")?;
    let (_, p_value) = correlation_t_test(r, sums.n - 2, TINY)?;
    let slope = sums.r_numerator() / sums.x_spread();
    let n = sums.n as f64;
    let intercept = sums.sum_y / n - slope * sums.sum_x / n;
    let std_err_estimate = (1.0 - r * r).max(0.0).sqrt()
        * sample_standard_deviation(y, Precision::Standard)?.to_f64();

    Ok(LinearRegression {
        slope,
        intercept,
        r,
        p_value,
        std_err_estimate,
    })
}

/// Fit a straight line and return its end points over the range of x
pub fn regression_line(x: &[f64], y: &[f64]) -> StatsResult<RegressionLine> {
    let fit = linear_regression(x, y)?;
    let (x0, x1) = x
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    Ok(RegressionLine {
        slope: fit.slope,
        intercept: fit.intercept,
        r: fit.r,
        x0,
        y0: x0 * fit.slope + fit.intercept,
        x1,
        y1: x1 * fit.slope + fit.intercept,
    })
}
