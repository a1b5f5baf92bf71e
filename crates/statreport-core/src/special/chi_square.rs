use std::f64::consts::PI;

use super::normal::normal_cdf;
use crate::errors::{StatsError, StatsResult};

/// Exponents below `-BIG` are treated as underflowing to zero
const BIG: f64 = 20.0;

fn bounded_exp(x: f64) -> f64 {
    if x < -BIG {
        0.0
    } else {
        x.exp()
    }
}

/// Probability of a chi-square value at least as large as `chi_square` with
/// `df` degrees of freedom
///
/// Series evaluation after Hill and Pike (1967). Returns 1.0 for a
/// non-positive statistic or zero degrees of freedom.
///
/// # Errors
/// [`StatsError::InvalidParameter`] when `chi_square` is NaN.
pub fn chi_square_tail_probability(chi_square: f64, df: usize) -> StatsResult<f64> {
    if chi_square.is_nan() {
        return Err(StatsError::invalid("chi-square tail", "chi_square", chi_square));
    }
    if chi_square <= 0.0 || df < 1 {
        return Ok(1.0);
    }

    let a = 0.5 * chi_square;
    let even = df % 2 == 0;
    let y = bounded_exp(-a);
    let s = if even {
        y
    } else {
        2.0 * normal_cdf(-chi_square.sqrt())?
    };

    if df <= 2 {
        return Ok(s);
    }

    let limit = 0.5 * (df as f64 - 1.0);
    let mut z = if even { 1.0 } else { 0.5 };

    if a > BIG {
        let mut e = if even { 0.0 } else { PI.sqrt().ln() };
        let c = a.ln();
        let mut s = s;
        while z <= limit {
            e += z.ln();
            s += bounded_exp(c * z - a - e);
            z += 1.0;
        }
        Ok(s)
    } else {
        let mut e = if even { 1.0 } else { 1.0 / PI.sqrt() / a.sqrt() };
        let mut c = 0.0;
        while z <= limit {
            e *= a / z;
            c += e;
            z += 1.0;
        }
        Ok(c * y + s)
    }
}
