use crate::errors::{StatsError, StatsResult};

/// |z| beyond which the cumulative probability is taken as 0 or 1
pub const Z_MAX: f64 = 6.0;

const INNER: [f64; 9] = [
    0.000124818987,
    -0.001075204047,
    0.005198775019,
    -0.019198292004,
    0.059054035642,
    -0.151968751364,
    0.319152932694,
    -0.531923007300,
    0.797884560593,
];

const OUTER: [f64; 15] = [
    -0.000045255659,
    0.000152529290,
    -0.000019538132,
    -0.000676904986,
    0.001390604284,
    -0.000794620820,
    -0.002034254874,
    0.006549791214,
    -0.010557625006,
    0.011630447319,
    -0.009279453341,
    0.005353579108,
    -0.002141268741,
    0.000535310849,
    0.999936657524,
];

fn horner(coefficients: &[f64], y: f64) -> f64 {
    coefficients.iter().fold(0.0, |acc, &c| acc * y + c)
}

/// Area under the standard normal curve to the left of `z`
///
/// Polynomial approximation (Ibbetson, 1963) accurate to about 1e-6.
pub fn normal_cdf(z: f64) -> StatsResult<f64> {
    if z.is_nan() {
        return Err(StatsError::invalid("normal cdf", "z", z));
    }
    let y = 0.5 * z.abs();
    let x = if y >= 0.5 * Z_MAX {
        1.0
    } else if y < 1.0 {
        let w = y * y;
        horner(&INNER, w) * y * 2.0
    } else {
        horner(&OUTER, y - 2.0)
    };
    Ok(if z > 0.0 { (x + 1.0) * 0.5 } else { (1.0 - x) * 0.5 })
}

/// Area under the standard normal curve to the right of `z`
pub fn normal_cdf_complement(z: f64) -> StatsResult<f64> {
    Ok(1.0 - normal_cdf(z)?)
}
