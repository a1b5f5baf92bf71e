use rust_decimal::Decimal;

use crate::errors::{StatsError, StatsResult};
use crate::numeric::{Number, Numeric};
use crate::types::Precision;

const LANCZOS_COEFFICIENTS: [&str; 6] = [
    "76.18009173",
    "-86.50532033",
    "24.01409822",
    "-1.231739516",
    "0.00120858003",
    "-0.00000536382",
];

const SQRT_TWO_PI: &str = "2.50662827465";

pub(crate) fn log_gamma_in<N: Numeric>(xx: N) -> StatsResult<N> {
    if xx <= N::zero() {
        return Err(StatsError::invalid("log gamma", "x", xx.to_f64()));
    }
    let one = N::one();
    let mut x = xx.try_sub(one)?;
    let tmp = x.try_add(N::constant("5.5")?)?;
    let tmp = tmp.try_sub(x.try_add(N::constant("0.5")?)?.try_mul(tmp.ln()?)?)?;
    let mut series = one;
    for coefficient in LANCZOS_COEFFICIENTS {
        x = x.try_add(one)?;
        series = series.try_add(N::constant(coefficient)?.try_div(x)?)?;
    }
    (-tmp).try_add(N::constant(SQRT_TWO_PI)?.try_mul(series)?.ln()?)
}

/// Natural logarithm of the gamma function for `x > 0`
///
/// Uses the six-term Lanczos series (accurate to about 1e-10 for `x > 1`).
pub fn log_gamma(x: f64, precision: Precision) -> StatsResult<Number> {
    match precision {
        Precision::Standard => log_gamma_in(x).map(Numeric::into_number),
        Precision::High => log_gamma_in(<Decimal as Numeric>::from_f64(x)?).map(Numeric::into_number),
    }
}
