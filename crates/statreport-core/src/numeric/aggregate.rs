//! Central tendency and dispersion in either precision mode

use rust_decimal::Decimal;

use super::{Number, Numeric};
use crate::errors::{StatsError, StatsResult};
use crate::types::Precision;

pub(crate) fn to_numeric<N: Numeric>(values: &[f64]) -> StatsResult<Vec<N>> {
    values.iter().map(|&v| N::from_f64(v)).collect()
}

pub(crate) fn sum_in<N: Numeric>(values: &[N]) -> StatsResult<N> {
    values.iter().try_fold(N::zero(), |acc, &v| acc.try_add(v))
}

pub(crate) fn mean_in<N: Numeric>(values: &[f64]) -> StatsResult<N> {
    if values.is_empty() {
        return Err(StatsError::insufficient("mean", 1, 0));
    }
    let converted = to_numeric::<N>(values)?;
    sum_in(&converted)?.try_div(N::from_usize(values.len()))
}

fn squared_deviations<N: Numeric>(values: &[f64]) -> StatsResult<N> {
    let converted = to_numeric::<N>(values)?;
    let mean = sum_in(&converted)?.try_div(N::from_usize(values.len()))?;
    converted.iter().try_fold(N::zero(), |acc, &v| {
        let deviation = v.try_sub(mean)?;
        acc.try_add(deviation.try_mul(deviation)?)
    })
}

/// Unbiased variance (N-1 denominator)
pub(crate) fn variance_in<N: Numeric>(values: &[f64]) -> StatsResult<N> {
    if values.len() < 2 {
        return Err(StatsError::insufficient("variance", 2, values.len()));
    }
    squared_deviations::<N>(values)?.try_div(N::from_usize(values.len() - 1))
}

pub(crate) fn standard_deviation_in<N: Numeric>(values: &[f64]) -> StatsResult<N> {
    variance_in::<N>(values)?.sqrt()
}

/// Population variance (N denominator)
fn sample_variance_in<N: Numeric>(values: &[f64]) -> StatsResult<N> {
    if values.is_empty() {
        return Err(StatsError::insufficient("sample variance", 1, 0));
    }
    squared_deviations::<N>(values)?.try_div(N::from_usize(values.len()))
}

fn dispatch(
    precision: Precision,
    standard: impl FnOnce() -> StatsResult<f64>,
    high: impl FnOnce() -> StatsResult<Decimal>,
) -> StatsResult<Number> {
    match precision {
        Precision::Standard => standard().map(Numeric::into_number),
        Precision::High => high().map(Numeric::into_number),
    }
}

/// Arithmetic mean
///
/// # Errors
/// [`StatsError::InsufficientData`] for an empty slice.
pub fn mean(values: &[f64], precision: Precision) -> StatsResult<Number> {
    dispatch(
        precision,
        || mean_in::<f64>(values),
        || mean_in::<Decimal>(values),
    )
}

/// Sum of squared values
pub fn sum_squares(values: &[f64], precision: Precision) -> StatsResult<Number> {
    fn sum_squares_in<N: Numeric>(values: &[f64]) -> StatsResult<N> {
        let converted = to_numeric::<N>(values)?;
        converted
            .iter()
            .try_fold(N::zero(), |acc, &v| acc.try_add(v.try_mul(v)?))
    }
    dispatch(
        precision,
        || sum_squares_in::<f64>(values),
        || sum_squares_in::<Decimal>(values),
    )
}

/// Unbiased variance using the N-1 denominator
///
/// # Errors
/// [`StatsError::InsufficientData`] when fewer than two values are given.
pub fn variance(values: &[f64], precision: Precision) -> StatsResult<Number> {
    dispatch(
        precision,
        || variance_in::<f64>(values),
        || variance_in::<Decimal>(values),
    )
}

/// Square root of [`variance`]
pub fn standard_deviation(values: &[f64], precision: Precision) -> StatsResult<Number> {
    dispatch(
        precision,
        || standard_deviation_in::<f64>(values),
        || standard_deviation_in::<Decimal>(values),
    )
}

/// Variance of the values taken as the whole population (N denominator)
pub fn sample_variance(values: &[f64], precision: Precision) -> StatsResult<Number> {
    dispatch(
        precision,
        || sample_variance_in::<f64>(values),
        || sample_variance_in::<Decimal>(values),
    )
}

/// Square root of [`sample_variance`]
pub fn sample_standard_deviation(values: &[f64], precision: Precision) -> StatsResult<Number> {
    dispatch(
        precision,
        || Numeric::sqrt(sample_variance_in::<f64>(values)?),
        || Numeric::sqrt(sample_variance_in::<Decimal>(values)?),
    )
}
