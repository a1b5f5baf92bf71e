//! Sample summaries reported alongside every parametric test

use rust_decimal::Decimal;
use tracing::warn;

use crate::diagnostics::normal_test;
use crate::errors::{StatsError, StatsResult};
use crate::numeric::{mean_in, standard_deviation_in, Number, Numeric};
use crate::types::{NumericSampleSummary, NumericSampleSummaryExt, Precision, Sample, Stat};

/// Sample size below which the normal approximation behind the 95%
/// confidence interval is flagged
const CI_MIN_SAMPLE: usize = 30;

/// Second, third and fourth central moments (N denominator)
pub(crate) fn central_moments(data: &[f64]) -> (f64, f64, f64) {
    let n = data.len() as f64;
    let mean = data.iter().sum::<f64>() / n;

    let mut m2 = 0.0;
    let mut m3 = 0.0;
    let mut m4 = 0.0;
    for &x in data {
        let d = x - mean;
        let d2 = d * d;
        m2 += d2;
        m3 += d2 * d;
        m4 += d2 * d2;
    }

    (m2 / n, m3 / n, m4 / n)
}

/// Sample skewness m3 / m2^1.5
///
/// # Errors
/// [`StatsError::InadequateVariability`] when all values are equal.
pub fn skew(data: &[f64]) -> StatsResult<f64> {
    if data.is_empty() {
        return Err(StatsError::insufficient("skew", 1, 0));
    }
    let (m2, m3, _) = central_moments(data);
    if m2 <= 0.0 {
        return Err(StatsError::InadequateVariability(
            "skew is undefined for zero variance".into(),
        ));
    }
    Ok(m3 / m2.powf(1.5))
}

/// Excess (Fisher) kurtosis m4 / m2² - 3
///
/// # Errors
/// [`StatsError::InadequateVariability`] when all values are equal.
pub fn kurtosis(data: &[f64]) -> StatsResult<f64> {
    if data.is_empty() {
        return Err(StatsError::insufficient("kurtosis", 1, 0));
    }
    let (m2, _, m4) = central_moments(data);
    if m2 <= 0.0 {
        return Err(StatsError::InadequateVariability(
            "kurtosis is undefined for zero variance".into(),
        ));
    }
    Ok(m4 / (m2 * m2) - 3.0)
}

/// Median; the mean of the two middle values for an even count
pub fn median(data: &[f64]) -> StatsResult<f64> {
    if data.is_empty() {
        return Err(StatsError::insufficient("median", 1, 0));
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Ok(sorted[mid])
    }
}

/// Smallest and largest value
pub(crate) fn min_max(data: &[f64]) -> (f64, f64) {
    data.iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
            (lo.min(x), hi.max(x))
        })
}

pub(crate) fn ci95_in<N: Numeric>(mean: N, std_dev: N, n: usize) -> StatsResult<(N, N)> {
    if n < CI_MIN_SAMPLE {
        warn!(n, "sample size below 30, 95% confidence interval uses a normal approximation");
    }
    let root_n = N::from_usize(n).sqrt()?;
    let margin = N::constant("1.96")?.try_mul(std_dev)?.try_div(root_n)?;
    Ok((mean.try_sub(margin)?, mean.try_add(margin)?))
}

/// 95% confidence interval for a mean: mean ± 1.96·sd/√n
///
/// Emits a warning for samples smaller than 30, where the normal
/// approximation is unreliable.
pub fn confidence_interval_95(
    mean: Number,
    std_dev: Number,
    n: usize,
) -> StatsResult<(Number, Number)> {
    if n == 0 {
        return Err(StatsError::insufficient("confidence interval", 1, 0));
    }
    match (mean, std_dev) {
        (Number::Decimal(m), Number::Decimal(s)) => {
            let (lo, hi) = ci95_in(m, s, n)?;
            Ok((lo.into(), hi.into()))
        }
        (m, s) => {
            let (lo, hi) = ci95_in(m.to_f64(), s.to_f64(), n)?;
            Ok((lo.into(), hi.into()))
        }
    }
}

fn summarize_in<N: Numeric>(sample: &Sample) -> StatsResult<NumericSampleSummary> {
    let values = sample.values();
    if values.len() < 2 {
        return Err(StatsError::insufficient("sample summary", 2, values.len()));
    }
    let mean = mean_in::<N>(values)?;
    let std_dev = standard_deviation_in::<N>(values)?;
    let (ci95_lower, ci95_upper) = ci95_in(mean, std_dev, values.len())?;
    let (min, max) = min_max(values);
    Ok(NumericSampleSummary {
        label: sample.label().to_string(),
        n: values.len(),
        mean: mean.into_number(),
        std_dev: std_dev.into_number(),
        min,
        max,
        ci95_lower: ci95_lower.into_number(),
        ci95_upper: ci95_upper.into_number(),
    })
}

/// Size, mean, standard deviation, range and 95% confidence interval
///
/// # Errors
/// [`StatsError::InsufficientData`] for fewer than two values.
pub fn summarize_sample(sample: &Sample, precision: Precision) -> StatsResult<NumericSampleSummary> {
    match precision {
        Precision::Standard => summarize_in::<f64>(sample),
        Precision::High => summarize_in::<Decimal>(sample),
    }
}

fn stat_from<T>(result: StatsResult<T>) -> Stat<T> {
    match result {
        Ok(value) => Stat::Available(value),
        Err(err) => Stat::Unavailable(err.to_string()),
    }
}

/// [`summarize_sample`] plus skew, kurtosis, the normality p-value and the
/// raw values
///
/// Shape statistics that cannot be computed are reported as
/// [`Stat::Unavailable`] rather than failing the summary.
pub fn summarize_sample_ext(
    sample: &Sample,
    precision: Precision,
) -> StatsResult<NumericSampleSummaryExt> {
    let summary = summarize_sample(sample, precision)?;
    let values = sample.values();
    Ok(NumericSampleSummaryExt {
        summary,
        skew: stat_from(skew(values)),
        kurtosis: stat_from(kurtosis(values)),
        normality_p: stat_from(normal_test(values).map(|result| result.p_value)),
        values: values.to_vec(),
    })
}
