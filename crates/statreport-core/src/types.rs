use std::fmt;

use crate::numeric::Number;

/// Arithmetic used for a computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    /// Native 64-bit floating point
    #[default]
    Standard,
    /// 28-digit decimal arithmetic (much slower)
    High,
}

/// A labelled sequence of numeric observations
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    label: String,
    values: Vec<f64>,
}

impl Sample {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A statistic that is either computed or carries the reason it could not be
#[derive(Debug, Clone, PartialEq)]
pub enum Stat<T> {
    Available(T),
    Unavailable(String),
}

impl<T> Stat<T> {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Stat::Unavailable(reason.into())
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Stat::Available(_))
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Stat::Available(value) => Some(value),
            Stat::Unavailable(_) => None,
        }
    }
}

impl<T: Copy> Stat<T> {
    pub fn value(&self) -> Option<T> {
        self.as_option().copied()
    }
}

impl<T: fmt::Display> fmt::Display for Stat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stat::Available(value) => write!(f, "{}", value),
            Stat::Unavailable(reason) => write!(f, "unavailable ({})", reason),
        }
    }
}

/// Descriptive summary of one numeric sample
#[derive(Debug, Clone, PartialEq)]
pub struct NumericSampleSummary {
    /// Sample label
    pub label: String,
    /// Number of observations
    pub n: usize,
    /// Arithmetic mean
    pub mean: Number,
    /// Standard deviation (N-1 denominator)
    pub std_dev: Number,
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
    /// Lower bound of the 95% confidence interval for the mean
    pub ci95_lower: Number,
    /// Upper bound of the 95% confidence interval for the mean
    pub ci95_upper: Number,
}

/// Summary with shape statistics and the raw values, for charting
#[derive(Debug, Clone, PartialEq)]
pub struct NumericSampleSummaryExt {
    pub summary: NumericSampleSummary,
    /// Sample skewness
    pub skew: Stat<f64>,
    /// Excess (Fisher) kurtosis
    pub kurtosis: Stat<f64>,
    /// p-value of the D'Agostino-Pearson normality test
    pub normality_p: Stat<f64>,
    pub values: Vec<f64>,
}

/// Summary of one sample in a rank-based test
#[derive(Debug, Clone, PartialEq)]
pub struct OrdinalSampleSummary {
    pub label: String,
    pub n: usize,
    /// Mean rank within the combined ranking (only for tests that rank samples jointly)
    pub mean_rank: Option<f64>,
    pub median: f64,
    pub min: f64,
    pub max: f64,
}

/// Options for ranking
#[derive(Debug, Clone)]
pub struct RankOptions {
    /// Number of values above which ranking is refused unless `high_volume_ok`
    pub max_values: usize,
    /// Rank anyway when `max_values` is exceeded
    pub high_volume_ok: bool,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            max_values: 100_000,
            high_volume_ok: false,
        }
    }
}

/// Options for O'Brien's test for homogeneity of variance
#[derive(Debug, Clone)]
pub struct ObrienOptions {
    /// Largest permitted amount by which a sample's variance may exceed the
    /// mean of its transformed values
    pub tolerance: f64,
    /// Compare the absolute gap against `tolerance · max(1, |variance|)`
    /// instead of the fixed one-sided `variance - mean > tolerance` check.
    /// The fixed check rejects most data with values above about 1000.
    pub relative: bool,
}

impl Default for ObrienOptions {
    fn default() -> Self {
        Self {
            tolerance: 1e-7,
            relative: false,
        }
    }
}

/// Options for worked-example builders
#[derive(Debug, Clone)]
pub struct WorkedExampleOptions {
    /// Rows kept before the remainder is summarised as "not shown"
    pub max_display_rows: usize,
}

impl Default for WorkedExampleOptions {
    fn default() -> Self {
        Self {
            max_display_rows: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_accessors() {
        let ok: Stat<f64> = Stat::Available(1.5);
        let missing: Stat<f64> = Stat::unavailable("zero variance");
        assert_eq!(ok.value(), Some(1.5));
        assert!(!missing.is_available());
        assert_eq!(missing.to_string(), "unavailable (zero variance)");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Precision::default(), Precision::Standard);
        assert_eq!(RankOptions::default().max_values, 100_000);
        assert_eq!(ObrienOptions::default().tolerance, 1e-7);
        assert!(!ObrienOptions::default().relative);
        assert_eq!(WorkedExampleOptions::default().max_display_rows, 50);
    }
}
