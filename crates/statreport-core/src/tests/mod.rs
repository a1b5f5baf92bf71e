//! Statistical hypothesis testing
//!
//! Every test is a pure function over immutable samples returning an
//! immutable result record. Labelled ("extended") results are produced from
//! the numeric ones with `with_labels`.

pub mod variance;

pub use variance::Homogeneity;

use crate::models::RegressionLine;
use crate::numeric::{Number, Numeric};
use crate::types::{NumericSampleSummary, NumericSampleSummaryExt, OrdinalSampleSummary};

use parametric::AnovaTable;

/// One-way ANOVA result
#[derive(Debug, Clone, PartialEq)]
pub struct AnovaResult {
    /// F statistic
    pub f_statistic: Number,
    /// p-value
    pub p_value: Number,
    /// p-value formatted for display
    pub p_text: String,
    /// Between-groups degrees of freedom
    pub df_between: usize,
    /// Within-groups degrees of freedom
    pub df_within: usize,
    /// Between-groups sum of squares
    pub ss_between: Number,
    /// Within-groups sum of squares
    pub ss_within: Number,
    /// Between-groups mean square
    pub ms_between: Number,
    /// Within-groups mean square
    pub ms_within: Number,
    /// Per-group summaries
    pub groups: Vec<NumericSampleSummaryExt>,
    /// O'Brien's test for homogeneity of variance
    pub homogeneity: Homogeneity,
}

impl AnovaResult {
    pub(crate) fn from_table<N: Numeric>(
        table: AnovaTable<N>,
        groups: Vec<NumericSampleSummaryExt>,
        homogeneity: Homogeneity,
    ) -> Self {
        let p_text = crate::format::format_p_value(table.p.to_f64());
        Self {
            f_statistic: table.f.into_number(),
            p_value: table.p.into_number(),
            p_text,
            df_between: table.df_between,
            df_within: table.df_within,
            ss_between: table.ss_between.into_number(),
            ss_within: table.ss_within.into_number(),
            ms_between: table.ms_between.into_number(),
            ms_within: table.ms_within.into_number(),
            groups,
            homogeneity,
        }
    }

    /// Attach the grouping and measure labels for presentation
    pub fn with_labels(
        self,
        group_label: impl Into<String>,
        measure_label: impl Into<String>,
    ) -> AnovaResultExt {
        AnovaResultExt {
            group_label: group_label.into(),
            measure_label: measure_label.into(),
            result: self,
        }
    }
}

/// ANOVA result carrying display labels
#[derive(Debug, Clone, PartialEq)]
pub struct AnovaResultExt {
    pub group_label: String,
    pub measure_label: String,
    pub result: AnovaResult,
}

/// Independent samples t-test result
#[derive(Debug, Clone, PartialEq)]
pub struct TTestResult {
    pub t_statistic: f64,
    pub p_value: f64,
    pub p_text: String,
    pub df: usize,
    pub group_a: NumericSampleSummaryExt,
    pub group_b: NumericSampleSummaryExt,
    /// O'Brien's test for homogeneity of variance
    pub homogeneity: Homogeneity,
}

impl TTestResult {
    /// Attach the grouping and measure labels for presentation
    pub fn with_labels(
        self,
        group_label: impl Into<String>,
        measure_label: impl Into<String>,
    ) -> TTestResultExt {
        TTestResultExt {
            group_label: group_label.into(),
            measure_label: measure_label.into(),
            result: self,
        }
    }
}

/// t-test result carrying display labels
#[derive(Debug, Clone, PartialEq)]
pub struct TTestResultExt {
    pub group_label: String,
    pub measure_label: String,
    pub result: TTestResult,
}

/// Paired samples t-test result
#[derive(Debug, Clone, PartialEq)]
pub struct PairedTTestResult {
    pub t_statistic: f64,
    pub p_value: f64,
    pub p_text: String,
    pub df: usize,
    pub group_a: NumericSampleSummary,
    pub group_b: NumericSampleSummary,
    /// Pair differences, second sample minus first
    pub differences: Vec<f64>,
}

/// Mann-Whitney U test result
#[derive(Debug, Clone, PartialEq)]
pub struct MannWhitneyResult {
    /// The smaller of the two U values
    pub u_statistic: f64,
    /// One-tailed p-value from the normal approximation
    pub p_value: f64,
    pub p_text: String,
    /// Normal deviate for U
    pub z: f64,
    pub group_a: OrdinalSampleSummary,
    pub group_b: OrdinalSampleSummary,
}

/// Wilcoxon signed-rank test result
#[derive(Debug, Clone, PartialEq)]
pub struct WilcoxonResult {
    /// The smaller of the positive and negative rank sums
    pub t_statistic: f64,
    /// Two-tailed p-value from the normal approximation
    pub p_value: f64,
    pub p_text: String,
    pub z: f64,
    /// Pairs with a non-zero difference
    pub n_nonzero: usize,
    pub group_a: OrdinalSampleSummary,
    pub group_b: OrdinalSampleSummary,
}

/// Kruskal-Wallis H test result
#[derive(Debug, Clone, PartialEq)]
pub struct KruskalWallisResult {
    /// Tie-corrected H statistic
    pub h_statistic: f64,
    pub p_value: f64,
    pub p_text: String,
    pub df: usize,
    pub groups: Vec<OrdinalSampleSummary>,
}

/// Correlation test result (Pearson or Spearman)
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationResult {
    /// Correlation coefficient
    pub coefficient: f64,
    /// t statistic for the coefficient
    pub t_statistic: f64,
    /// Two-tailed p-value
    pub p_value: f64,
    pub p_text: String,
    /// Degrees of freedom (n - 2)
    pub df: usize,
    /// Number of pairs
    pub n: usize,
    /// Least-squares fit of the raw values, for charting
    pub regression: RegressionLine,
    /// Method name
    pub method: String,
}

/// Chi-square test of association result
#[derive(Debug, Clone, PartialEq)]
pub struct ChiSquareResult {
    /// Chi-square statistic
    pub statistic: f64,
    pub p_value: f64,
    pub p_text: String,
    /// Degrees of freedom (rows - 1)(cols - 1)
    pub df: usize,
    pub n_rows: usize,
    pub n_cols: usize,
    /// Observed counts, row by row
    pub observed: Vec<f64>,
    /// Expected counts, row by row
    pub expected: Vec<f64>,
    /// Smallest expected count
    pub min_expected: f64,
    /// Percentage of cells with an expected count below 5
    pub pct_cells_expected_below_5: f64,
}

/// Result of any test
#[derive(Debug, Clone, PartialEq)]
pub enum TestResult {
    Anova(AnovaResult),
    TTest(TTestResult),
    PairedTTest(PairedTTestResult),
    MannWhitney(MannWhitneyResult),
    Wilcoxon(WilcoxonResult),
    KruskalWallis(KruskalWallisResult),
    ChiSquare(ChiSquareResult),
    Pearson(CorrelationResult),
    Spearman(CorrelationResult),
}

impl TestResult {
    /// p-value as a float, whatever precision it was computed in
    pub fn p_value(&self) -> f64 {
        match self {
            TestResult::Anova(r) => r.p_value.to_f64(),
            TestResult::TTest(r) => r.p_value,
            TestResult::PairedTTest(r) => r.p_value,
            TestResult::MannWhitney(r) => r.p_value,
            TestResult::Wilcoxon(r) => r.p_value,
            TestResult::KruskalWallis(r) => r.p_value,
            TestResult::ChiSquare(r) => r.p_value,
            TestResult::Pearson(r) | TestResult::Spearman(r) => r.p_value,
        }
    }

    /// p-value formatted for display
    pub fn p_text(&self) -> &str {
        match self {
            TestResult::Anova(r) => &r.p_text,
            TestResult::TTest(r) => &r.p_text,
            TestResult::PairedTTest(r) => &r.p_text,
            TestResult::MannWhitney(r) => &r.p_text,
            TestResult::Wilcoxon(r) => &r.p_text,
            TestResult::KruskalWallis(r) => &r.p_text,
            TestResult::ChiSquare(r) => &r.p_text,
            TestResult::Pearson(r) | TestResult::Spearman(r) => &r.p_text,
        }
    }
}

impl From<AnovaResult> for TestResult {
    fn from(result: AnovaResult) -> Self {
        TestResult::Anova(result)
    }
}

impl From<TTestResult> for TestResult {
    fn from(result: TTestResult) -> Self {
        TestResult::TTest(result)
    }
}

impl From<PairedTTestResult> for TestResult {
    fn from(result: PairedTTestResult) -> Self {
        TestResult::PairedTTest(result)
    }
}

impl From<MannWhitneyResult> for TestResult {
    fn from(result: MannWhitneyResult) -> Self {
        TestResult::MannWhitney(result)
    }
}

impl From<WilcoxonResult> for TestResult {
    fn from(result: WilcoxonResult) -> Self {
        TestResult::Wilcoxon(result)
    }
}

impl From<KruskalWallisResult> for TestResult {
    fn from(result: KruskalWallisResult) -> Self {
        TestResult::KruskalWallis(result)
    }
}

impl From<ChiSquareResult> for TestResult {
    fn from(result: ChiSquareResult) -> Self {
        TestResult::ChiSquare(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Precision, Sample};

    #[test]
    fn test_with_labels() {
        let a = Sample::new("A", vec![1.0, 2.0, 3.0, 4.0]);
        let b = Sample::new("B", vec![2.0, 4.0, 5.0, 7.0]);
        let result = parametric::ttest_independent(&a, &b).unwrap();
        let labelled = result.clone().with_labels("cohort", "score");
        assert_eq!(labelled.group_label, "cohort");
        assert_eq!(labelled.measure_label, "score");
        assert_eq!(labelled.result, result);

        let anova = parametric::anova("cohort", "score", &[a, b], Precision::Standard)
            .unwrap()
            .with_labels("cohort", "score");
        assert_eq!(anova.result.groups.len(), 2);
    }

    #[test]
    fn test_result_enum_exposes_p() {
        let a = Sample::new("A", vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        let b = Sample::new("B", vec![2.0, 3.0, 4.0, 5.0, 6.0]);
        let result: TestResult = parametric::ttest_independent(&a, &b).unwrap().into();
        assert!(result.p_value() > 0.3);
        assert_eq!(result.p_text(), crate::format::format_p_value(result.p_value()));
    }
}
