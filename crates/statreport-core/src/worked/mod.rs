//! Worked examples
//!
//! Builders that rerun a test's arithmetic and keep every intermediate step
//! for a "show your work" rendering. Each builder calls the same helpers as
//! the corresponding test in [`crate::tests`], so the final statistic is
//! identical to the one reported there. Row-oriented sections are capped at
//! [`WorkedExampleOptions::max_display_rows`] and report how many rows were
//! left out.

mod categorical;
mod correlation;
mod nonparametric;
mod parametric;

pub use categorical::{chi_square_worked, ChiSquareCell, ChiSquareMargin, ChiSquareWorked};
pub use correlation::{pearson_worked, spearman_worked, PearsonRow, PearsonWorked, SpearmanRow, SpearmanWorked};
pub use nonparametric::{
    mann_whitney_worked, wilcoxon_worked, MannWhitneyRow, MannWhitneyWorked, WilcoxonDifference,
    WilcoxonRanking, WilcoxonWorked,
};
pub use parametric::{anova_worked, ttest_worked, AnovaGroupWorking, AnovaWorked, TTestWorked};

use crate::types::WorkedExampleOptions;

/// The first rows of a table plus a count of the rows left out
#[derive(Debug, Clone, PartialEq)]
pub struct Truncated<T> {
    pub shown: Vec<T>,
    /// Rows not included in `shown`
    pub hidden: usize,
}

impl<T> Truncated<T> {
    pub fn new(mut rows: Vec<T>, options: &WorkedExampleOptions) -> Self {
        let hidden = rows.len().saturating_sub(options.max_display_rows);
        rows.truncate(options.max_display_rows);
        Self { shown: rows, hidden }
    }

    /// Number of rows before truncation
    pub fn total(&self) -> usize {
        self.shown.len() + self.hidden
    }

    pub fn is_truncated(&self) -> bool {
        self.hidden > 0
    }

    /// "N more rows not shown", or `None` when nothing was cut
    pub fn not_shown_message(&self) -> Option<String> {
        match self.hidden {
            0 => None,
            1 => Some("1 more row not shown".to_string()),
            n => Some(format!("{} more rows not shown", n)),
        }
    }
}

/// Worked example of any test
#[derive(Debug, Clone, PartialEq)]
pub enum WorkedExample {
    Anova(AnovaWorked),
    TTest(TTestWorked),
    MannWhitney(MannWhitneyWorked),
    Wilcoxon(WilcoxonWorked),
    ChiSquare(ChiSquareWorked),
    Pearson(PearsonWorked),
    Spearman(SpearmanWorked),
}

impl From<AnovaWorked> for WorkedExample {
    fn from(worked: AnovaWorked) -> Self {
        WorkedExample::Anova(worked)
    }
}

impl From<TTestWorked> for WorkedExample {
    fn from(worked: TTestWorked) -> Self {
        WorkedExample::TTest(worked)
    }
}

impl From<MannWhitneyWorked> for WorkedExample {
    fn from(worked: MannWhitneyWorked) -> Self {
        WorkedExample::MannWhitney(worked)
    }
}

impl From<WilcoxonWorked> for WorkedExample {
    fn from(worked: WilcoxonWorked) -> Self {
        WorkedExample::Wilcoxon(worked)
    }
}

impl From<ChiSquareWorked> for WorkedExample {
    fn from(worked: ChiSquareWorked) -> Self {
        WorkedExample::ChiSquare(worked)
    }
}

impl From<PearsonWorked> for WorkedExample {
    fn from(worked: PearsonWorked) -> Self {
        WorkedExample::Pearson(worked)
    }
}

impl From<SpearmanWorked> for WorkedExample {
    fn from(worked: SpearmanWorked) -> Self {
        WorkedExample::Spearman(worked)
    }
}
