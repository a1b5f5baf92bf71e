//! Worked examples for ANOVA and the independent t-test

use rust_decimal::Decimal;

use crate::errors::StatsResult;
use crate::numeric::{Number, Numeric};
use crate::tests::parametric::{anova_table_in, pooled_t, t_test_p_value, AnovaTable};
use crate::types::{Precision, Sample};

/// One group's share of the ANOVA sums of squares
#[derive(Debug, Clone, PartialEq)]
pub struct AnovaGroupWorking {
    pub label: String,
    pub n: usize,
    pub mean: Number,
    /// Σ(x - group mean)²
    pub ss_within: Number,
    /// n·(group mean - grand mean)²
    pub ss_between: Number,
}

/// ANOVA table built step by step
#[derive(Debug, Clone, PartialEq)]
pub struct AnovaWorked {
    pub groups: Vec<AnovaGroupWorking>,
    pub grand_mean: Number,
    /// Sum of the groups' `ss_between`
    pub ss_between: Number,
    /// Sum of the groups' `ss_within`
    pub ss_within: Number,
    pub df_between: usize,
    pub df_within: usize,
    pub ms_between: Number,
    pub ms_within: Number,
    pub f: Number,
    pub p: Number,
}

impl AnovaWorked {
    fn from_table<N: Numeric>(table: AnovaTable<N>, samples: &[Sample]) -> Self {
        let groups = samples
            .iter()
            .zip(table.group_means)
            .zip(table.group_ss_within.into_iter().zip(table.group_ss_between))
            .map(|((sample, mean), (within, between))| AnovaGroupWorking {
                label: sample.label().to_string(),
                n: sample.len(),
                mean: mean.into_number(),
                ss_within: within.into_number(),
                ss_between: between.into_number(),
            })
            .collect();
        Self {
            groups,
            grand_mean: table.grand_mean.into_number(),
            ss_between: table.ss_between.into_number(),
            ss_within: table.ss_within.into_number(),
            df_between: table.df_between,
            df_within: table.df_within,
            ms_between: table.ms_between.into_number(),
            ms_within: table.ms_within.into_number(),
            f: table.f.into_number(),
            p: table.p.into_number(),
        }
    }
}

/// Step-by-step one-way ANOVA in the requested precision
pub fn anova_worked(samples: &[Sample], precision: Precision) -> StatsResult<AnovaWorked> {
    let refs: Vec<&[f64]> = samples.iter().map(Sample::values).collect();
    Ok(match precision {
        Precision::Standard => AnovaWorked::from_table(anova_table_in::<f64>(&refs)?, samples),
        Precision::High => AnovaWorked::from_table(anova_table_in::<Decimal>(&refs)?, samples),
    })
}

/// Pooled-variance t statistic built step by step
#[derive(Debug, Clone, PartialEq)]
pub struct TTestWorked {
    pub label_a: String,
    pub label_b: String,
    pub n_a: usize,
    pub n_b: usize,
    pub mean_a: f64,
    pub mean_b: f64,
    pub variance_a: f64,
    pub variance_b: f64,
    pub df: usize,
    /// ((n_a - 1)·var_a + (n_b - 1)·var_b) / df
    pub pooled_variance: f64,
    /// √(pooled variance · (1/n_a + 1/n_b))
    pub standard_error: f64,
    pub mean_difference: f64,
    pub t: f64,
    pub p: f64,
}

/// Step-by-step independent samples t-test
pub fn ttest_worked(sample_a: &Sample, sample_b: &Sample) -> StatsResult<TTestWorked> {
    let pooled = pooled_t(sample_a, sample_b)?;
    let p = t_test_p_value(pooled.t, pooled.df)?;
    Ok(TTestWorked {
        label_a: sample_a.label().to_string(),
        label_b: sample_b.label().to_string(),
        n_a: sample_a.len(),
        n_b: sample_b.len(),
        mean_a: pooled.mean_a,
        mean_b: pooled.mean_b,
        variance_a: pooled.variance_a,
        variance_b: pooled.variance_b,
        df: pooled.df,
        pooled_variance: pooled.pooled_variance,
        standard_error: pooled.standard_error,
        mean_difference: pooled.mean_a - pooled.mean_b,
        t: pooled.t,
        p,
    })
}
