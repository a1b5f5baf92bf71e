//! Worked examples for the Mann-Whitney U and Wilcoxon signed-rank tests

use super::Truncated;
use crate::errors::StatsResult;
use crate::tests::nonparametric::{signed_ranks, u_statistics};
use crate::types::{RankOptions, Sample, WorkedExampleOptions};

/// A pooled value with its rank, in ascending value order
#[derive(Debug, Clone, PartialEq)]
pub struct MannWhitneyRow {
    /// 1 or 2
    pub sample: u8,
    pub value: f64,
    pub rank: f64,
    /// 1-based position in the sorted pool
    pub counter: usize,
}

/// Mann-Whitney U computed by hand
///
/// Sample 1 is the shorter sample (the first one when the lengths are equal),
/// which keeps the rank sum small. U is the same either way.
#[derive(Debug, Clone, PartialEq)]
pub struct MannWhitneyWorked {
    pub label_1: String,
    pub label_2: String,
    pub n_1: usize,
    pub n_2: usize,
    pub rows: Truncated<MannWhitneyRow>,
    /// Ranks of sample 1 in ascending order
    pub ranks_1: Vec<f64>,
    pub sum_rank_1: f64,
    /// n_1·n_2 + n_1(n_1 + 1)/2 - R_1
    pub u_1: f64,
    /// n_1·n_2 - U_1
    pub u_2: f64,
    pub u: f64,
}

pub fn mann_whitney_worked(
    sample_a: &Sample,
    sample_b: &Sample,
    rank_options: &RankOptions,
    options: &WorkedExampleOptions,
) -> StatsResult<MannWhitneyWorked> {
    let (first, second) = if sample_b.len() < sample_a.len() {
        (sample_b, sample_a)
    } else {
        (sample_a, sample_b)
    };
    let stats = u_statistics(first.values(), second.values(), rank_options)?;

    let mut rows: Vec<MannWhitneyRow> = first
        .values()
        .iter()
        .map(|&v| (1, v))
        .chain(second.values().iter().map(|&v| (2, v)))
        .zip(&stats.ranks)
        .map(|((sample, value), &rank)| MannWhitneyRow {
            sample,
            value,
            rank,
            counter: 0,
        })
        .collect();
    rows.sort_by(|a, b| a.value.total_cmp(&b.value));
    for (i, row) in rows.iter_mut().enumerate() {
        row.counter = i + 1;
    }
    let ranks_1 = rows
        .iter()
        .filter(|r| r.sample == 1)
        .map(|r| r.rank)
        .collect();

    Ok(MannWhitneyWorked {
        label_1: first.label().to_string(),
        label_2: second.label().to_string(),
        n_1: stats.n_a,
        n_2: stats.n_b,
        rows: Truncated::new(rows, options),
        ranks_1,
        sum_rank_1: stats.sum_rank_a,
        u_1: stats.u_a,
        u_2: stats.u_b,
        u: stats.u(),
    })
}

/// One pair and its difference
#[derive(Debug, Clone, PartialEq)]
pub struct WilcoxonDifference {
    pub a: f64,
    pub b: f64,
    /// a - b
    pub diff: f64,
}

/// A non-zero difference with the rank of its absolute value
#[derive(Debug, Clone, PartialEq)]
pub struct WilcoxonRanking {
    pub diff: f64,
    pub abs_diff: f64,
    pub rank: f64,
    pub counter: usize,
}

/// Wilcoxon's T computed by hand
#[derive(Debug, Clone, PartialEq)]
pub struct WilcoxonWorked {
    /// Every pair, zero differences included
    pub differences: Truncated<WilcoxonDifference>,
    /// Non-zero differences ordered by absolute value
    pub rankings: Truncated<WilcoxonRanking>,
    pub plus_ranks: Vec<f64>,
    pub minus_ranks: Vec<f64>,
    pub sum_plus_ranks: f64,
    pub sum_minus_ranks: f64,
    /// The smaller rank sum
    pub t: f64,
    /// Pairs with a non-zero difference
    pub n: usize,
}

pub fn wilcoxon_worked(
    sample_a: &Sample,
    sample_b: &Sample,
    rank_options: &RankOptions,
    options: &WorkedExampleOptions,
) -> StatsResult<WilcoxonWorked> {
    let signed = signed_ranks(sample_a.values(), sample_b.values(), rank_options)?;

    let differences = sample_a
        .values()
        .iter()
        .zip(sample_b.values())
        .map(|(&a, &b)| WilcoxonDifference { a, b, diff: a - b })
        .collect();

    let mut rankings: Vec<WilcoxonRanking> = signed
        .differences
        .iter()
        .zip(&signed.ranks)
        .map(|(&diff, &rank)| WilcoxonRanking {
            diff,
            abs_diff: diff.abs(),
            rank,
            counter: 0,
        })
        .collect();
    rankings.sort_by(|x, y| {
        x.abs_diff
            .total_cmp(&y.abs_diff)
            .then(x.diff.total_cmp(&y.diff))
    });
    for (i, ranking) in rankings.iter_mut().enumerate() {
        ranking.counter = i + 1;
    }
    let plus_ranks = rankings.iter().filter(|r| r.diff > 0.0).map(|r| r.rank).collect();
    let minus_ranks = rankings.iter().filter(|r| r.diff < 0.0).map(|r| r.rank).collect();

    Ok(WilcoxonWorked {
        differences: Truncated::new(differences, options),
        rankings: Truncated::new(rankings, options),
        plus_ranks,
        minus_ranks,
        sum_plus_ranks: signed.sum_plus,
        sum_minus_ranks: signed.sum_minus,
        t: signed.t(),
        n: signed.count(),
    })
}
