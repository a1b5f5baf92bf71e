//! Worked examples for Pearson's r and Spearman's rho

use super::Truncated;
use crate::errors::{StatsError, StatsResult};
use crate::models::{regression_line, PairedSums};
use crate::tests::correlation::rank_differences;
use crate::types::{RankOptions, WorkedExampleOptions};

/// One pair with the products summed by the raw-score formula
#[derive(Debug, Clone, PartialEq)]
pub struct PearsonRow {
    pub x: f64,
    pub y: f64,
    pub xy: f64,
    pub x_squared: f64,
    pub y_squared: f64,
}

/// Pearson's r by the raw-score formula, plus the regression line
#[derive(Debug, Clone, PartialEq)]
pub struct PearsonWorked {
    pub rows: Truncated<PearsonRow>,
    pub n: usize,
    pub sum_x: f64,
    pub sum_y: f64,
    pub sum_xy: f64,
    pub sum_x_squared: f64,
    pub sum_y_squared: f64,
    /// nΣxy - ΣxΣy
    pub numerator: f64,
    /// nΣx² - (Σx)²
    pub x_spread: f64,
    /// nΣy² - (Σy)²
    pub y_spread: f64,
    /// √(x_spread · y_spread)
    pub denominator: f64,
    pub r: f64,
    /// numerator / x_spread
    pub slope: f64,
    /// ȳ - slope·x̄
    pub intercept: f64,
}

pub fn pearson_worked(
    x: &[f64],
    y: &[f64],
    options: &WorkedExampleOptions,
) -> StatsResult<PearsonWorked> {
    let sums = PairedSums::new(x, y, "Pearson's r")?;
    if sums.n < 3 {
        return Err(StatsError::insufficient("Pearson's r", 3, sums.n));
    }
    let r = sums.r("Pearson's r")?;
    let line = regression_line(x, y)?;

    let rows = x
        .iter()
        .zip(y)
        .map(|(&x, &y)| PearsonRow {
            x,
            y,
            xy: x * y,
            x_squared: x * x,
            y_squared: y * y,
        })
        .collect();

    Ok(PearsonWorked {
        rows: Truncated::new(rows, options),
        n: sums.n,
        sum_x: sums.sum_x,
        sum_y: sums.sum_y,
        sum_xy: sums.sum_xy,
        sum_x_squared: sums.sum_x2,
        sum_y_squared: sums.sum_y2,
        numerator: sums.r_numerator(),
        x_spread: sums.x_spread(),
        y_spread: sums.y_spread(),
        denominator: sums.r_denominator(),
        r,
        slope: line.slope,
        intercept: line.intercept,
    })
}

/// A pair with its ranks and squared rank difference
#[derive(Debug, Clone, PartialEq)]
pub struct SpearmanRow {
    pub x: f64,
    pub y: f64,
    pub rank_x: f64,
    pub rank_y: f64,
    pub diff: f64,
    pub diff_squared: f64,
}

/// Spearman's rho by 1 - 6Σd²/(n³ - n)
#[derive(Debug, Clone, PartialEq)]
pub struct SpearmanWorked {
    pub rows: Truncated<SpearmanRow>,
    /// x values with their ranks, ascending
    pub x_ranks: Truncated<(f64, f64)>,
    /// y values with their ranks, ascending
    pub y_ranks: Truncated<(f64, f64)>,
    pub n: usize,
    pub n_cubed_minus_n: f64,
    pub sum_d_squared: f64,
    pub six_sum_d_squared: f64,
    /// 6Σd² / (n³ - n)
    pub pre_rho: f64,
    pub rho: f64,
}

fn sorted_with_ranks(
    values: &[f64],
    ranks: &[f64],
    options: &WorkedExampleOptions,
) -> Truncated<(f64, f64)> {
    let mut pairs: Vec<(f64, f64)> = values.iter().copied().zip(ranks.iter().copied()).collect();
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
    Truncated::new(pairs, options)
}

pub fn spearman_worked(
    x: &[f64],
    y: &[f64],
    rank_options: &RankOptions,
    options: &WorkedExampleOptions,
) -> StatsResult<SpearmanWorked> {
    let differences = rank_differences(x, y, rank_options)?;

    let rows = x
        .iter()
        .zip(y)
        .zip(differences.ranks_x.iter().zip(&differences.ranks_y))
        .map(|((&x, &y), (&rank_x, &rank_y))| {
            let diff = rank_x - rank_y;
            SpearmanRow {
                x,
                y,
                rank_x,
                rank_y,
                diff,
                diff_squared: diff * diff,
            }
        })
        .collect();

    let six_sum_d_squared = 6.0 * differences.sum_d_squared;
    Ok(SpearmanWorked {
        rows: Truncated::new(rows, options),
        x_ranks: sorted_with_ranks(x, &differences.ranks_x, options),
        y_ranks: sorted_with_ranks(y, &differences.ranks_y, options),
        n: x.len(),
        n_cubed_minus_n: differences.n_cubed_minus_n,
        sum_d_squared: differences.sum_d_squared,
        six_sum_d_squared,
        pre_rho: six_sum_d_squared / differences.n_cubed_minus_n,
        rho: differences.rho(),
    })
}
