//! Worked example for the chi-square test of association

use super::Truncated;
use crate::errors::StatsResult;
use crate::tests::categorical::{chi_square_association, ContingencyTable};
use crate::types::WorkedExampleOptions;

/// A row or column total with the counts that make it up
#[derive(Debug, Clone, PartialEq)]
pub struct ChiSquareMargin {
    /// 1-based row or column number
    pub index: usize,
    pub counts: Vec<f64>,
    pub total: f64,
}

/// Expected count and chi-square contribution of one cell
#[derive(Debug, Clone, PartialEq)]
pub struct ChiSquareCell {
    /// 1-based row number
    pub row: usize,
    /// 1-based column number
    pub col: usize,
    pub observed: f64,
    pub row_total: f64,
    pub col_total: f64,
    /// row_total × col_total / grand total
    pub expected: f64,
    /// |observed - expected|
    pub difference: f64,
    pub difference_squared: f64,
    /// difference² / expected
    pub contribution: f64,
}

/// Chi-square statistic built cell by cell
#[derive(Debug, Clone, PartialEq)]
pub struct ChiSquareWorked {
    pub row_totals: Vec<ChiSquareMargin>,
    pub col_totals: Vec<ChiSquareMargin>,
    pub grand_total: f64,
    pub cells: Truncated<ChiSquareCell>,
    pub chi_square: f64,
    pub n_rows: usize,
    pub n_cols: usize,
    /// (rows - 1)(cols - 1)
    pub df: usize,
}

pub fn chi_square_worked(
    observed: &[Vec<f64>],
    options: &WorkedExampleOptions,
) -> StatsResult<ChiSquareWorked> {
    let table = ContingencyTable::new(observed)?;
    let result = chi_square_association(observed)?;

    let row_totals = observed
        .iter()
        .zip(&table.row_totals)
        .enumerate()
        .map(|(i, (row, &total))| ChiSquareMargin {
            index: i + 1,
            counts: row.clone(),
            total,
        })
        .collect();
    let col_totals = table
        .col_totals
        .iter()
        .enumerate()
        .map(|(j, &total)| ChiSquareMargin {
            index: j + 1,
            counts: observed.iter().map(|row| row[j]).collect(),
            total,
        })
        .collect();

    let cells = table
        .contributions()
        .into_iter()
        .enumerate()
        .map(|(i, contribution)| {
            let (r, c) = (i / table.n_cols, i % table.n_cols);
            let difference = (table.observed[i] - table.expected[i]).abs();
            ChiSquareCell {
                row: r + 1,
                col: c + 1,
                observed: table.observed[i],
                row_total: table.row_totals[r],
                col_total: table.col_totals[c],
                expected: table.expected[i],
                difference,
                difference_squared: difference * difference,
                contribution,
            }
        })
        .collect();

    Ok(ChiSquareWorked {
        row_totals,
        col_totals,
        grand_total: table.total,
        cells: Truncated::new(cells, options),
        chi_square: result.statistic,
        n_rows: table.n_rows,
        n_cols: table.n_cols,
        df: result.df,
    })
}
