//! Ranking with tie averaging, shared by every rank-based test

use tracing::info;

use crate::errors::{StatsError, StatsResult};
use crate::types::RankOptions;

/// Assign 1-based ranks, giving tied values the mean of the ranks they span.
///
/// The result is aligned with the input order.
///
/// # Errors
/// [`StatsError::TooManyValues`] when there are more than
/// `options.max_values` values and `options.high_volume_ok` is not set.
pub fn rank(values: &[f64], options: &RankOptions) -> StatsResult<Vec<f64>> {
    let n = values.len();
    if n > options.max_values {
        if !options.high_volume_ok {
            return Err(StatsError::TooManyValues {
                n,
                limit: options.max_values,
            });
        }
        info!(n, limit = options.max_values, "ranking a high number of values");
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&i, &j| values[i].total_cmp(&values[j]));

    let mut ranks = vec![0.0; n];
    let mut start = 0;
    while start < n {
        let mut end = start + 1;
        while end < n && values[order[end]] == values[order[start]] {
            end += 1;
        }
        // sorted positions start..end share ranks start+1..=end
        let average = (start + end + 1) as f64 / 2.0;
        for &index in &order[start..end] {
            ranks[index] = average;
        }
        start = end;
    }

    Ok(ranks)
}

/// Tie correction factor for rank tests: 1 - Σ(t³ - t) / (n³ - n), where t is
/// the size of each group of tied ranks.
///
/// Returns 1.0 when there are no ties and 0.0 when every value is tied.
pub fn tie_correction_factor(ranks: &[f64]) -> StatsResult<f64> {
    let n = ranks.len();
    if n < 2 {
        return Err(StatsError::insufficient("tie correction", 2, n));
    }

    let mut sorted = ranks.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mut tie_sum = 0.0;
    let mut i = 0;
    while i < n {
        let mut j = i + 1;
        while j < n && sorted[j] == sorted[i] {
            j += 1;
        }
        let ties = (j - i) as f64;
        if j - i > 1 {
            tie_sum += ties * ties * ties - ties;
        }
        i = j;
    }

    let n = n as f64;
    Ok(1.0 - tie_sum / (n * n * n - n))
}
