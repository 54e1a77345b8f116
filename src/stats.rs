//! Summary statistics over a sequence of monthly log counts.
//!
//! Lower counts are the better outcome: the "best" month is the one with the
//! fewest logs and the "worst" (challenging) month is the one with the most.
//! Ties resolve to the earliest month.

use thiserror::Error;

/// Errors produced by [`compute_stats`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// The input sequence had no elements.
    #[error("invalid input: cannot summarize an empty log count sequence")]
    InvalidInput,
}

/// Summary of one log count sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogStats {
    /// Sum of all counts.
    pub total: u64,
    /// Smallest count.
    pub min: u32,
    /// Largest count.
    pub max: u32,
    /// Index of the first month holding `min`.
    pub best_month_index: usize,
    /// Index of the first month holding `max`.
    pub worst_month_index: usize,
}

/// Computes [`LogStats`] for `counts`.
///
/// Returns [`StatsError::InvalidInput`] when `counts` is empty.
pub fn compute_stats(counts: &[u32]) -> Result<LogStats, StatsError> {
    let (&first, rest) = counts.split_first().ok_or(StatsError::InvalidInput)?;

    let mut stats = LogStats {
        total: u64::from(first),
        min: first,
        max: first,
        best_month_index: 0,
        worst_month_index: 0,
    };

    for (offset, &count) in rest.iter().enumerate() {
        let index = offset + 1;
        stats.total += u64::from(count);
        // Strict comparisons keep the first occurrence on ties
        if count < stats.min {
            stats.min = count;
            stats.best_month_index = index;
        }
        if count > stats.max {
            stats.max = count;
            stats.worst_month_index = index;
        }
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sequence_is_invalid_input() {
        assert_eq!(compute_stats(&[]), Err(StatsError::InvalidInput));
    }

    #[test]
    fn invalid_input_display_mentions_empty() {
        let msg = StatsError::InvalidInput.to_string();
        assert!(msg.contains("invalid input"));
        assert!(msg.contains("empty"));
    }

    #[test]
    fn sheila_scenario() {
        let stats = compute_stats(&[2, 3, 1, 0, 2, 1, 2, 1]).expect("non-empty input");
        assert_eq!(
            stats,
            LogStats {
                total: 12,
                min: 0,
                max: 3,
                best_month_index: 3,
                worst_month_index: 1,
            }
        );
    }

    #[test]
    fn ties_take_first_occurrence() {
        let stats = compute_stats(&[2, 1, 1, 2]).expect("non-empty input");
        assert_eq!(stats.best_month_index, 1);
        assert_eq!(stats.worst_month_index, 0);
    }

    #[test]
    fn special_series_scenario() {
        let stats = compute_stats(&[2, 3, 1]).expect("non-empty input");
        assert_eq!(stats.total, 6);
        assert_eq!(stats.min, 1);
        assert_eq!(stats.best_month_index, 2);
        assert_eq!(stats.max, 3);
        assert_eq!(stats.worst_month_index, 1);
    }

    #[test]
    fn single_element_is_both_best_and_worst() {
        let stats = compute_stats(&[7]).expect("non-empty input");
        assert_eq!(stats.total, 7);
        assert_eq!(stats.min, 7);
        assert_eq!(stats.max, 7);
        assert_eq!(stats.best_month_index, 0);
        assert_eq!(stats.worst_month_index, 0);
    }

    #[test]
    fn all_equal_values_point_at_first_month() {
        let stats = compute_stats(&[4, 4, 4, 4]).expect("non-empty input");
        assert_eq!(stats.best_month_index, 0);
        assert_eq!(stats.worst_month_index, 0);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let counts = [1, 2, 0, 1, 2, 2, 1, 1];
        let first = compute_stats(&counts);
        let second = compute_stats(&counts);
        assert_eq!(first, second);
    }

    #[test]
    fn total_and_bounds_hold_for_assorted_inputs() {
        let inputs: [&[u32]; 5] = [
            &[0],
            &[5, 0, 5],
            &[3, 2, 2, 1, 0, 2, 1, 1],
            &[u32::MAX, u32::MAX],
            &[9, 8, 7, 6, 5, 4, 3, 2, 1],
        ];
        for counts in inputs {
            let stats = compute_stats(counts).expect("non-empty input");
            let sum: u64 = counts.iter().map(|&c| u64::from(c)).sum();
            assert_eq!(stats.total, sum, "total mismatch for {:?}", counts);
            for &c in counts {
                assert!(stats.min <= c && c <= stats.max, "bounds broken for {:?}", counts);
            }
            assert_eq!(counts[stats.best_month_index], stats.min);
            assert_eq!(counts[stats.worst_month_index], stats.max);
        }
    }
}
