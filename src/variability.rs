//! Per-runner pace variability and extreme-split statistics.

use statrs::statistics::Statistics;

use crate::models::{SplitExtremes, SplitVariability};
use crate::units::Segment;

/// Population standard deviation of the mile splits, truncated, plus the
/// same normalized by whole-race average pace so runners of different
/// speeds stay comparable.
pub fn split_variability(mile_splits: &[i64; 8], finish_avg_pace: i64) -> SplitVariability {
    let paces: Vec<f64> = mile_splits.iter().map(|&p| p as f64).collect();
    let std_split_pace = paces.iter().population_std_dev().trunc() as i64;
    SplitVariability {
        std_split_pace,
        std_split_pace_norm: std_split_pace as f64 / finish_avg_pace as f64,
    }
}

/// Fastest and slowest of the ten canonical segment paces, the segments
/// they came from, and the (normalized) spread between them.
///
/// Ties resolve to the first segment in course order.
pub fn split_extremes(canonical: &[f64; 10], finish_avg_pace: i64) -> SplitExtremes {
    let mut fastest_idx = 0;
    let mut slowest_idx = 0;
    for (i, &pace) in canonical.iter().enumerate().skip(1) {
        if pace < canonical[fastest_idx] {
            fastest_idx = i;
        }
        if pace > canonical[slowest_idx] {
            slowest_idx = i;
        }
    }

    let fastest = canonical[fastest_idx];
    let slowest = canonical[slowest_idx];
    let max_diff = slowest - fastest;

    SplitExtremes {
        fastest_split: fastest,
        slowest_split: slowest,
        fastest_segment: Segment::ALL[fastest_idx],
        slowest_segment: Segment::ALL[slowest_idx],
        max_split_diff: max_diff,
        max_split_diff_norm: max_diff / finish_avg_pace as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_splits_have_zero_variability() {
        let variability = split_variability(&[579; 8], 579);
        assert_eq!(variability.std_split_pace, 0);
        assert_eq!(variability.std_split_pace_norm, 0.0);
    }

    #[test]
    fn test_population_std_is_truncated() {
        // values 570 and 590 four times each: population std is exactly 10
        let variability = split_variability(&[570, 590, 570, 590, 570, 590, 570, 590], 580);
        assert_eq!(variability.std_split_pace, 10);

        // 570/571 alternating: population std 0.5 truncates to 0
        let variability = split_variability(&[570, 571, 570, 571, 570, 571, 570, 571], 580);
        assert_eq!(variability.std_split_pace, 0);
    }

    #[test]
    fn test_extremes_identify_segments() {
        let mut canonical = [580.0; 10];
        canonical[2] = 550.0; // 10 - 15km
        canonical[9] = 640.0; // 40km - Finish
        let extremes = split_extremes(&canonical, 580);

        assert_eq!(extremes.fastest_split, 550.0);
        assert_eq!(extremes.slowest_split, 640.0);
        assert_eq!(extremes.fastest_segment, Segment::Km10To15);
        assert_eq!(extremes.slowest_segment, Segment::Km40ToFinish);
        assert_eq!(extremes.max_split_diff, 90.0);
        assert!((extremes.max_split_diff_norm - 90.0 / 580.0).abs() < 1e-12);
    }

    #[test]
    fn test_extreme_ties_break_on_course_order() {
        let extremes = split_extremes(&[580.0; 10], 580);
        assert_eq!(extremes.fastest_segment, Segment::Km0To5);
        assert_eq!(extremes.slowest_segment, Segment::Km0To5);
        assert_eq!(extremes.max_split_diff, 0.0);
    }

    #[test]
    fn test_fastest_never_exceeds_slowest() {
        let canonical = [601.0, 583.0, 577.0, 590.0, 612.5, 570.2, 588.0, 599.0, 620.0, 641.7];
        let extremes = split_extremes(&canonical, 595);
        assert!(extremes.fastest_split <= extremes.slowest_split);
    }
}
