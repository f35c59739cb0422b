//! Pace trend estimation.
//!
//! Fits an ordinary-least-squares line of segment pace against the
//! segment's end distance and reports the slope in seconds per mile, per
//! mile of race distance. Positive means the runner slowed down.

use crate::models::SplitTrends;
use crate::units::{Segment, UnitConstants};

/// Result of a simple linear fit `y = intercept + slope * x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

/// Ordinary least squares over paired observations.
///
/// Caller guarantees `x` and `y` have equal, non-zero length. The trend
/// windows always supply 5 or 10 points against 2 free parameters, so the
/// system is well determined; the denominator guard only covers degenerate
/// inputs from other callers.
pub fn fit_line(x: &[f64], y: &[f64]) -> LinearFit {
    let n = x.len() as f64;
    let x_mean = x.iter().sum::<f64>() / n;
    let y_mean = y.iter().sum::<f64>() / n;

    let numerator: f64 = x
        .iter()
        .zip(y)
        .map(|(xi, yi)| (xi - x_mean) * (yi - y_mean))
        .sum();
    let denominator: f64 = x.iter().map(|xi| (xi - x_mean) * (xi - x_mean)).sum();

    let slope = if denominator.abs() < f64::EPSILON {
        0.0
    } else {
        numerator / denominator
    };

    LinearFit {
        slope,
        intercept: y_mean - slope * x_mean,
    }
}

/// Which canonical segments a trend fit covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendWindow {
    /// All ten segments
    Full,
    /// First five segments (through the half marathon mark)
    FirstHalf,
    /// Last five segments (from the half marathon mark)
    SecondHalf,
}

impl TrendWindow {
    fn segment_range(&self) -> std::ops::Range<usize> {
        match self {
            TrendWindow::Full => 0..10,
            TrendWindow::FirstHalf => 0..5,
            TrendWindow::SecondHalf => 5..10,
        }
    }
}

/// Regression slope of pace against distance over a window, converted from
/// sec/mile per kilometre to sec/mile per mile.
pub fn split_trend(canonical: &[f64; 10], window: TrendWindow, units: &UnitConstants) -> f64 {
    let range = window.segment_range();
    let x: Vec<f64> = Segment::ALL[range.clone()]
        .iter()
        .map(|segment| segment.end_distance_km(units))
        .collect();
    let y = &canonical[range];
    fit_line(&x, y).slope / units.km_to_miles
}

/// All three trend slopes for one runner.
pub fn split_trends(canonical: &[f64; 10], units: &UnitConstants) -> SplitTrends {
    SplitTrends {
        full: split_trend(canonical, TrendWindow::Full, units),
        first_half: split_trend(canonical, TrendWindow::FirstHalf, units),
        second_half: split_trend(canonical, TrendWindow::SecondHalf, units),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_line_exact() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [3.0, 5.0, 7.0, 9.0]; // y = 1 + 2x
        let fit = fit_line(&x, &y);
        assert!((fit.slope - 2.0).abs() < 1e-12);
        assert!((fit.intercept - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_fit_line_constant_x_degenerates_to_zero() {
        let fit = fit_line(&[2.0, 2.0, 2.0], &[1.0, 5.0, 9.0]);
        assert_eq!(fit.slope, 0.0);
    }

    #[test]
    fn test_even_paces_have_no_trend() {
        let units = UnitConstants::default();
        let trends = split_trends(&[579.0; 10], &units);
        assert!(trends.full.abs() < 1e-9);
        assert!(trends.first_half.abs() < 1e-9);
        assert!(trends.second_half.abs() < 1e-9);
    }

    #[test]
    fn test_linear_slowdown_recovers_known_slope() {
        let units = UnitConstants::default();
        // pace = 500 + 2 sec/mile per km of distance, sampled exactly at
        // each segment's end distance
        let mut canonical = [0.0; 10];
        for (slot, segment) in canonical.iter_mut().zip(Segment::ALL) {
            *slot = 500.0 + 2.0 * segment.end_distance_km(&units);
        }
        let trends = split_trends(&canonical, &units);

        let expected = 2.0 / units.km_to_miles;
        assert!((trends.full - expected).abs() < 1e-9);
        assert!((trends.first_half - expected).abs() < 1e-9);
        assert!((trends.second_half - expected).abs() < 1e-9);
        assert!(trends.full > 0.0);
    }

    #[test]
    fn test_speeding_up_yields_negative_slope() {
        let units = UnitConstants::default();
        let mut canonical = [0.0; 10];
        for (slot, segment) in canonical.iter_mut().zip(Segment::ALL) {
            *slot = 620.0 - 1.5 * segment.end_distance_km(&units);
        }
        let trends = split_trends(&canonical, &units);
        assert!(trends.full < 0.0);
    }
}
