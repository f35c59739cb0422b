//! Segment pace calculations.
//!
//! All functions here are pure over a runner's checkpoint vector, so they
//! can be unit tested in isolation and mapped over rows independently.

use crate::models::{CheckpointTimes, HalfSplits, SegmentPaces};
use crate::units::{Checkpoint, Segment, UnitConstants, FOUR_HOURS_SECS, SPLIT_GRID_KM};

/// Compute the ten canonical segment paces in course order, sec/mile.
///
/// Regular 5 km grid segments are truncated to whole seconds; the three
/// irregular segments keep their real value because their lengths are
/// non-integral. Negative durations propagate as negative paces and are
/// filtered by the preparer.
pub fn segment_paces(times: &CheckpointTimes, units: &UnitConstants) -> [f64; 10] {
    let mut paces = [0.0; 10];
    for (slot, segment) in paces.iter_mut().zip(Segment::ALL) {
        let duration = times.segment_duration(segment) as f64;
        *slot = if segment.is_irregular() {
            let miles = (segment.end_distance_km(units) - segment.start_distance_km(units))
                * units.km_to_miles;
            duration / miles
        } else {
            (duration / units.five_km_miles).trunc()
        };
    }
    paces
}

/// Compute the eight mile-based 5 km grid splits, truncated to whole
/// seconds per mile.
///
/// The 20-25 km span is treated here as a plain 5 km segment even though
/// the half marathon mark falls inside it; this sequence exists only to
/// feed the variability statistics.
pub fn mile_splits(times: &CheckpointTimes, units: &UnitConstants) -> [i64; 8] {
    let mut splits = [0i64; 8];
    for (slot, pair) in splits.iter_mut().zip(Checkpoint::GRID.windows(2)) {
        let duration = (times.get(pair[1]) - times.get(pair[0])) as f64;
        *slot = (duration / units.five_km_miles).trunc() as i64;
    }
    splits
}

/// Compute the cumulative average pace from the start at each 5 km grid
/// checkpoint: elapsed time over total distance, sec/mile, real-valued.
pub fn cumulative_avg_paces(times: &CheckpointTimes, units: &UnitConstants) -> [f64; 8] {
    let mut avgs = [0.0; 8];
    for (slot, (checkpoint, km)) in avgs
        .iter_mut()
        .zip(Checkpoint::GRID[1..].iter().zip(SPLIT_GRID_KM))
    {
        *slot = times.get(*checkpoint) as f64 / (km as f64 * units.km_to_miles);
    }
    avgs
}

/// Assemble all per-runner pace vectors.
pub fn all_paces(times: &CheckpointTimes, units: &UnitConstants) -> SegmentPaces {
    SegmentPaces {
        canonical: segment_paces(times, units),
        mile_splits: mile_splits(times, units),
        cumulative_avg: cumulative_avg_paces(times, units),
    }
}

/// Compute half/finish aggregate paces and the derived booleans.
pub fn half_splits(times: &CheckpointTimes, units: &UnitConstants) -> HalfSplits {
    let finish = times.get(Checkpoint::Finish);
    let half = times.get(Checkpoint::Half);
    let second_half = finish - half;

    let finish_avg_pace = (finish as f64 / units.marathon_miles).trunc() as i64;
    let half_avg_pace = (half as f64 / units.half_marathon_miles).trunc() as i64;
    let second_half_avg_pace = (second_half as f64 / units.half_marathon_miles).trunc() as i64;

    let time_diff = second_half - half;
    let time_diff_percent = time_diff as f64 / second_half as f64 * 100.0;

    HalfSplits {
        second_half_time: second_half,
        finish_avg_pace,
        half_avg_pace,
        second_half_avg_pace,
        second_half_time_diff: time_diff,
        second_half_time_diff_percent: time_diff_percent,
        second_half_faster: time_diff < 0,
        below_four_hours: finish < FOUR_HOURS_SECS,
        finish_avg_pace_norm: finish_avg_pace as f64 / finish as f64,
    }
}
