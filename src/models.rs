//! Data model for the split-pace pipeline: the raw CSV row, the parsed
//! checkpoint vector, and the fixed-size per-runner result structs.

use serde::{Deserialize, Serialize};

use crate::units::{Checkpoint, Segment};

/// One raw row of the source dataset, exactly as read from CSV.
///
/// Every timestamp column holds an `H:MM:SS` string, the missing-data
/// sentinel, or nothing. `0km.time` is not read; it is synthesized as zero
/// by the preparer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    /// Optional identity column, passed through untouched
    #[serde(default)]
    pub runner: Option<String>,

    #[serde(rename = "5km.time", default)]
    pub km5_time: Option<String>,
    #[serde(rename = "10km.time", default)]
    pub km10_time: Option<String>,
    #[serde(rename = "15km.time", default)]
    pub km15_time: Option<String>,
    #[serde(rename = "20km.time", default)]
    pub km20_time: Option<String>,
    #[serde(rename = "half.time", default)]
    pub half_time: Option<String>,
    #[serde(rename = "25km.time", default)]
    pub km25_time: Option<String>,
    #[serde(rename = "30km.time", default)]
    pub km30_time: Option<String>,
    #[serde(rename = "35km.time", default)]
    pub km35_time: Option<String>,
    #[serde(rename = "40km.time", default)]
    pub km40_time: Option<String>,
    #[serde(rename = "finish.time", default)]
    pub finish_time: Option<String>,
}

impl RawRecord {
    /// Raw timestamp text for a checkpoint. `Start` has no source column.
    pub fn time_text(&self, checkpoint: Checkpoint) -> Option<&str> {
        match checkpoint {
            Checkpoint::Start => None,
            Checkpoint::Km5 => self.km5_time.as_deref(),
            Checkpoint::Km10 => self.km10_time.as_deref(),
            Checkpoint::Km15 => self.km15_time.as_deref(),
            Checkpoint::Km20 => self.km20_time.as_deref(),
            Checkpoint::Half => self.half_time.as_deref(),
            Checkpoint::Km25 => self.km25_time.as_deref(),
            Checkpoint::Km30 => self.km30_time.as_deref(),
            Checkpoint::Km35 => self.km35_time.as_deref(),
            Checkpoint::Km40 => self.km40_time.as_deref(),
            Checkpoint::Finish => self.finish_time.as_deref(),
        }
    }
}

/// Checkpoint timestamps in seconds since the gun, in course order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckpointTimes {
    secs: [i64; 11],
}

impl CheckpointTimes {
    pub fn new(secs: [i64; 11]) -> Self {
        Self { secs }
    }

    /// Timestamp at a checkpoint, seconds since the gun
    pub fn get(&self, checkpoint: Checkpoint) -> i64 {
        self.secs[checkpoint as usize]
    }

    /// Elapsed seconds within a segment. Negative for out-of-order
    /// timestamps; the preparer filters those rows after pace computation.
    pub fn segment_duration(&self, segment: Segment) -> i64 {
        let (start, end) = segment.endpoints();
        self.get(end) - self.get(start)
    }
}

/// Half/finish aggregate paces and the derived booleans.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HalfSplits {
    /// Second half duration in seconds (finish minus half)
    pub second_half_time: i64,
    /// Whole-race average pace, sec/mile, truncated
    pub finish_avg_pace: i64,
    /// First half average pace, sec/mile, truncated
    pub half_avg_pace: i64,
    /// Second half average pace, sec/mile, truncated
    pub second_half_avg_pace: i64,
    /// Second half duration minus first half duration, seconds
    pub second_half_time_diff: i64,
    /// The same difference as a percentage of the second half duration
    pub second_half_time_diff_percent: f64,
    /// Negative split: the second half was faster than the first
    pub second_half_faster: bool,
    /// Finish time strictly under four hours
    pub below_four_hours: bool,
    /// Whole-race average pace divided by finish time
    pub finish_avg_pace_norm: f64,
}

/// Per-runner segment pace vectors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SegmentPaces {
    /// The ten canonical segment paces in course order, sec/mile.
    /// Grid segments are truncated to whole seconds, irregular segments
    /// keep their real value.
    pub canonical: [f64; 10],
    /// Mile paces of the eight 5 km grid segments, always truncated with
    /// the 5km-in-miles constant. Input to the variability statistics only.
    pub mile_splits: [i64; 8],
    /// Cumulative average pace from the start at each grid checkpoint
    pub cumulative_avg: [f64; 8],
}

/// Spread of a runner's mile split paces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SplitVariability {
    /// Population standard deviation of the mile splits, truncated
    pub std_split_pace: i64,
    /// The same, normalized by whole-race average pace
    pub std_split_pace_norm: f64,
}

/// Fastest and slowest canonical segments of a runner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SplitExtremes {
    pub fastest_split: f64,
    pub slowest_split: f64,
    /// Segment the fastest pace came from (ties: first in course order)
    pub fastest_segment: Segment,
    /// Segment the slowest pace came from (ties: first in course order)
    pub slowest_segment: Segment,
    pub max_split_diff: f64,
    /// Spread normalized by whole-race average pace
    pub max_split_diff_norm: f64,
}

/// Pace-versus-distance regression slopes, sec/mile per mile.
/// Positive means the runner slowed down over the window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SplitTrends {
    pub full: f64,
    pub first_half: f64,
    pub second_half: f64,
}

/// One fully enriched runner row.
#[derive(Debug, Clone, Serialize)]
pub struct PreparedRow {
    /// Zero-based index of the row in the raw input, preserved across
    /// filtering so output rows stay traceable to their source
    pub source_row: usize,
    /// Identity column passed through from the input
    pub runner: Option<String>,
    pub times: CheckpointTimes,
    pub halves: HalfSplits,
    pub paces: SegmentPaces,
    pub variability: SplitVariability,
    pub extremes: SplitExtremes,
    pub trends: SplitTrends,
}

/// The prepared table: surviving rows plus drop counters for observability.
#[derive(Debug, Clone, Serialize)]
pub struct PreparedTable {
    pub rows: Vec<PreparedRow>,
    /// Rows dropped for a missing or malformed required timestamp
    pub dropped_missing: usize,
    /// Rows dropped for a negative canonical segment pace
    pub dropped_negative: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_duration() {
        let mut secs = [0i64; 11];
        for (i, slot) in secs.iter_mut().enumerate() {
            *slot = i as i64 * 1000;
        }
        let times = CheckpointTimes::new(secs);
        assert_eq!(times.segment_duration(crate::units::Segment::Km0To5), 1000);
        assert_eq!(
            times.segment_duration(crate::units::Segment::Km40ToFinish),
            1000
        );
    }

    #[test]
    fn test_time_text_start_is_synthetic() {
        let record = RawRecord::default();
        assert_eq!(record.time_text(Checkpoint::Start), None);
    }
}
