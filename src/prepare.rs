//! The data preparer: orchestrates parsing, feature computation, and row
//! filtering over the whole dataset.
//!
//! The input is never mutated; every surviving row keeps the index it had
//! in the raw table.

use tracing::{debug, info, warn};

use crate::models::{CheckpointTimes, PreparedRow, PreparedTable, RawRecord};
use crate::timecode;
use crate::units::{Checkpoint, UnitConstants};
use crate::{pace, trend, variability};

/// Parse a raw row's timestamps into a checkpoint vector.
///
/// Any missing or malformed required timestamp makes the whole row
/// unusable; there is no partial-row repair.
fn parse_times(record: &RawRecord) -> Option<CheckpointTimes> {
    let mut secs = [0i64; 11];
    for checkpoint in Checkpoint::ALL {
        if checkpoint == Checkpoint::Start {
            continue; // synthetic, always 0
        }
        let parsed = timecode::parse_duration(record.time_text(checkpoint))
            .ok()
            .flatten()?;
        secs[checkpoint as usize] = parsed;
    }
    Some(CheckpointTimes::new(secs))
}

/// Prepare the full dataset: convert timestamps, derive all pace columns,
/// and filter out rows with missing data or negative segment paces.
///
/// Rows are dropped in two passes. First, any row with an unparseable
/// required timestamp goes. Then, after all pace columns are computed, any
/// row with a negative canonical pace goes; extremes and trends are only
/// computed for rows that survive, so no reported extreme can come from a
/// filtered-out value.
pub fn prep_data(records: &[RawRecord], units: &UnitConstants) -> PreparedTable {
    let mut rows = Vec::with_capacity(records.len());
    let mut dropped_missing = 0usize;
    let mut dropped_negative = 0usize;

    for (source_row, record) in records.iter().enumerate() {
        let Some(times) = parse_times(record) else {
            debug!(row = source_row, "dropping row with missing or malformed timestamp");
            dropped_missing += 1;
            continue;
        };

        let halves = pace::half_splits(&times, units);
        let paces = pace::all_paces(&times, units);
        let variability = variability::split_variability(&paces.mile_splits, halves.finish_avg_pace);

        if paces.canonical.iter().any(|&p| p < 0.0) {
            debug!(row = source_row, "dropping row with negative segment pace");
            dropped_negative += 1;
            continue;
        }

        let extremes = variability::split_extremes(&paces.canonical, halves.finish_avg_pace);
        let trends = trend::split_trends(&paces.canonical, units);

        rows.push(PreparedRow {
            source_row,
            runner: record.runner.clone(),
            times,
            halves,
            paces,
            variability,
            extremes,
            trends,
        });
    }

    if dropped_missing > 0 {
        warn!(count = dropped_missing, "dropped rows with missing or malformed checkpoint times");
    }
    if dropped_negative > 0 {
        warn!(count = dropped_negative, "dropped rows with negative segment paces");
    }
    info!(
        rows_in = records.len(),
        rows_out = rows.len(),
        "prepared split table"
    );

    PreparedTable {
        rows,
        dropped_missing,
        dropped_negative,
    }
}
