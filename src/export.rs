//! Export of the prepared table: enriched CSV, JSON, and the
//! pretty-printed terminal view.
//!
//! The pretty printer is plain formatting glue over the prepared rows; it
//! re-renders the second-resolution `.time` columns as `H:MM:SS` for
//! display only.

use std::io::Write;

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::error::Result;
use crate::models::{PreparedRow, PreparedTable};
use crate::timecode;
use crate::units::{Checkpoint, Segment, SPLIT_GRID_KM};

/// Column order of the enriched CSV.
fn csv_header() -> Vec<String> {
    let mut header = vec!["runner".to_string()];
    for checkpoint in Checkpoint::ALL {
        header.push(checkpoint.time_column().to_string());
    }
    header.extend(
        [
            "finish.avg_pace",
            "half.avg_pace",
            "2nd_half.time",
            "2nd_half.avg_pace",
            "2nd_half.time_diff",
            "2nd_half.time_diff_percent",
            "2nd_half_faster",
            "below_four_hours",
            "5km_split_pace",
        ]
        .map(str::to_string),
    );
    for segment in Segment::ALL {
        header.push(segment.column().to_string());
    }
    for km in SPLIT_GRID_KM {
        header.push(format!("{km}km.avg_pace"));
    }
    header.extend(
        [
            "finish.avg_pace_norm",
            "std_split_pace",
            "std_split_pace_norm",
            "fastest_split",
            "slowest_split",
            "max_split_diff",
            "max_split_diff_norm",
            "fastest_split.name",
            "slowest_split.name",
            "split_trend",
            "1st_half.split_trend",
            "2nd_half.split_trend",
        ]
        .map(str::to_string),
    );
    header
}

fn csv_fields(row: &PreparedRow) -> Vec<String> {
    let mut fields = vec![row.runner.clone().unwrap_or_default()];
    for checkpoint in Checkpoint::ALL {
        fields.push(row.times.get(checkpoint).to_string());
    }

    let halves = &row.halves;
    fields.push(halves.finish_avg_pace.to_string());
    fields.push(halves.half_avg_pace.to_string());
    fields.push(halves.second_half_time.to_string());
    fields.push(halves.second_half_avg_pace.to_string());
    fields.push(halves.second_half_time_diff.to_string());
    fields.push(halves.second_half_time_diff_percent.to_string());
    fields.push(halves.second_half_faster.to_string());
    fields.push(halves.below_four_hours.to_string());

    let splits: Vec<String> = row
        .paces
        .mile_splits
        .iter()
        .map(|pace| pace.to_string())
        .collect();
    fields.push(splits.join(";"));

    for pace in row.paces.canonical {
        fields.push(pace.to_string());
    }
    for avg in row.paces.cumulative_avg {
        fields.push(avg.to_string());
    }

    fields.push(halves.finish_avg_pace_norm.to_string());
    fields.push(row.variability.std_split_pace.to_string());
    fields.push(row.variability.std_split_pace_norm.to_string());
    fields.push(row.extremes.fastest_split.to_string());
    fields.push(row.extremes.slowest_split.to_string());
    fields.push(row.extremes.max_split_diff.to_string());
    fields.push(row.extremes.max_split_diff_norm.to_string());
    fields.push(row.extremes.fastest_segment.column().to_string());
    fields.push(row.extremes.slowest_segment.column().to_string());
    fields.push(row.trends.full.to_string());
    fields.push(row.trends.first_half.to_string());
    fields.push(row.trends.second_half.to_string());
    fields
}

/// Write the enriched table as CSV. Time columns stay in seconds.
pub fn write_csv<W: Write>(writer: W, table: &PreparedTable) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(csv_header())?;
    for row in &table.rows {
        csv_writer.write_record(csv_fields(row))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the enriched table as pretty-printed JSON.
pub fn write_json<W: Write>(writer: W, table: &PreparedTable) -> Result<()> {
    serde_json::to_writer_pretty(writer, table)?;
    Ok(())
}

/// Render a human-readable summary table for the first `limit` rows, with
/// `.time` columns formatted back to `H:MM:SS` and paces to `M:SS`.
pub fn pretty_table(table: &PreparedTable, limit: usize) -> String {
    let mut builder = Builder::default();
    builder.push_record([
        "runner", "half", "finish", "avg pace", "std", "fastest", "slowest", "trend",
    ]);

    for row in table.rows.iter().take(limit) {
        builder.push_record([
            row.runner.clone().unwrap_or_else(|| row.source_row.to_string()),
            timecode::format_duration(row.times.get(Checkpoint::Half) as f64),
            timecode::format_duration(row.times.get(Checkpoint::Finish) as f64),
            timecode::format_pace(row.halves.finish_avg_pace as f64),
            row.variability.std_split_pace.to_string(),
            format!(
                "{} ({})",
                timecode::format_pace(row.extremes.fastest_split),
                row.extremes.fastest_segment.label()
            ),
            format!(
                "{} ({})",
                timecode::format_pace(row.extremes.slowest_split),
                row.extremes.slowest_segment.label()
            ),
            format!("{:+.2}", row.trends.full),
        ]);
    }

    builder.build().with(Style::rounded()).to_string()
}
