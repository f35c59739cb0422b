//! CSV import for the raw checkpoint table.

use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{Result, SplitError};
use crate::models::RawRecord;
use crate::units::Checkpoint;

/// Timestamp columns the input table must carry. `0km.time` is synthetic
/// and therefore not required.
fn required_columns() -> impl Iterator<Item = &'static str> {
    Checkpoint::ALL
        .iter()
        .filter(|cp| **cp != Checkpoint::Start)
        .map(Checkpoint::time_column)
}

fn check_headers(headers: &csv::StringRecord) -> Result<()> {
    for column in required_columns() {
        if !headers.iter().any(|h| h == column) {
            return Err(SplitError::MissingColumn {
                column: column.to_string(),
            });
        }
    }
    Ok(())
}

/// Read raw runner records from any CSV source.
///
/// Fails fast if a required timestamp column is absent from the header;
/// malformed values inside rows are left for the preparer to drop at row
/// granularity.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<RawRecord>> {
    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
    check_headers(csv_reader.headers()?)?;

    let mut records = Vec::new();
    for result in csv_reader.deserialize() {
        let record: RawRecord = result?;
        records.push(record);
    }
    debug!(rows = records.len(), "read raw checkpoint table");
    Ok(records)
}

/// Read raw runner records from a CSV file.
pub fn read_csv(path: &Path) -> Result<Vec<RawRecord>> {
    let file = std::fs::File::open(path)?;
    read_records(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "runner,5km.time,10km.time,15km.time,20km.time,half.time,\
                          25km.time,30km.time,35km.time,40km.time,finish.time";

    #[test]
    fn test_read_well_formed_rows() {
        let csv = format!(
            "{HEADER}\n\
             A,0:30:00,1:00:00,1:30:00,2:00:00,2:06:35,2:30:00,3:00:00,3:30:00,4:00:00,4:13:10\n\
             B,0:28:00,0:57:00,1:26:00,1:55:00,2:01:30,2:24:00,2:53:00,3:23:00,3:54:00,4:07:00\n"
        );
        let records = read_records(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].runner.as_deref(), Some("A"));
        assert_eq!(records[1].km5_time.as_deref(), Some("0:28:00"));
    }

    #[test]
    fn test_missing_required_column_fails() {
        let csv = "runner,5km.time,10km.time\nA,0:30:00,1:00:00\n";
        let err = read_records(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, SplitError::MissingColumn { .. }));
    }

    #[test]
    fn test_sentinel_and_empty_cells_survive_import() {
        let csv = format!(
            "{HEADER}\n\
             A,0:30:00,1:00:00,1:30:00,2:00:00,\u{2013},2:30:00,3:00:00,3:30:00,4:00:00,4:13:10\n\
             B,0:30:00,1:00:00,1:30:00,2:00:00,2:06:35,2:30:00,3:00:00,3:30:00,4:00:00,\n"
        );
        let records = read_records(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].half_time.as_deref(), Some("\u{2013}"));
        // empty trailing cell still deserializes; the preparer drops the row
        assert!(records[1]
            .finish_time
            .as_deref()
            .map(str::is_empty)
            .unwrap_or(true));
    }
}
