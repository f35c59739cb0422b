// Library interface for the splitrs modules
// This allows integration tests to access the core functionality

pub mod error;
pub mod export;
pub mod import;
pub mod logging;
pub mod models;
pub mod pace;
pub mod prepare;
pub mod timecode;
pub mod trend;
pub mod units;
pub mod variability;

// Re-export commonly used types for convenience
pub use error::{Result, SplitError};
pub use models::{CheckpointTimes, PreparedRow, PreparedTable, RawRecord};
pub use prepare::prep_data;
pub use trend::{fit_line, LinearFit, TrendWindow};
pub use units::{Checkpoint, Segment, UnitConstants};
