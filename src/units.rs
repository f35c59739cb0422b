//! Unit conversion constants and the canonical checkpoint/segment tables.
//!
//! Every derived column is produced from a single `UnitConstants` value so
//! that revising a conversion factor cannot leave two columns computed from
//! different constants.

use serde::{Deserialize, Serialize};

/// Fixed unit-conversion factors shared by all derived calculations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitConstants {
    /// Length of a regular 5 km split in miles
    pub five_km_miles: f64,

    /// Kilometres-to-miles conversion factor
    pub km_to_miles: f64,

    /// Half marathon distance in kilometres
    pub half_marathon_km: f64,

    /// Full marathon distance in kilometres
    pub full_marathon_km: f64,

    /// Marathon distance in miles, used by the aggregate average paces
    pub marathon_miles: f64,

    /// Half marathon distance in miles
    pub half_marathon_miles: f64,
}

impl Default for UnitConstants {
    fn default() -> Self {
        Self {
            five_km_miles: 3.10686,
            km_to_miles: 0.621371,
            half_marathon_km: 21.0975,
            full_marathon_km: 42.195,
            marathon_miles: 26.2,
            half_marathon_miles: 13.1,
        }
    }
}

/// Distances of the regular 5 km checkpoint grid, in kilometres
pub const SPLIT_GRID_KM: [u32; 8] = [5, 10, 15, 20, 25, 30, 35, 40];

/// Finish time below which a runner counts as sub-four-hours (strict)
pub const FOUR_HOURS_SECS: i64 = 14_400;

/// A timing checkpoint on the marathon course, in course order.
///
/// `Start` is synthetic (time 0 by definition). `Half` and `Finish` do not
/// sit on the 5 km grid, which is why the segments around them need distinct
/// length handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Checkpoint {
    Start = 0,
    Km5 = 1,
    Km10 = 2,
    Km15 = 3,
    Km20 = 4,
    Half = 5,
    Km25 = 6,
    Km30 = 7,
    Km35 = 8,
    Km40 = 9,
    Finish = 10,
}

impl Checkpoint {
    /// All checkpoints in course order
    pub const ALL: [Checkpoint; 11] = [
        Checkpoint::Start,
        Checkpoint::Km5,
        Checkpoint::Km10,
        Checkpoint::Km15,
        Checkpoint::Km20,
        Checkpoint::Half,
        Checkpoint::Km25,
        Checkpoint::Km30,
        Checkpoint::Km35,
        Checkpoint::Km40,
        Checkpoint::Finish,
    ];

    /// The regular 5 km grid plus the start, skipping half and finish.
    /// Consecutive pairs of this sequence are the mile-split segments.
    pub const GRID: [Checkpoint; 9] = [
        Checkpoint::Start,
        Checkpoint::Km5,
        Checkpoint::Km10,
        Checkpoint::Km15,
        Checkpoint::Km20,
        Checkpoint::Km25,
        Checkpoint::Km30,
        Checkpoint::Km35,
        Checkpoint::Km40,
    ];

    /// Column name of this checkpoint's timestamp in the source table
    pub fn time_column(&self) -> &'static str {
        match self {
            Checkpoint::Start => "0km.time",
            Checkpoint::Km5 => "5km.time",
            Checkpoint::Km10 => "10km.time",
            Checkpoint::Km15 => "15km.time",
            Checkpoint::Km20 => "20km.time",
            Checkpoint::Half => "half.time",
            Checkpoint::Km25 => "25km.time",
            Checkpoint::Km30 => "30km.time",
            Checkpoint::Km35 => "35km.time",
            Checkpoint::Km40 => "40km.time",
            Checkpoint::Finish => "finish.time",
        }
    }

    /// Course distance of this checkpoint in kilometres
    pub fn distance_km(&self, units: &UnitConstants) -> f64 {
        match self {
            Checkpoint::Start => 0.0,
            Checkpoint::Km5 => 5.0,
            Checkpoint::Km10 => 10.0,
            Checkpoint::Km15 => 15.0,
            Checkpoint::Km20 => 20.0,
            Checkpoint::Half => units.half_marathon_km,
            Checkpoint::Km25 => 25.0,
            Checkpoint::Km30 => 30.0,
            Checkpoint::Km35 => 35.0,
            Checkpoint::Km40 => 40.0,
            Checkpoint::Finish => units.full_marathon_km,
        }
    }
}

/// One of the ten canonical inter-checkpoint segments.
///
/// Seven segments span exactly 5 km on the grid; the three irregular ones
/// (`Km20ToHalf`, `HalfTo25`, `Km40ToFinish`) have non-integral lengths and
/// keep real-valued paces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Segment {
    Km0To5,
    Km5To10,
    Km10To15,
    Km15To20,
    Km20ToHalf,
    HalfTo25,
    Km25To30,
    Km30To35,
    Km35To40,
    Km40ToFinish,
}

impl Segment {
    /// All canonical segments in course order
    pub const ALL: [Segment; 10] = [
        Segment::Km0To5,
        Segment::Km5To10,
        Segment::Km10To15,
        Segment::Km15To20,
        Segment::Km20ToHalf,
        Segment::HalfTo25,
        Segment::Km25To30,
        Segment::Km30To35,
        Segment::Km35To40,
        Segment::Km40ToFinish,
    ];

    /// Start and end checkpoints of this segment
    pub fn endpoints(&self) -> (Checkpoint, Checkpoint) {
        match self {
            Segment::Km0To5 => (Checkpoint::Start, Checkpoint::Km5),
            Segment::Km5To10 => (Checkpoint::Km5, Checkpoint::Km10),
            Segment::Km10To15 => (Checkpoint::Km10, Checkpoint::Km15),
            Segment::Km15To20 => (Checkpoint::Km15, Checkpoint::Km20),
            Segment::Km20ToHalf => (Checkpoint::Km20, Checkpoint::Half),
            Segment::HalfTo25 => (Checkpoint::Half, Checkpoint::Km25),
            Segment::Km25To30 => (Checkpoint::Km25, Checkpoint::Km30),
            Segment::Km30To35 => (Checkpoint::Km30, Checkpoint::Km35),
            Segment::Km35To40 => (Checkpoint::Km35, Checkpoint::Km40),
            Segment::Km40ToFinish => (Checkpoint::Km40, Checkpoint::Finish),
        }
    }

    /// Course distance at the start of this segment, in kilometres
    pub fn start_distance_km(&self, units: &UnitConstants) -> f64 {
        self.endpoints().0.distance_km(units)
    }

    /// Course distance at the end of this segment, in kilometres.
    /// Used as the segment's x-coordinate by the trend estimator.
    pub fn end_distance_km(&self, units: &UnitConstants) -> f64 {
        self.endpoints().1.distance_km(units)
    }

    /// Whether this segment spans a non-integral distance (abuts the half
    /// marathon mark or the finish)
    pub fn is_irregular(&self) -> bool {
        matches!(
            self,
            Segment::Km20ToHalf | Segment::HalfTo25 | Segment::Km40ToFinish
        )
    }

    /// Column name of this segment's pace in the prepared table
    pub fn column(&self) -> &'static str {
        match self {
            Segment::Km0To5 => "5km.pace",
            Segment::Km5To10 => "10km.pace",
            Segment::Km10To15 => "15km.pace",
            Segment::Km15To20 => "20km.pace",
            Segment::Km20ToHalf => "20km_to_half.pace",
            Segment::HalfTo25 => "half_to_25km.pace",
            Segment::Km25To30 => "30km.pace",
            Segment::Km30To35 => "35km.pace",
            Segment::Km35To40 => "40km.pace",
            Segment::Km40ToFinish => "40km_to_finish.pace",
        }
    }

    /// Human-readable label for reports and figures
    pub fn label(&self) -> &'static str {
        match self {
            Segment::Km0To5 => "0 - 5km",
            Segment::Km5To10 => "5 - 10km",
            Segment::Km10To15 => "10 - 15km",
            Segment::Km15To20 => "15 - 20km",
            Segment::Km20ToHalf => "20km - Half",
            Segment::HalfTo25 => "Half - 25km",
            Segment::Km25To30 => "25 - 30km",
            Segment::Km30To35 => "30 - 35km",
            Segment::Km35To40 => "35 - 40km",
            Segment::Km40ToFinish => "40km - Finish",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkpoint_distances_strictly_increasing() {
        let units = UnitConstants::default();
        for pair in Checkpoint::ALL.windows(2) {
            assert!(pair[0].distance_km(&units) < pair[1].distance_km(&units));
        }
    }

    #[test]
    fn test_segments_tile_the_course() {
        let units = UnitConstants::default();
        for pair in Segment::ALL.windows(2) {
            assert_eq!(pair[0].endpoints().1, pair[1].endpoints().0);
        }
        assert_eq!(Segment::ALL[0].start_distance_km(&units), 0.0);
        assert_eq!(
            Segment::ALL[9].end_distance_km(&units),
            units.full_marathon_km
        );
    }

    #[test]
    fn test_irregular_segments() {
        let irregular: Vec<Segment> = Segment::ALL
            .iter()
            .copied()
            .filter(Segment::is_irregular)
            .collect();
        assert_eq!(
            irregular,
            vec![Segment::Km20ToHalf, Segment::HalfTo25, Segment::Km40ToFinish]
        );
    }

    #[test]
    fn test_grid_matches_split_distances() {
        let units = UnitConstants::default();
        for (cp, km) in Checkpoint::GRID[1..].iter().zip(SPLIT_GRID_KM) {
            assert_eq!(cp.distance_km(&units), km as f64);
        }
    }
}
