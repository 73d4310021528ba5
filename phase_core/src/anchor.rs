//! Anchor points and the validated pressure table.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::TableError;

/// A known saturation state: pressure in MPa and the specific volumes
/// (m³/kg) of the liquid and vapor phases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorPoint {
    pub pressure: f64,
    pub liquid_volume: f64,
    pub vapor_volume: f64,
}

impl AnchorPoint {
    pub const fn new(pressure: f64, liquid_volume: f64, vapor_volume: f64) -> Self {
        Self {
            pressure,
            liquid_volume,
            vapor_volume,
        }
    }

    /// The liquid/vapor pair stored at this anchor.
    pub fn volumes(&self) -> PhaseVolumes {
        PhaseVolumes {
            liquid: self.liquid_volume,
            vapor: self.vapor_volume,
        }
    }
}

/// Liquid and vapor specific volumes at one pressure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseVolumes {
    pub liquid: f64,
    pub vapor: f64,
}

impl PhaseVolumes {
    /// Both volumes rounded to `decimals` digits (see [`crate::round_to`]).
    pub fn rounded(self, decimals: u32) -> Self {
        Self {
            liquid: crate::interpolate::round_to(self.liquid, decimals),
            vapor: crate::interpolate::round_to(self.vapor, decimals),
        }
    }
}

/// Water anchors: saturation at 0.05 MPa and the critical point taken at 10 MPa.
pub const WATER_ANCHORS: [AnchorPoint; 2] = [
    AnchorPoint::new(0.05, 0.00105, 30.00),
    AnchorPoint::new(10.00, 0.00350, 0.0035),
];

static WATER_TABLE: LazyLock<AnchorTable> = LazyLock::new(|| AnchorTable {
    points: WATER_ANCHORS.to_vec(),
});

/// Anchor points sorted by strictly increasing pressure.
///
/// Holds at least two points, every value finite and positive. These
/// invariants are checked once in [`AnchorTable::new`]; the interpolator
/// relies on them and never re-validates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnchorTable {
    points: Vec<AnchorPoint>,
}

impl AnchorTable {
    /// Build a table, rejecting short, unsorted, duplicated or non-physical data.
    pub fn new(points: Vec<AnchorPoint>) -> Result<Self, TableError> {
        if points.len() < 2 {
            return Err(TableError::TooFewPoints {
                count: points.len(),
            });
        }

        for (index, point) in points.iter().enumerate() {
            for (field, value) in [
                ("pressure", point.pressure),
                ("liquid_volume", point.liquid_volume),
                ("vapor_volume", point.vapor_volume),
            ] {
                if !value.is_finite() || value <= 0.0 {
                    return Err(TableError::InvalidValue {
                        index,
                        field,
                        value,
                    });
                }
            }
        }

        if let Some(index) = points
            .windows(2)
            .position(|pair| pair[1].pressure <= pair[0].pressure)
        {
            return Err(TableError::NotStrictlyIncreasing {
                index: index + 1,
                previous: points[index].pressure,
                current: points[index + 1].pressure,
            });
        }

        Ok(Self { points })
    }

    /// The process-wide water table, built on first use and never mutated.
    pub fn water() -> &'static AnchorTable {
        &WATER_TABLE
    }

    pub fn points(&self) -> &[AnchorPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; a table has at least two points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn min_pressure(&self) -> f64 {
        self.points[0].pressure
    }

    pub fn max_pressure(&self) -> f64 {
        self.points[self.points.len() - 1].pressure
    }

    /// Whether `pressure` lies in the closed interval covered by the table.
    /// NaN is never contained.
    pub fn contains(&self, pressure: f64) -> bool {
        self.min_pressure() <= pressure && pressure <= self.max_pressure()
    }
}
