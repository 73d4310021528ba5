//! Linear interpolation of phase volumes between bracketing anchors.

use tracing::trace;

use crate::anchor::{AnchorTable, PhaseVolumes};
use crate::error::InterpolationError;
use crate::Result;

/// Decimal digits kept in values handed to callers.
pub const ROUNDING_DECIMALS: u32 = 6;

/// Round to `decimals` digits, correctly rounded on the exact binary value
/// (ties to even).
pub fn round_to(value: f64, decimals: u32) -> f64 {
    format!("{:.*}", decimals as usize, value)
        .parse()
        .unwrap_or(value)
}

/// Interpolate against the process-wide water table.
pub fn interpolate(pressure: f64) -> Result<PhaseVolumes> {
    AnchorTable::water().interpolate(pressure)
}

impl AnchorTable {
    /// Volumes at `pressure`, rounded to [`ROUNDING_DECIMALS`] digits.
    ///
    /// # Errors
    ///
    /// [`InterpolationError::OutOfRange`] when `pressure` is NaN or falls
    /// outside `[min_pressure, max_pressure]`.
    pub fn interpolate(&self, pressure: f64) -> Result<PhaseVolumes> {
        self.interpolate_exact(pressure)
            .map(|volumes| volumes.rounded(ROUNDING_DECIMALS))
    }

    /// Volumes at `pressure` without rounding.
    pub fn interpolate_exact(&self, pressure: f64) -> Result<PhaseVolumes> {
        if !self.contains(pressure) {
            return Err(InterpolationError::OutOfRange {
                pressure,
                min: self.min_pressure(),
                max: self.max_pressure(),
            });
        }

        let points = self.points();

        // First anchor at or above the requested pressure. In range, so idx < len.
        let idx = points.partition_point(|p| p.pressure < pressure);
        let upper = &points[idx];
        if upper.pressure == pressure {
            return Ok(upper.volumes());
        }

        // Not an anchor and not below the first one, so idx >= 1.
        let lower = &points[idx - 1];
        let t = (pressure - lower.pressure) / (upper.pressure - lower.pressure);
        trace!(pressure, lower = lower.pressure, upper = upper.pressure, t, "interpolating");

        Ok(PhaseVolumes {
            liquid: lerp(lower.liquid_volume, upper.liquid_volume, t),
            vapor: lerp(lower.vapor_volume, upper.vapor_volume, t),
        })
    }
}

fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start + t * (end - start)
}
