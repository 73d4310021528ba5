//! Saturated specific volumes by linear interpolation over a pressure table.
//!
//! The crate holds the anchor data model and the interpolator used by the
//! `phase_api` server:
//!
//! - [`AnchorPoint`] / [`AnchorTable`]: a validated, strictly ascending
//!   pressure table
//! - [`AnchorTable::interpolate`]: bracketing search plus a linear blend of the
//!   liquid and vapor volumes
//! - [`interpolate`]: the same over the process-wide water table

pub mod anchor;
pub mod error;
pub mod interpolate;

pub use anchor::{AnchorPoint, AnchorTable, PhaseVolumes, WATER_ANCHORS};
pub use error::{InterpolationError, TableError};
pub use interpolate::{interpolate, round_to, ROUNDING_DECIMALS};

/// Result alias for interpolation.
pub type Result<T> = std::result::Result<T, InterpolationError>;
