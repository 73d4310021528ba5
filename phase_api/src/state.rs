//! API server state.

use phase_core::AnchorTable;

/// Shared state for the API server.
#[derive(Clone, Copy, Debug)]
pub struct ApiState {
    /// Read-only anchor table used for every request.
    pub table: &'static AnchorTable,
}

impl ApiState {
    /// Create new API state over the given table.
    pub fn new(table: &'static AnchorTable) -> Self {
        Self { table }
    }

    /// State backed by the process-wide water table.
    pub fn water() -> Self {
        Self::new(AnchorTable::water())
    }
}
