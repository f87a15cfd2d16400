//! Offset/limit pagination for list endpoints.

use serde::{Deserialize, Serialize};

/// Default number of items returned when no limit is given.
const DEFAULT_LIMIT: u64 = 100;
/// Maximum number of items a single request may ask for.
const MAX_LIMIT: u64 = 100;

/// Request parameters for paginated catalog queries.
///
/// The catalog is listed in stable insertion order, so plain offset/limit
/// windows are sufficient.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageRequest {
    /// Number of items to skip.
    #[serde(default)]
    pub offset: u64,
    /// Number of items to return.
    #[serde(default = "default_limit")]
    pub limit: u64,
}

impl PageRequest {
    /// Create a page request, clamping the limit to `1..=MAX_LIMIT`.
    pub fn new(offset: u64, limit: u64) -> Self {
        Self {
            offset,
            limit: limit.clamp(1, MAX_LIMIT),
        }
    }

    /// The SQL `OFFSET` value.
    pub fn offset(&self) -> i64 {
        self.offset as i64
    }

    /// The SQL `LIMIT` value.
    pub fn limit(&self) -> i64 {
        self.limit.clamp(1, MAX_LIMIT) as i64
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}
