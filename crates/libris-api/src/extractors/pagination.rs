//! Query-string pagination parameters.

use serde::Deserialize;

use libris_core::types::pagination::PageRequest;

/// Pagination query parameters (`?skip=0&limit=100`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    pub skip: Option<u64>,
    pub limit: Option<u64>,
}

impl From<PaginationParams> for PageRequest {
    fn from(params: PaginationParams) -> Self {
        match params.limit {
            Some(limit) => PageRequest::new(params.skip.unwrap_or(0), limit),
            None => PageRequest {
                offset: params.skip.unwrap_or(0),
                ..PageRequest::default()
            },
        }
    }
}
