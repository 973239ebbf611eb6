//! Pagination request parameters and decoded pages

use serde::Serialize;

use crate::config::api;

use super::models::FlexNumber;

/// Pagination and sort parameters for list endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationRequest {
    /// 0 means the platform maximum
    pub page_size: u32,
    pub page_token: Option<String>,
    pub page: Option<String>,
    pub sort_field: Option<String>,
    pub sort_dir: Option<String>,
}

impl PaginationRequest {
    /// Page size actually sent: defaults to and never exceeds the maximum
    pub fn effective_page_size(&self) -> u32 {
        match self.page_size {
            0 => api::MAX_PAGE_SIZE,
            size => size.min(api::MAX_PAGE_SIZE),
        }
    }

    /// Query parameters in wire names. Unset optional fields are omitted.
    pub fn to_query_params(&self) -> Vec<(String, String)> {
        let mut params = vec![(
            "pageSize".to_string(),
            self.effective_page_size().to_string(),
        )];

        let optional = [
            ("pageToken", &self.page_token),
            ("page", &self.page),
            ("sortField", &self.sort_field),
            ("sortDir", &self.sort_dir),
        ];
        for (key, value) in optional {
            if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
                params.push((key.to_string(), v.to_string()));
            }
        }

        params
    }
}

/// Standard parameters for list endpoints that are always fetched at full size
pub fn standard_params() -> Vec<(String, String)> {
    PaginationRequest::default().to_query_params()
}

/// One decoded page of a list endpoint
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_page_token: Option<String>,
    pub total_count: Option<FlexNumber>,
}

impl<T> Page<T> {
    pub fn has_more(&self) -> bool {
        self.next_page_token
            .as_deref()
            .is_some_and(|token| !token.is_empty())
    }
}
