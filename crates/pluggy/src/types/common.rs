//! Types shared across Pluggy resources.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::query::QueryParams;

/// ISO currency code used for account, transaction and investment amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurrencyCode {
    /// Brazilian real.
    BRL,
    /// United States dollar.
    USD,
}

/// Paginated response wrapper returned by list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// Resources in the current page.
    pub results: Vec<T>,
}

/// Page-selection filters shared by list endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageFilters {
    /// Page number to fetch (1-based).
    pub page: Option<u32>,
    /// Number of results per page.
    pub page_size: Option<u32>,
}

impl PageFilters {
    pub(crate) fn append_to(&self, params: &mut QueryParams) {
        if let Some(page) = self.page {
            params.push("page", page);
        }
        if let Some(page_size) = self.page_size {
            params.push("pageSize", page_size);
        }
    }
}

/// User-supplied connector credentials, keyed by parameter name.
pub type Parameters = HashMap<String, String>;
