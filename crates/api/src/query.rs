//! Shared query parameter types for API handlers.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use casting_core::pagination::parse_page;
use serde::Deserialize;

/// Raw `?page=` parameter.
///
/// Kept as a string so that non-numeric values can fall back to page 1
/// instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl PageParams {
    pub fn page(&self) -> i64 {
        parse_page(self.page.as_deref())
    }
}

/// Requested 1-based page number. Never rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(pub i64);

impl<S> FromRequestParts<S> for Page
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = Query::<PageParams>::from_request_parts(parts, state)
            .await
            .map(|Query(params)| params)
            .unwrap_or_default();
        Ok(Page(params.page()))
    }
}
