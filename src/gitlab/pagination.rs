//! Offset pagination
//!
//! GitLab listing endpoints take `page` / `per_page` query parameters and
//! report position in `X-Page`, `X-Total-Pages`, `X-Per-Page` and
//! `X-Next-Page` response headers.

use log::{debug, warn};
use reqwest::header::HeaderMap;
use std::future::Future;

use crate::config::headers as page_headers;
use crate::error::Result;

/// Position of one page within a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageDescriptor {
    /// 1-based page number of this response
    pub current_page: u32,
    /// Total number of pages, when the server reports it
    pub total_pages: Option<u32>,
    /// Page size used by the server
    pub per_page: u32,
    /// Next page number, when the server advertises one
    pub next_page: Option<u32>,
}

impl PageDescriptor {
    /// Build a descriptor from response headers.
    ///
    /// Missing or malformed headers fall back to the values of the request,
    /// so a server that sends no pagination headers yields a complete page.
    pub fn from_headers(
        headers: &HeaderMap,
        requested_page: u32,
        requested_per_page: u32,
    ) -> Self {
        Self {
            current_page: header_u32(headers, page_headers::PAGE).unwrap_or(requested_page),
            total_pages: header_u32(headers, page_headers::TOTAL_PAGES),
            per_page: header_u32(headers, page_headers::PER_PAGE).unwrap_or(requested_per_page),
            next_page: header_u32(headers, page_headers::NEXT_PAGE),
        }
    }

    /// Whether no further pages need to be requested
    pub fn is_complete(&self) -> bool {
        match self.total_pages {
            Some(total) => self.current_page >= total,
            // GitLab omits X-Total-Pages on very large listings
            None => self.next_page.is_none(),
        }
    }
}

fn header_u32(headers: &HeaderMap, name: &str) -> Option<u32> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse().ok())
}

/// One page of a listing
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub descriptor: PageDescriptor,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, descriptor: PageDescriptor) -> Self {
        Self { items, descriptor }
    }
}

/// Drive a listing operation until all pages are consumed.
///
/// `fetch_page` is called with page numbers starting at 1, strictly one after
/// another. Items are appended in arrival order. The first failing page
/// aborts the loop and its error is returned unchanged.
pub async fn fetch_all_pages<T, F, Fut>(
    per_page: u32,
    error_context: &str,
    mut fetch_page: F,
) -> Result<Vec<T>>
where
    F: FnMut(u32, u32) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let mut all_items = Vec::new();
    let mut page = 1;

    loop {
        let Page { items, descriptor } = fetch_page(page, per_page).await?;

        debug!(
            "Page {}/{} of {} returned {} items",
            descriptor.current_page,
            descriptor
                .total_pages
                .map_or_else(|| "?".to_string(), |t| t.to_string()),
            error_context,
            items.len()
        );

        all_items.extend(items);

        if descriptor.is_complete() {
            break;
        }

        // Never step backwards, even if the server echoes a stale page number
        let next = descriptor
            .next_page
            .unwrap_or_else(|| descriptor.current_page.saturating_add(1))
            .max(page.saturating_add(1));
        if next <= page {
            warn!(
                "Page number of {} cannot advance past {}; stopping",
                error_context, page
            );
            break;
        }
        page = next;
    }

    debug!(
        "Fetched {} total items for {}",
        all_items.len(),
        error_context
    );
    Ok(all_items)
}
