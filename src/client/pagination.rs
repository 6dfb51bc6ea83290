//! Cursor pagination for Atlassian admin API list endpoints
//!
//! List endpoints return `{"data": [...], "links": {"next": "<url>"}}`. The
//! cursor for the following request is the `cursor` query parameter of the
//! `next` URL. [`cursor_pages`] turns a page-fetch function into a lazy stream
//! of pages, and [`collect_pages`] drains such a stream into a single list.

use std::future::Future;

use futures::stream::{self, Stream, StreamExt};
use log::{debug, warn};
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Error, Result};

/// A single page from a cursor-paginated list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,

    /// Navigation links
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<PageLinks>,
}

/// Navigation links attached to a page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

impl<T> Page<T> {
    /// A final page with no further links.
    #[cfg(test)]
    pub fn last(data: Vec<T>) -> Self {
        Self { data, links: None }
    }

    /// A page whose `next` link points at the given URL.
    #[cfg(test)]
    pub fn with_next(data: Vec<T>, next: impl Into<String>) -> Self {
        Self {
            data,
            links: Some(PageLinks {
                next: Some(next.into()),
            }),
        }
    }

    /// Cursor for the following page, if any.
    pub fn next_cursor(&self) -> Option<String> {
        let next = self.links.as_ref()?.next.as_deref()?;
        cursor_from_link(next)
    }
}

/// Extract the `cursor` query parameter from a `next` link.
///
/// Relative links are resolved against a placeholder base, since only the
/// query string matters.
pub fn cursor_from_link(link: &str) -> Option<String> {
    let link = link.trim();
    if link.is_empty() {
        return None;
    }

    let url = Url::parse(link)
        .or_else(|_| Url::parse("http://localhost/").and_then(|base| base.join(link)))
        .ok()?;

    url.query_pairs()
        .find(|(key, _)| key == "cursor")
        .map(|(_, value)| value.into_owned())
        .filter(|cursor| !cursor.is_empty())
}

/// Result of draining a page stream.
#[derive(Debug)]
pub struct Collected<T> {
    /// Every item received, in page order
    pub items: Vec<T>,

    /// Error that cut the listing short, if any
    pub interrupted_by: Option<ApiError>,
}

impl<T> Collected<T> {
    pub fn is_complete(&self) -> bool {
        self.interrupted_by.is_none()
    }
}

enum Position {
    Start,
    At(String),
    Done,
}

/// Walk a cursor-paginated endpoint as a stream of pages.
///
/// `fetch` is called with `None` for the first page and with each extracted
/// cursor afterwards. The stream ends after the page without a next cursor,
/// or right after yielding the first error.
pub fn cursor_pages<T, F, Fut>(fetch: F) -> impl Stream<Item = Result<Vec<T>>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    stream::unfold((Position::Start, fetch), |(position, mut fetch)| async move {
        let cursor = match position {
            Position::Done => return None,
            Position::Start => None,
            Position::At(cursor) => Some(cursor),
        };

        debug!("Fetching page (cursor: {:?})", cursor);

        match fetch(cursor).await {
            Ok(page) => {
                let next = match page.next_cursor() {
                    Some(cursor) => Position::At(cursor),
                    None => Position::Done,
                };
                Some((Ok(page.data), (next, fetch)))
            }
            Err(err) => Some((Err(err), (Position::Done, fetch))),
        }
    })
}

/// Drain a page stream into a single list.
///
/// A failed page ends collection; the items gathered so far are kept and the
/// failure is logged and returned alongside them.
pub async fn collect_pages<T, S>(pages: S, resource: &str) -> Collected<T>
where
    S: Stream<Item = Result<Vec<T>>>,
{
    let mut pages = std::pin::pin!(pages);
    let mut items = Vec::new();
    let mut page_count = 0usize;

    while let Some(page) = pages.next().await {
        match page {
            Ok(batch) => {
                page_count += 1;
                debug!("Received {} {} on page {}", batch.len(), resource, page_count);
                items.extend(batch);
            }
            Err(err) => {
                let err = match err {
                    Error::Api(api) => api,
                    other => ApiError::InvalidResponse(other.to_string()),
                };
                warn!(
                    "Listing {} stopped after {} pages ({} items): {}",
                    resource,
                    page_count,
                    items.len(),
                    err
                );
                return Collected {
                    items,
                    interrupted_by: Some(err),
                };
            }
        }
    }

    Collected {
        items,
        interrupted_by: None,
    }
}
