// Feed service module
// Paginated remote event feed: trait seam, wire DTOs, HTTP client

mod client;
pub mod dto;

pub use client::HttpEventFeed;
pub use dto::{FeedMeta, FeedPage, RawAttachment, RawEvent};

use thiserror::Error;

/// Why a page fetch failed. Transport problems and HTTP-level rejections are
/// kept apart so the UI can word them differently; both recover the same
/// way, through an explicit user retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server responded with HTTP {0}")]
    Status(u16),

    #[error("malformed feed response: {0}")]
    Decode(String),
}

/// The paginated fetch collaborator.
///
/// `page` is 1-based. Implementations must be shareable with worker threads;
/// the UI shell runs fetches off the frame loop.
#[cfg_attr(test, mockall::automock)]
pub trait EventFeed: Send + Sync {
    fn fetch_page(&self, page: u32) -> Result<FeedPage, FeedError>;
}
