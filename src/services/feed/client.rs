// HTTP implementation of the event feed

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;

use crate::models::settings::AppSettings;

use super::{EventFeed, FeedError, FeedPage};

/// Blocking HTTP client for the paginated events endpoint.
///
/// Each call is a single attempt: failures surface immediately and recovery
/// happens through the retry action in the UI, never through silent
/// re-requests behind the user's back.
pub struct HttpEventFeed {
    client: Client,
    feed_url: String,
    locale: Option<String>,
    page_size: u32,
}

impl HttpEventFeed {
    pub fn new(settings: &AppSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .context("Failed to build event feed HTTP client")?;

        Ok(Self {
            client,
            feed_url: settings.feed_url.clone(),
            locale: settings.locale.clone(),
            page_size: settings.page_size,
        })
    }

    fn page_query(&self, page: u32) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("page", page.to_string()),
            ("perPage", self.page_size.to_string()),
        ];
        if let Some(locale) = &self.locale {
            query.push(("locale", locale.clone()));
        }
        query
    }

    fn fetch_once(&self, page: u32) -> Result<FeedPage, FeedError> {
        let response = self
            .client
            .get(&self.feed_url)
            .query(&self.page_query(page))
            .send()
            .map_err(|err| FeedError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .map_err(|err| FeedError::Network(err.to_string()))?;

        serde_json::from_str(&body).map_err(|err| FeedError::Decode(err.to_string()))
    }
}

impl EventFeed for HttpEventFeed {
    fn fetch_page(&self, page: u32) -> Result<FeedPage, FeedError> {
        log::debug!("Fetching events page {} from {}", page, self.feed_url);

        let result = self.fetch_once(page);
        if let Err(err) = &result {
            log::warn!("Event feed fetch failed for page {}: {}", page, err);
        }
        result
    }
}
