// Wire types for the event feed
// The remote CMS is loose about field presence and numeric encodings, so
// deserialization here is deliberately forgiving: a half-filled record is
// still a record. Only a broken envelope fails a fetch.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::models::event::{Attachment, Event};
use crate::utils::date::parse_feed_date;

/// One page of the feed: `{ "data": [...], "meta": {...} }`.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedPage {
    #[serde(default)]
    pub data: Vec<RawEvent>,
    #[serde(default)]
    pub meta: FeedMeta,
}

/// Pagination metadata as reported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeedMeta {
    pub current_page: u32,
    pub last_page: u32,
    pub total: u64,
}

impl Default for FeedMeta {
    fn default() -> Self {
        Self {
            current_page: 1,
            last_page: 1,
            total: 0,
        }
    }
}

/// An event record as served by the API.
///
/// The same logical field can arrive under alternate names (`eventDate` vs
/// `startDate`, `eventImage` vs `heroImage`); both spellings are captured
/// here and [`RawEvent::into_event`] applies the precedence rules.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawEvent {
    #[serde(deserialize_with = "string_or_number")]
    pub id: Option<String>,
    pub title: Option<String>,
    pub event_date: Option<String>,
    pub start_date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub target_audience: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub cost_amount: Option<String>,
    pub event_image: Option<String>,
    pub hero_image: Option<String>,
    pub registration_link: Option<String>,
    pub google_map_location_link: Option<String>,
    #[serde(deserialize_with = "attachment_list")]
    pub attachments: Vec<RawAttachment>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawAttachment {
    pub path: Option<String>,
    pub file_name: Option<String>,
}

/// Resolve the single occurrence date for an event: `eventDate` wins, an
/// absent or unparsable value falls back to `startDate`, and if neither
/// parses the event has no occurrence date.
pub fn resolve_occurs_on(
    event_date: Option<&str>,
    start_date: Option<&str>,
) -> Option<NaiveDate> {
    event_date
        .and_then(parse_feed_date)
        .or_else(|| start_date.and_then(parse_feed_date))
}

impl RawEvent {
    /// Normalize into the canonical [`Event`].
    ///
    /// Never fails: an event that resolves no date gets `occurs_on = None`
    /// and is merely left out of date bucketing downstream.
    pub fn into_event(self) -> Event {
        let occurs_on = resolve_occurs_on(self.event_date.as_deref(), self.start_date.as_deref());
        if occurs_on.is_none() {
            log::debug!(
                "Event {:?} has no resolvable date; it will be excluded from the calendar",
                self.id.as_deref().unwrap_or("<no id>")
            );
        }

        let attachments = self
            .attachments
            .into_iter()
            .filter_map(|raw| {
                let path = raw.path.unwrap_or_default();
                let file_name = raw.file_name.unwrap_or_default();
                if path.is_empty() && file_name.is_empty() {
                    return None;
                }
                Some(Attachment { path, file_name })
            })
            .collect();

        Event {
            id: self.id.unwrap_or_default(),
            title: self.title.unwrap_or_default().trim().to_string(),
            occurs_on,
            start_time: non_blank(self.start_time),
            end_time: non_blank(self.end_time),
            location: non_blank(self.location),
            category: non_blank(self.category),
            status: non_blank(self.status),
            target_audience: non_blank(self.target_audience),
            cost_amount: non_blank(self.cost_amount),
            image: non_blank(self.event_image).or_else(|| non_blank(self.hero_image)),
            registration_link: non_blank(self.registration_link),
            google_map_location_link: non_blank(self.google_map_location_link),
            attachments,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Accept a JSON string or number, yielding its string form.
fn string_or_number<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Accept an attachment array, treating null or any other shape as empty.
fn attachment_list<'de, D>(d: D) -> Result<Vec<RawAttachment>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(d)?;
    Ok(match value {
        Value::Array(_) => Vec::<RawAttachment>::deserialize(value).unwrap_or_default(),
        _ => Vec::new(),
    })
}
