use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Which of the two knowledge sources a corpus holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorpusKind {
    /// Static course pages. Records rarely carry a usable URL.
    Course,
    /// Discussion forum posts, expected to carry `url` and `title`.
    Forum,
}

impl fmt::Display for CorpusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorpusKind::Course => write!(f, "course content"),
            CorpusKind::Forum => write!(f, "forum posts"),
        }
    }
}

/// A retrievable text record.
///
/// Records are immutable once loaded. A record's identity is its position in
/// the owning [`Corpus`](super::Corpus), which pairs it with the embedding at
/// the same index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusRecord {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl CorpusRecord {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            url: None,
            title: None,
            date: None,
        }
    }

    pub fn with_link(mut self, url: impl Into<String>, title: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self.title = Some(title.into());
        self
    }

    /// The `(url, title)` pair, when the record carries both.
    pub fn link(&self) -> Option<(&str, &str)> {
        match (&self.url, &self.title) {
            (Some(url), Some(title)) => Some((url.as_str(), title.as_str())),
            _ => None,
        }
    }
}

/// A record exactly as it appears in the scraped JSON.
///
/// Every field is optional and extra fields are ignored. A field holding
/// something other than a string reads as absent; conversion into a
/// [`CorpusRecord`] decides what is usable.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawRecord {
    #[serde(default, deserialize_with = "string_or_none")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub date: Option<String>,
}

fn string_or_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

impl RawRecord {
    /// Returns `None` when the record has no usable content.
    pub fn into_record(self) -> Option<CorpusRecord> {
        let content = self.content.filter(|c| !c.trim().is_empty())?;
        Some(CorpusRecord {
            content,
            url: self.url,
            title: self.title,
            date: self.date.as_deref().and_then(parse_date),
        })
    }
}

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}
