use serde::{Deserialize, Serialize};

pub const FALLBACK_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1451187580459-43490279c0fa";
pub const FALLBACK_IMAGE_TITLE: &str = "Space View";
pub const FALLBACK_IMAGE_EXPLANATION: &str = "Unable to load image at this time.";
pub const FALLBACK_IMAGE_DATE: &str = "2024-01-01";

pub const DEFAULT_IMAGE_COUNT: u32 = 10;
pub const MAX_IMAGE_COUNT: u32 = 20;

/// Image shape returned by every image endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub url: String,
    pub title: String,
    pub explanation: String,
    pub date: String,
    pub copyright: String,
}

/// APOD item as the upstream sends it. Any key may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartialImageRecord {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub copyright: Option<String>,
}

impl ImageRecord {
    pub fn fallback() -> Self {
        Self {
            url: FALLBACK_IMAGE_URL.to_string(),
            title: FALLBACK_IMAGE_TITLE.to_string(),
            explanation: FALLBACK_IMAGE_EXPLANATION.to_string(),
            date: FALLBACK_IMAGE_DATE.to_string(),
            copyright: String::new(),
        }
    }

    pub fn fallback_batch(count: u32) -> Vec<Self> {
        vec![Self::fallback(); count as usize]
    }

    /// Fill every missing upstream field from the fallback table.
    pub fn from_partial(partial: PartialImageRecord) -> Self {
        Self {
            url: partial.url.unwrap_or_else(|| FALLBACK_IMAGE_URL.to_string()),
            title: partial.title.unwrap_or_else(|| FALLBACK_IMAGE_TITLE.to_string()),
            explanation: partial
                .explanation
                .unwrap_or_else(|| FALLBACK_IMAGE_EXPLANATION.to_string()),
            date: partial.date.unwrap_or_else(|| FALLBACK_IMAGE_DATE.to_string()),
            copyright: partial.copyright.unwrap_or_default(),
        }
    }
}

impl From<PartialImageRecord> for ImageRecord {
    fn from(partial: PartialImageRecord) -> Self {
        Self::from_partial(partial)
    }
}

#[derive(Debug, Default)]
pub struct ImagesQuery {
    // Kept as a raw string so a bad value degrades to the default instead of a 400
    pub count: Option<String>,
}

impl ImagesQuery {
    /// Build from raw query pairs; the first `count` wins when it is repeated.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            count: pairs
                .into_iter()
                .find(|(key, _)| key == "count")
                .map(|(_, value)| value),
        }
    }

    /// Absent or non-integer counts use the default; integers are clamped into [1, 20].
    pub fn resolved_count(&self) -> u32 {
        match self.count.as_deref().map(str::trim).map(str::parse::<i64>) {
            Some(Ok(n)) => n.clamp(1, MAX_IMAGE_COUNT as i64) as u32,
            _ => DEFAULT_IMAGE_COUNT,
        }
    }
}
