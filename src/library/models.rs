use serde::{Deserialize, Serialize};

/// Where a song entered the library.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SongSource {
    /// Added by the user through the add-song form.
    #[default]
    User,
    /// Imported from the bundled sample catalog.
    Sample,
}

impl From<String> for SongSource {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "sample" => SongSource::Sample,
            _ => SongSource::User,
        }
    }
}

impl std::fmt::Display for SongSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SongSource::User => write!(f, "user"),
            SongSource::Sample => write!(f, "sample"),
        }
    }
}

/// A catalog entry. Immutable once created; removal is the only mutation.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Song {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub genre: String,
    pub mood: String,
    /// Album is genuinely optional; blank input is normalized to `None`
    /// at creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    /// Older saved data has no source; treat it as user-added.
    #[serde(default)]
    pub source: SongSource,
    /// Unix seconds. Used for display only; recency ordering is the
    /// library's insertion order.
    #[serde(default)]
    pub created_at: i64,
}

/// Form input for a new song, before validation and id assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSong {
    pub title: String,
    pub artist: String,
    pub genre: String,
    pub mood: String,
    #[serde(default)]
    pub album: Option<String>,
}

/// Per-source library totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SongCounts {
    pub user: usize,
    pub sample: usize,
    pub total: usize,
}

/// Outcome of a sample-catalog import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SampleImportReport {
    /// Songs actually added to the library.
    pub added: usize,
    /// Entries skipped as duplicates or for missing required fields.
    pub skipped: usize,
}
