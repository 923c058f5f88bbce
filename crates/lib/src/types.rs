use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// One input item to enrich: an opaque field mapping supplied by the
/// caller, minimally carrying an `objectID` identifier and a `content`
/// text field. Records are never mutated in place; enrichment produces a
/// new map.
pub type Record = Map<String, Value>;

/// A [`Record`] merged with the four `ai_*` metadata fields.
pub type EnrichedRecord = Map<String, Value>;

/// The structured payload recovered from raw model output.
///
/// `category` and `sentiment` are free text from the model at this layer.
/// No closed-set validation happens here; callers must treat both as
/// unchecked external data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedPayload {
    pub summary: Option<String>,
    pub keywords: Vec<String>,
    pub category: Option<String>,
    pub sentiment: Option<String>,
}

/// A content category label.
///
/// The `Unrecognized` variant preserves the model's literal text whenever
/// it drifts outside the documented label set, so downstream consumers can
/// tell a known label from free-form output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
    Technology,
    Environment,
    Healthcare,
    Business,
    Education,
    Science,
    ArtsCulture,
    General,
    Unrecognized(String),
}

impl Category {
    /// Maps a model-produced label onto the closed set, falling back to
    /// `Unrecognized` instead of coercing.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Technology" => Self::Technology,
            "Environment" => Self::Environment,
            "Healthcare" => Self::Healthcare,
            "Business" => Self::Business,
            "Education" => Self::Education,
            "Science" => Self::Science,
            "Arts & Culture" => Self::ArtsCulture,
            "General" => Self::General,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Technology => "Technology",
            Self::Environment => "Environment",
            Self::Healthcare => "Healthcare",
            Self::Business => "Business",
            Self::Education => "Education",
            Self::Science => "Science",
            Self::ArtsCulture => "Arts & Culture",
            Self::General => "General",
            Self::Unrecognized(text) => text,
        }
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A sentiment label, with the same drift-preserving treatment as
/// [`Category`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
    Unrecognized(String),
}

impl Sentiment {
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Positive" => Self::Positive,
            "Neutral" => Self::Neutral,
            "Negative" => Self::Negative,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
            Self::Negative => "Negative",
            Self::Unrecognized(text) => text,
        }
    }
}

impl Serialize for Sentiment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// The four derived AI metadata fields for one record.
///
/// Every field has a defined default. A failed enrichment is expressed
/// through these defaults, never by omitting a field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrichmentResult {
    pub summary: Option<String>,
    pub keywords: Vec<String>,
    pub category: Option<Category>,
    pub sentiment: Option<Sentiment>,
}

impl EnrichmentResult {
    /// Returns a copy of `record` with the four `ai_*` fields added.
    ///
    /// The keys are always present: a defaulted result contributes `null`
    /// values and an empty keyword array.
    pub fn merge_onto(&self, record: &Record) -> EnrichedRecord {
        let mut merged = record.clone();
        merged.insert(
            "ai_summary".to_string(),
            self.summary.clone().map(Value::String).unwrap_or(Value::Null),
        );
        merged.insert(
            "ai_keywords".to_string(),
            Value::Array(self.keywords.iter().cloned().map(Value::String).collect()),
        );
        merged.insert(
            "ai_category".to_string(),
            self.category
                .as_ref()
                .map(|category| Value::String(category.as_str().to_string()))
                .unwrap_or(Value::Null),
        );
        merged.insert(
            "ai_sentiment".to_string(),
            self.sentiment
                .as_ref()
                .map(|sentiment| Value::String(sentiment.as_str().to_string()))
                .unwrap_or(Value::Null),
        );
        merged
    }
}
