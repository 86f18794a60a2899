//! Wire types exchanged with the recommendation service.
//!
//! Response fields are validated at the boundary: a field with an
//! unexpected JSON type is treated as absent instead of failing the whole
//! response, and the accessors on [`Assessment`] apply the display defaults.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::input::{FilterFlags, Query, RequestLimit};

// =============================================================================
// Request
// =============================================================================

/// Body of `POST /recommend`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub query: String,
    pub k: u32,
    pub prefer_remote: bool,
    pub prefer_adaptive: bool,
}

impl RecommendationRequest {
    pub fn new(query: Query, limit: RequestLimit, flags: FilterFlags) -> Self {
        Self {
            query: query.into_string(),
            k: limit.get(),
            prefer_remote: flags.prefer_remote,
            prefer_adaptive: flags.prefer_adaptive,
        }
    }

    /// Number of rows to keep from the response.
    pub fn limit(&self) -> usize {
        self.k as usize
    }
}

// =============================================================================
// Response
// =============================================================================

/// Shown when an assessment has no usable name
pub const UNNAMED_ASSESSMENT: &str = "(Unnamed assessment)";

/// Link target when an assessment has no usable URL
pub const MISSING_URL: &str = "#";

/// Label for an unknown duration or support value
pub const NOT_AVAILABLE: &str = "N/A";
pub const UNKNOWN_SUPPORT: &str = "Unknown";

/// Body returned by `POST /recommend`.
///
/// A missing `recommended_assessments` field means "no results".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    #[serde(default, deserialize_with = "lenient_list")]
    pub recommended_assessments: Vec<Assessment>,
}

/// One recommended assessment product.
///
/// Every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Duration in minutes
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,

    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub remote_support: Option<String>,

    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub adaptive_support: Option<String>,

    #[serde(default, deserialize_with = "lenient_strings")]
    pub test_type: Vec<String>,

    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Assessment {
    pub fn display_name(&self) -> &str {
        non_empty(&self.name).unwrap_or(UNNAMED_ASSESSMENT)
    }

    pub fn link(&self) -> &str {
        non_empty(&self.url).unwrap_or(MISSING_URL)
    }

    /// `"<n> min"` for a positive duration, `"N/A"` otherwise.
    pub fn duration_label(&self) -> String {
        match self.duration {
            // f64 Display already drops a zero fraction: 30.0 prints as "30"
            Some(minutes) if minutes > 0.0 && minutes.is_finite() => format!("{minutes} min"),
            _ => NOT_AVAILABLE.to_string(),
        }
    }

    pub fn remote_label(&self) -> &str {
        non_empty(&self.remote_support).unwrap_or(UNKNOWN_SUPPORT)
    }

    pub fn remote_level(&self) -> SupportLevel {
        SupportLevel::classify(self.remote_support.as_deref())
    }

    pub fn adaptive_label(&self) -> &str {
        non_empty(&self.adaptive_support).unwrap_or(UNKNOWN_SUPPORT)
    }

    pub fn adaptive_level(&self) -> SupportLevel {
        SupportLevel::classify(self.adaptive_support.as_deref())
    }
}

/// Tri-state delivery-mode support (remote testing, adaptive testing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupportLevel {
    Yes,
    No,
    Unknown,
}

impl SupportLevel {
    /// `"yes"` / `"no"` in any casing; everything else is unknown.
    pub fn classify(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("yes") => SupportLevel::Yes,
            Some(v) if v.eq_ignore_ascii_case("no") => SupportLevel::No,
            _ => SupportLevel::Unknown,
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

// =============================================================================
// Lenient field decoding
// =============================================================================

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        _ => None,
    })
}

fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(b) => Some(b.to_string()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// `null` items are dropped. Any other item becomes a row: objects decode
/// field by field, scalars and arrays become an all-defaults assessment.
fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<Assessment>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter(|item| !item.is_null())
            .map(|item| match item {
                Value::Object(_) => serde_json::from_value(item).unwrap_or_default(),
                _ => Assessment::default(),
            })
            .collect(),
        _ => Vec::new(),
    })
}
