//! Front-matter splitting and schema.
//!
//! A post file starts with a YAML block fenced by `---` lines:
//!
//! ```text
//! ---
//! title: Hello
//! date: 2024-01-15
//! description: First post
//! tags: [rust, blog]
//! ---
//! # Body starts here
//! ```
//!
//! Known keys map onto [`FrontMatter`] fields; anything else lands in
//! [`FrontMatter::extra`].

use crate::types::{PostPriority, PostStatus};
use crate::{Error, Result};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use tracing::warn;

const FENCE: &str = "---";

/// Keys every post is expected to declare.
pub const REQUIRED_KEYS: [&str; 3] = ["title", "date", "description"];

/// Split `source` into its front-matter block and body.
///
/// The block must open on the first non-blank line and be closed by a line holding
/// only `---`. Without both fences the whole source is body.
pub fn split_front_matter(source: &str) -> (Option<&str>, &str) {
    let trimmed = source.trim_start_matches('\u{feff}').trim_start();
    let Some(after_open) = trimmed.strip_prefix(FENCE) else {
        return (None, source);
    };

    let Some(block_start) = after_open
        .strip_prefix("\r\n")
        .or_else(|| after_open.strip_prefix('\n'))
    else {
        return (None, source);
    };

    let mut offset = 0;
    for line in block_start.split_inclusive('\n') {
        if line.trim_end() == FENCE {
            let yaml = &block_start[..offset];
            let body = &block_start[offset + line.len()..];
            return (Some(yaml), body);
        }
        offset += line.len();
    }

    (None, source)
}

/// Parsed front-matter of one post.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FrontMatter {
    /// Post title. Required.
    #[serde(deserialize_with = "scalar_string")]
    pub title: Option<String>,
    /// Kept as written; YAML dates and numbers are stringified. Required.
    #[serde(deserialize_with = "scalar_string")]
    pub date: Option<String>,
    /// One-line summary. Required.
    #[serde(deserialize_with = "scalar_string")]
    pub description: Option<String>,
    /// Alias slug accepted in URLs next to the filename slug.
    #[serde(deserialize_with = "scalar_string")]
    pub korean_slug: Option<String>,
    /// Raw status text; see [`FrontMatter::resolved_status`].
    #[serde(deserialize_with = "scalar_string")]
    pub status: Option<String>,
    /// Raw priority text; see [`FrontMatter::resolved_priority`].
    #[serde(deserialize_with = "scalar_string")]
    pub priority: Option<String>,
    /// A YAML list, or a single scalar taken as a one-element list.
    #[serde(deserialize_with = "string_list")]
    pub tags: Vec<String>,
    /// Declared minutes. Values that are not a non-negative integer are ignored.
    #[serde(deserialize_with = "lenient_u32")]
    pub reading_time: Option<u32>,
    /// Series id this post belongs to.
    #[serde(deserialize_with = "scalar_string")]
    pub series: Option<String>,
    /// Display title of the series.
    #[serde(deserialize_with = "scalar_string")]
    pub series_title: Option<String>,
    /// Description of the series.
    #[serde(deserialize_with = "scalar_string")]
    pub series_description: Option<String>,
    /// Position within the series. Non-integer values are ignored.
    #[serde(deserialize_with = "lenient_i64")]
    pub series_order: Option<i64>,
    /// Every key outside the schema above.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl FrontMatter {
    /// Parse a YAML block. `file` only labels the error.
    pub fn parse(yaml: &str, file: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| Error::FrontMatter {
            file: file.to_string(),
            reason: e.to_string(),
        })
    }

    /// Required keys that are absent or blank.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let values = [&self.title, &self.date, &self.description];
        REQUIRED_KEYS
            .into_iter()
            .zip(values)
            .filter(|(_, value)| value.as_deref().is_none_or(|v| v.trim().is_empty()))
            .map(|(key, _)| key)
            .collect()
    }

    /// Declared status, or the default when absent or unrecognised.
    pub fn resolved_status(&self, file: &str) -> PostStatus {
        self.status.as_deref().map_or_else(PostStatus::default, |raw| {
            raw.parse().unwrap_or_else(|reason: String| {
                warn!(file, %reason, "falling back to default status");
                PostStatus::default()
            })
        })
    }

    /// Declared priority, or the default when absent or unrecognised.
    pub fn resolved_priority(&self, file: &str) -> PostPriority {
        self.priority
            .as_deref()
            .map_or_else(PostPriority::default, |raw| {
                raw.parse().unwrap_or_else(|reason: String| {
                    warn!(file, %reason, "falling back to default priority");
                    PostPriority::default()
                })
            })
    }

    /// `koreanSlug` with surrounding whitespace removed, ignoring blank values.
    pub fn alias(&self) -> Option<&str> {
        self.korean_slug
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Split and parse in one step. Files without a block get empty front-matter.
pub fn parse_document<'a>(source: &'a str, file: &str) -> Result<(FrontMatter, &'a str)> {
    match split_front_matter(source) {
        (Some(yaml), body) => Ok((FrontMatter::parse(yaml, file)?, body)),
        (None, body) => Ok((FrontMatter::default(), body)),
    }
}

fn scalar_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_yaml::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| scalar_to_string(&v)))
}

fn string_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_yaml::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_yaml::Value::Sequence(items)) => {
            items.iter().filter_map(scalar_to_string).collect()
        },
        Some(other) => scalar_to_string(&other).into_iter().collect(),
        None => Vec::new(),
    })
}

fn lenient_u32<'de, D>(deserializer: D) -> std::result::Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_yaml::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(scalar_to_i64).and_then(|n| {
        u32::try_from(n)
            .inspect_err(|_| warn!(value = n, "ignoring out-of-range front-matter number"))
            .ok()
    }))
}

fn lenient_i64<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_yaml::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(scalar_to_i64))
}

/// Integers, integral floats and numeric strings. Anything else is logged and dropped.
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn scalar_to_i64(value: &serde_yaml::Value) -> Option<i64> {
    let parsed = match value {
        serde_yaml::Value::Null => return None,
        serde_yaml::Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < 9.0e15)
                .map(|f| f as i64)
        }),
        serde_yaml::Value::String(s) => s.trim().parse().ok(),
        serde_yaml::Value::Tagged(tagged) => return scalar_to_i64(&tagged.value),
        _ => None,
    };
    if parsed.is_none() {
        warn!(?value, "ignoring non-integer front-matter value");
    }
    parsed
}

fn scalar_to_string(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        serde_yaml::Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        _ => None,
    }
}
