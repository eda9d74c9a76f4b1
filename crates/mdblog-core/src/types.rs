use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Workflow state of a post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PostStatus {
    /// Idea, not scheduled.
    #[serde(rename = "backlog")]
    Backlog,
    /// Scheduled, not started.
    #[serde(rename = "todo")]
    Todo,
    /// Being written. The default.
    #[default]
    #[serde(rename = "in progress")]
    InProgress,
    /// Finished.
    #[serde(rename = "done")]
    Done,
    /// Abandoned.
    #[serde(rename = "canceled")]
    Canceled,
}

impl PostStatus {
    /// Every status, in workflow order.
    pub const ALL: [Self; 5] = [
        Self::Backlog,
        Self::Todo,
        Self::InProgress,
        Self::Done,
        Self::Canceled,
    ];

    /// Front-matter spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Backlog => "backlog",
            Self::Todo => "todo",
            Self::InProgress => "in progress",
            Self::Done => "done",
            Self::Canceled => "canceled",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| format!("unknown status '{s}'"))
    }
}

/// Editorial priority of a post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostPriority {
    /// Low.
    Low,
    /// Medium. The default.
    #[default]
    Medium,
    /// High.
    High,
}

impl PostPriority {
    /// Every priority, lowest first.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Front-matter spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for PostPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|priority| priority.as_str() == normalized)
            .ok_or_else(|| format!("unknown priority '{s}'"))
    }
}

/// A resolved post. Identity is the `(category, slug)` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Filename without extension.
    pub slug: String,
    /// Alias slug from `koreanSlug`, also accepted in URLs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub korean_slug: Option<String>,
    /// Name of the containing directory.
    pub category: String,
    /// Title from front-matter; empty when missing.
    pub title: String,
    /// Date as written in front-matter.
    pub date: String,
    /// Summary from front-matter; empty when missing.
    pub description: String,
    /// Markdown body after the front-matter block.
    pub content: String,
    /// Workflow status, `in progress` unless declared.
    pub status: PostStatus,
    /// Priority, `medium` unless declared.
    pub priority: PostPriority,
    /// Tags in declaration order.
    pub tags: Vec<String>,
    /// Minutes; the front-matter value when present, otherwise estimated.
    pub reading_time: u32,
    /// Id of the series this post belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    /// Display title of the series.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_title: Option<String>,
    /// Description of the series.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_description: Option<String>,
    /// Position within the series as declared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_order: Option<i64>,
    /// Front-matter keys outside the known schema.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Post {
    /// `koreanSlug` when set, else the filename slug. Used in URLs and navigation ids.
    pub fn url_slug(&self) -> &str {
        self.korean_slug.as_deref().unwrap_or(&self.slug)
    }

    /// `category/slug`.
    pub fn id(&self) -> String {
        format!("{}/{}", self.category, self.slug)
    }
}

/// Lightweight reference to a neighbouring post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjacentPost {
    /// Category directory.
    pub category: String,
    /// Filename slug.
    pub slug: String,
    /// Alias slug, when declared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub korean_slug: Option<String>,
    /// Post title.
    pub title: String,
}

impl From<&Post> for AdjacentPost {
    fn from(post: &Post) -> Self {
        Self {
            category: post.category.clone(),
            slug: post.slug.clone(),
            korean_slug: post.korean_slug.clone(),
            title: post.title.clone(),
        }
    }
}

/// Neighbours of a post in date-descending order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacentPosts {
    /// Chronologically newer.
    pub previous: Option<AdjacentPost>,
    /// Chronologically older.
    pub next: Option<AdjacentPost>,
}

/// Navigation data attached to outline nodes that point at a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TocLink {
    /// Whether this entry is the post being read.
    pub is_current: bool,
    /// Link target.
    pub url: String,
}

/// One node of a table-of-contents forest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocNode {
    /// Slugified heading text. Not unique.
    pub id: String,
    /// Heading text as written.
    pub text: String,
    /// 1 to 6.
    pub level: u8,
    /// Nested headings in document order.
    pub children: Vec<TocNode>,
    /// Set on series navigation entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<TocLink>,
}

impl TocNode {
    /// Leaf node without navigation data.
    pub fn new(id: impl Into<String>, text: impl Into<String>, level: u8) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            level,
            children: Vec::new(),
            link: None,
        }
    }

    /// This node and its descendants in document (pre-)order, children cleared.
    pub fn flatten(&self) -> Vec<Self> {
        let mut out = Vec::new();
        self.flatten_into(&mut out);
        out
    }

    fn flatten_into(&self, out: &mut Vec<Self>) {
        out.push(Self {
            children: Vec::new(),
            ..self.clone()
        });
        for child in &self.children {
            child.flatten_into(out);
        }
    }

    /// Height of the subtree rooted here; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Self::depth).max().unwrap_or(0)
    }
}

/// An ordered group of posts meant to be read in sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    /// Id shared by the member posts.
    pub id: String,
    /// First declared `seriesTitle`, else the id.
    pub title: String,
    /// First declared `seriesDescription`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Members in reading order.
    pub posts: Vec<SeriesPost>,
}

/// Member of a [`Series`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPost {
    /// Post title.
    pub title: String,
    /// Filename slug.
    pub slug: String,
    /// Category directory.
    pub category: String,
    /// Alias slug, when declared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub korean_slug: Option<String>,
    /// Sort key within the series; posts without `seriesOrder` get 0.
    pub order: i64,
}

impl SeriesPost {
    /// `koreanSlug` when set, else the filename slug.
    pub fn url_slug(&self) -> &str {
        self.korean_slug.as_deref().unwrap_or(&self.slug)
    }
}
