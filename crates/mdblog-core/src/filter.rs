//! Post table rows, filtering and facet lists.

use crate::types::{Post, PostPriority, PostStatus};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A post without its body, as shown in the post table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    /// `category/slug`.
    pub id: String,
    /// Post title.
    pub title: String,
    /// Post summary.
    pub description: String,
    /// Category directory.
    pub category: String,
    /// Filename slug.
    pub slug: String,
    /// Alias slug, when declared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub korean_slug: Option<String>,
    /// Date as written in front-matter.
    pub date: String,
    /// Workflow status.
    pub status: PostStatus,
    /// Priority.
    pub priority: PostPriority,
    /// Tags in declaration order.
    pub tags: Vec<String>,
    /// Minutes to read.
    pub reading_time: u32,
    /// Series id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    /// Series display title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_title: Option<String>,
    /// Series description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_description: Option<String>,
    /// Position within the series.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_order: Option<i64>,
}

impl From<&Post> for PostSummary {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id(),
            title: post.title.clone(),
            description: post.description.clone(),
            category: post.category.clone(),
            slug: post.slug.clone(),
            korean_slug: post.korean_slug.clone(),
            date: post.date.clone(),
            status: post.status,
            priority: post.priority,
            tags: post.tags.clone(),
            reading_time: post.reading_time,
            series: post.series.clone(),
            series_title: post.series_title.clone(),
            series_description: post.series_description.clone(),
            series_order: post.series_order,
        }
    }
}

/// Criteria for narrowing the post table.
///
/// Empty criteria match everything. Each list is any-of; all criteria must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostFilter {
    /// Case-insensitive substring of the title.
    pub title: Option<String>,
    /// Category names.
    pub categories: Vec<String>,
    /// Series ids.
    pub series: Vec<String>,
    /// Matches posts carrying at least one of these tags.
    pub tags: Vec<String>,
    /// Accepted statuses.
    pub statuses: Vec<PostStatus>,
    /// Accepted priorities.
    pub priorities: Vec<PostPriority>,
    /// Accepted reading times in minutes.
    pub reading_times: Vec<u32>,
}

impl PostFilter {
    /// Whether `post` satisfies every criterion.
    pub fn matches(&self, post: &Post) -> bool {
        let title_ok = self
            .title
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .is_none_or(|q| post.title.to_lowercase().contains(&q.to_lowercase()));

        title_ok
            && any_of(&self.categories, |c| *c == post.category)
            && any_of(&self.series, |s| post.series.as_ref() == Some(s))
            && any_of(&self.tags, |t| post.tags.contains(t))
            && any_of(&self.statuses, |s| *s == post.status)
            && any_of(&self.priorities, |p| *p == post.priority)
            && any_of(&self.reading_times, |m| *m == post.reading_time)
    }

    /// Summaries of the matching posts, in input order.
    pub fn apply(&self, posts: &[Post]) -> Vec<PostSummary> {
        posts
            .iter()
            .filter(|post| self.matches(post))
            .map(PostSummary::from)
            .collect()
    }
}

fn any_of<T>(wanted: &[T], pred: impl Fn(&T) -> bool) -> bool {
    wanted.is_empty() || wanted.iter().any(pred)
}

/// Distinct values available for filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facets {
    /// Categories with at least one post.
    pub categories: Vec<String>,
    /// Series id → title (the id when no post names the series).
    pub series: BTreeMap<String, String>,
    /// Every tag in use.
    pub tags: Vec<String>,
    /// Every reading time in use.
    pub reading_times: Vec<u32>,
}

impl Facets {
    /// Collect facets from `posts`.
    pub fn from_posts(posts: &[Post]) -> Self {
        let categories: BTreeSet<&str> = posts.iter().map(|p| p.category.as_str()).collect();
        let tags: BTreeSet<&str> = posts
            .iter()
            .flat_map(|p| p.tags.iter().map(String::as_str))
            .collect();
        let reading_times: BTreeSet<u32> = posts.iter().map(|p| p.reading_time).collect();

        let mut series = BTreeMap::new();
        for post in posts {
            let Some(id) = post.series.as_ref() else {
                continue;
            };
            let title = post.series_title.as_ref().filter(|t| !t.is_empty());
            // First named title wins; an id placeholder yields to a later title.
            let keep = series
                .get(id)
                .is_some_and(|existing: &String| existing != id || title.is_none());
            if !keep {
                series.insert(id.clone(), title.unwrap_or(id).clone());
            }
        }

        Self {
            categories: categories.into_iter().map(str::to_string).collect(),
            series,
            tags: tags.into_iter().map(str::to_string).collect(),
            reading_times: reading_times.into_iter().collect(),
        }
    }
}
