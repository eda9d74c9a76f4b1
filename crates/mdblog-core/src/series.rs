//! Series grouping and navigation outlines.
//!
//! Posts join a series through the `series` front-matter key. The series title and
//! description come from the first member in the order the posts are given; later
//! members may disagree without effect.

use crate::types::{Post, Series, SeriesPost, TocLink, TocNode};
use std::collections::BTreeSet;

/// Collect the posts of `series_id` into a [`Series`], or `None` when no post belongs to it.
///
/// Members keep the order of `posts`; ordering by `seriesOrder` happens in
/// [`convert_series_to_toc`].
pub fn extract_series_from_posts(posts: &[Post], series_id: &str) -> Option<Series> {
    let members: Vec<&Post> = posts
        .iter()
        .filter(|post| post.series.as_deref() == Some(series_id))
        .collect();
    let first = members.first()?;

    Some(Series {
        id: series_id.to_string(),
        title: first
            .series_title
            .clone()
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| series_id.to_string()),
        description: first.series_description.clone(),
        posts: members
            .iter()
            .map(|post| SeriesPost {
                title: post.title.clone(),
                slug: post.slug.clone(),
                category: post.category.clone(),
                korean_slug: post.korean_slug.clone(),
                order: post.series_order.unwrap_or(0),
            })
            .collect(),
    })
}

/// Every series referenced by `posts`, ordered by id.
pub fn list_series(posts: &[Post]) -> Vec<Series> {
    let ids: BTreeSet<&str> = posts.iter().filter_map(|p| p.series.as_deref()).collect();
    ids.into_iter()
        .filter_map(|id| extract_series_from_posts(posts, id))
        .collect()
}

/// Navigation outline for a series: one level-1 root with a level-2 leaf per post.
///
/// Leaves are ordered by `order` (stable, so equal orders keep their relative
/// position), carry the id `series-post-{slug}` and link to
/// `{base_path}/{category}/{slug}`, where `slug` is the Korean alias when present.
pub fn convert_series_to_toc(
    series: &Series,
    current_slug: Option<&str>,
    base_path: &str,
) -> Vec<TocNode> {
    let base = base_path.trim_end_matches('/');

    let mut posts: Vec<&SeriesPost> = series.posts.iter().collect();
    posts.sort_by_key(|post| post.order);

    let children = posts
        .into_iter()
        .map(|post| {
            let slug = post.url_slug();
            TocNode {
                link: Some(TocLink {
                    is_current: current_slug == Some(slug),
                    url: format!("{base}/{}/{slug}", post.category),
                }),
                ..TocNode::new(format!("series-post-{slug}"), post.title.clone(), 2)
            }
        })
        .collect();

    vec![TocNode {
        children,
        ..TocNode::new(format!("series-{}", series.id), series.title.clone(), 1)
    }]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{PostPriority, PostStatus};
    use std::collections::BTreeMap;

    fn post(slug: &str, series: Option<&str>, order: Option<i64>) -> Post {
        Post {
            slug: slug.to_string(),
            korean_slug: None,
            category: "tech".to_string(),
            title: format!("Title {slug}"),
            date: "2024-01-01".to_string(),
            description: String::new(),
            content: String::new(),
            status: PostStatus::default(),
            priority: PostPriority::default(),
            tags: Vec::new(),
            reading_time: 1,
            series: series.map(str::to_string),
            series_title: None,
            series_description: None,
            series_order: order,
            extra: BTreeMap::new(),
        }
    }

    #[test]
    fn test_extract_returns_none_for_unknown_series() {
        let posts = vec![post("a", Some("rust"), Some(1))];
        assert!(extract_series_from_posts(&posts, "go").is_none());
        assert!(extract_series_from_posts(&[], "rust").is_none());
    }

    #[test]
    fn test_first_member_supplies_metadata() {
        // Given: Two members that disagree about the series title
        let mut first = post("a", Some("rust"), Some(1));
        first.series_title = Some("Rust 101".into());
        first.series_description = Some("Basics".into());
        let mut second = post("b", Some("rust"), Some(2));
        second.series_title = Some("Something else".into());

        // When: Extracting the series
        let series = extract_series_from_posts(&[first, second], "rust").unwrap();

        // Then: The first member wins
        assert_eq!(series.title, "Rust 101");
        assert_eq!(series.description.as_deref(), Some("Basics"));
        assert_eq!(series.posts.len(), 2);
    }

    #[test]
    fn test_title_falls_back_to_id() {
        let series = extract_series_from_posts(&[post("a", Some("rust"), None)], "rust").unwrap();
        assert_eq!(series.title, "rust");
        assert_eq!(series.posts[0].order, 0);
    }

    #[test]
    fn test_toc_children_sorted_by_order() {
        // Given: Members with orders 2, 0, 1
        let posts = vec![
            post("two", Some("s"), Some(2)),
            post("zero", Some("s"), Some(0)),
            post("one", Some("s"), Some(1)),
        ];
        let series = extract_series_from_posts(&posts, "s").unwrap();

        // When: Converting to an outline
        let toc = convert_series_to_toc(&series, Some("one"), "/blog");

        // Then: One root, children in ascending order
        assert_eq!(toc.len(), 1);
        assert_eq!(toc[0].id, "series-s");
        assert_eq!(toc[0].level, 1);
        let ids: Vec<_> = toc[0].children.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["series-post-zero", "series-post-one", "series-post-two"]
        );
        assert!(toc[0].children.iter().all(|c| c.level == 2));

        let current: Vec<_> = toc[0]
            .children
            .iter()
            .filter(|c| c.link.as_ref().unwrap().is_current)
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(current, vec!["series-post-one"]);
    }

    #[test]
    fn test_equal_orders_keep_relative_position() {
        let posts = vec![
            post("first", Some("s"), None),
            post("second", Some("s"), Some(0)),
            post("third", Some("s"), None),
        ];
        let series = extract_series_from_posts(&posts, "s").unwrap();
        let toc = convert_series_to_toc(&series, None, "/blog");
        let texts: Vec<_> = toc[0].children.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["Title first", "Title second", "Title third"]);
    }

    #[test]
    fn test_korean_alias_used_in_links() {
        let mut p = post("ownership", Some("s"), Some(1));
        p.korean_slug = Some("소유권".into());
        let series = extract_series_from_posts(&[p], "s").unwrap();

        let toc = convert_series_to_toc(&series, Some("소유권"), "/blog/");
        let child = &toc[0].children[0];
        assert_eq!(child.id, "series-post-소유권");
        let link = child.link.as_ref().unwrap();
        assert!(link.is_current);
        assert_eq!(link.url, "/blog/tech/소유권");
    }

    #[test]
    fn test_list_series_groups_by_id() {
        let posts = vec![
            post("a", Some("zeta"), None),
            post("b", None, None),
            post("c", Some("alpha"), None),
            post("d", Some("zeta"), None),
        ];
        let all = list_series(&posts);
        let ids: Vec<_> = all.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["alpha", "zeta"]);
        assert_eq!(all[1].posts.len(), 2);
    }
}
