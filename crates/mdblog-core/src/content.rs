//! Post resolution on top of [`Storage`].
//!
//! [`ContentResolver`] turns raw files into [`Post`]s: it splits front-matter from the
//! body, fills defaults, estimates reading time and resolves Korean alias slugs. Parsed
//! posts and alias maps are cached in their own namespaces, separate from the raw file
//! cache in [`Storage`], so either layer can expire without the other.
//!
//! Every public lookup absorbs failures. Filesystem errors and malformed front-matter
//! are logged and the affected post is left out; callers see an empty list or `None`.

use crate::cache::TtlCache;
use crate::clock::{Clock, SystemClock};
use crate::config::BlogConfig;
use crate::front_matter::parse_document;
use crate::storage::Storage;
use crate::toc::TocBuilder;
use crate::types::{AdjacentPost, AdjacentPosts, Post, TocNode};
use crate::{Error, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Route parameters for one post, as used for static page generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostParams {
    /// Category directory.
    pub category: String,
    /// Filename slug.
    pub slug: String,
}

/// A post file that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentProblem {
    /// Category directory holding the file.
    pub category: String,
    /// File name, extension included.
    pub file: String,
    /// Human-readable description of what is wrong.
    pub problem: String,
}

/// Resolves posts, slugs and outlines for one content root.
#[derive(Debug)]
pub struct ContentResolver {
    config: BlogConfig,
    storage: Arc<Storage>,
    toc: TocBuilder,
    posts: TtlCache<Post>,
    slugs: TtlCache<HashMap<String, String>>,
}

impl ContentResolver {
    /// Resolver for `config` using the system clock.
    pub fn new(config: BlogConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Resolver for `config` whose caches expire according to `clock`.
    pub fn with_clock(config: BlogConfig, clock: Arc<dyn Clock>) -> Self {
        let storage = Arc::new(Storage::from_config(&config, Arc::clone(&clock)));
        Self::with_storage(config, storage, clock)
    }

    /// Resolver over an existing storage accessor.
    pub fn with_storage(config: BlogConfig, storage: Arc<Storage>, clock: Arc<dyn Clock>) -> Self {
        let post_ttl = config.cache.post_ttl();
        let toc_ttl = config.cache.toc_ttl();
        Self {
            toc: TocBuilder::new(toc_ttl, Arc::clone(&clock)),
            posts: TtlCache::new("post", post_ttl, Arc::clone(&clock)),
            slugs: TtlCache::new("slugs", post_ttl, clock),
            storage,
            config,
        }
    }

    /// Active configuration.
    pub const fn config(&self) -> &BlogConfig {
        &self.config
    }

    /// Underlying storage accessor.
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Category names, sorted.
    pub fn list_categories(&self) -> Vec<String> {
        self.storage.list_categories()
    }

    /// Every post of every category, newest first.
    pub fn list_all_posts(&self) -> Vec<Post> {
        let mut posts: Vec<Post> = self
            .list_categories()
            .iter()
            .flat_map(|category| self.load_category(category))
            .collect();
        posts.sort_by(compare_by_date_desc);
        debug!(count = posts.len(), "listed all posts");
        posts
    }

    /// Posts of one category, newest first. Unknown categories give an empty list.
    pub fn list_posts_by_category(&self, category: &str) -> Vec<Post> {
        let mut posts = self.load_category(category);
        posts.sort_by(compare_by_date_desc);
        posts
    }

    fn load_category(&self, category: &str) -> Vec<Post> {
        self.storage
            .list_post_files(category)
            .iter()
            .filter_map(|file| self.load_post_logged(category, file))
            .collect()
    }

    fn load_post_logged(&self, category: &str, file: &str) -> Option<Post> {
        match self.load_post(category, file) {
            Ok(post) => post,
            Err(e) => {
                warn!(category, file, error_category = e.category(), error = %e, "skipping post");
                None
            },
        }
    }

    /// Parse one file into a post. `Ok(None)` means the post was deliberately skipped.
    fn load_post(&self, category: &str, file: &str) -> Result<Option<Post>> {
        let label = format!("{category}/{file}");
        let source = self
            .storage
            .read_file(category, file)
            .ok_or_else(|| Error::NotFound(label.clone()))?;
        let (front_matter, body) = parse_document(&source, &label)?;

        let missing = front_matter.missing_required();
        if !missing.is_empty() {
            if self.config.front_matter.strict {
                warn!(file = %label, ?missing, "skipping post with incomplete front-matter");
                return Ok(None);
            }
            warn!(file = %label, ?missing, "post has incomplete front-matter");
        }

        let reading_time = front_matter
            .reading_time
            .filter(|&minutes| minutes > 0)
            .unwrap_or_else(|| reading_time(body, self.config.reading.words_per_minute));

        Ok(Some(Post {
            slug: self.storage.slug_of(file).to_string(),
            korean_slug: front_matter.alias().map(str::to_string),
            category: category.to_string(),
            status: front_matter.resolved_status(&label),
            priority: front_matter.resolved_priority(&label),
            title: front_matter.title.unwrap_or_default(),
            date: front_matter.date.unwrap_or_default(),
            description: front_matter.description.unwrap_or_default(),
            content: body.to_string(),
            tags: front_matter.tags,
            reading_time,
            series: front_matter.series.filter(|s| !s.is_empty()),
            series_title: front_matter.series_title.filter(|s| !s.is_empty()),
            series_description: front_matter.series_description.filter(|s| !s.is_empty()),
            series_order: front_matter.series_order,
            extra: front_matter.extra,
        }))
    }

    /// Resolve `slug` within `category`.
    ///
    /// The filename slug is tried first, then the category's Korean alias map. Hits
    /// are cached under the requested slug; misses are not cached.
    pub fn find_post_by_slug(&self, category: &str, slug: &str) -> Option<Post> {
        let key = format!("post:{category}/{slug}");
        if let Some(post) = self.posts.get(&key) {
            return Some(post);
        }

        let files = self.storage.list_post_files(category);
        let find_file = |wanted: &str| {
            files
                .iter()
                .find(|file| self.storage.slug_of(file) == wanted)
                .cloned()
        };

        let file = find_file(slug).or_else(|| {
            let original = self.slug_mappings(category).get(slug).cloned()?;
            debug!(category, alias = slug, original = %original, "resolved alias slug");
            find_file(&original)
        });

        let Some(file) = file else {
            debug!(category, slug, "post not found");
            return None;
        };

        let post = self.load_post_logged(category, &file)?;
        self.posts.set(key, post.clone());
        Some(post)
    }

    /// Map of Korean alias → filename slug for `category`.
    ///
    /// Files whose front-matter cannot be parsed are left out. When two files claim
    /// the same alias the later file (by name) wins.
    pub fn slug_mappings(&self, category: &str) -> HashMap<String, String> {
        let key = format!("slugs:{category}");
        self.slugs.get_or_insert_with(&key, || {
            let mut mappings = HashMap::new();
            for file in self.storage.list_post_files(category) {
                let Some(source) = self.storage.read_file(category, &file) else {
                    continue;
                };
                let label = format!("{category}/{file}");
                match parse_document(&source, &label) {
                    Ok((front_matter, _)) => {
                        if let Some(alias) = front_matter.alias() {
                            mappings.insert(alias.to_string(), self.storage.slug_of(&file).to_string());
                        }
                    },
                    Err(e) => debug!(file = %label, error_category = e.category(), error = %e, "no alias for unparsable post"),
                }
            }
            mappings
        })
    }

    /// Neighbours of the post identified by `slug` and `date` within `category`.
    ///
    /// `previous` is the newer post and `next` the older one. Both are `None` when the
    /// post is not found.
    pub fn find_adjacent_posts(&self, category: &str, date: &str, slug: &str) -> AdjacentPosts {
        let posts = self.list_posts_by_category(category);
        let Some(index) = posts
            .iter()
            .position(|post| post.slug == slug && post.date == date)
        else {
            return AdjacentPosts::default();
        };

        AdjacentPosts {
            previous: index
                .checked_sub(1)
                .and_then(|i| posts.get(i))
                .map(AdjacentPost::from),
            next: posts.get(index + 1).map(AdjacentPost::from),
        }
    }

    /// Outline of a post's body, cached under its `category/slug` id.
    ///
    /// Neither part may contain `/`, so distinct posts never share a key.
    pub fn table_of_contents(&self, post: &Post) -> Vec<TocNode> {
        let key = post.id();
        self.toc.build(&post.content, Some(&key))
    }

    /// Outline of an arbitrary body; see [`TocBuilder::build`].
    pub fn build_table_of_contents(&self, body: &str, key: Option<&str>) -> Vec<TocNode> {
        self.toc.build(body, key)
    }

    /// `(category, slug)` of every post, using filename slugs.
    pub fn post_params(&self) -> Vec<PostParams> {
        self.list_categories()
            .into_iter()
            .flat_map(|category| {
                self.storage
                    .list_post_files(&category)
                    .into_iter()
                    .map(|file| PostParams {
                        slug: self.storage.slug_of(&file).to_string(),
                        category: category.clone(),
                    })
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    /// Every post file with unreadable or incomplete front-matter.
    pub fn check_content(&self) -> Vec<ContentProblem> {
        let mut problems = Vec::new();
        for category in self.list_categories() {
            for file in self.storage.list_post_files(&category) {
                let label = format!("{category}/{file}");
                let problem = match self.storage.read_file(&category, &file) {
                    None => Some("file could not be read".to_string()),
                    Some(source) => match parse_document(&source, &label) {
                        Err(e) => Some(e.to_string()),
                        Ok((front_matter, _)) => {
                            let missing = front_matter.missing_required();
                            (!missing.is_empty())
                                .then(|| format!("missing required keys: {}", missing.join(", ")))
                        },
                    },
                };
                if let Some(problem) = problem {
                    problems.push(ContentProblem {
                        category: category.clone(),
                        file,
                        problem,
                    });
                }
            }
        }
        problems
    }

    /// Clear resolver, outline and storage caches.
    pub fn invalidate_all(&self) {
        self.posts.clear();
        self.slugs.clear();
        self.toc.invalidate_all();
        self.storage.invalidate_all();
        info!("content caches invalidated");
    }
}

/// Estimated minutes to read `body` at `words_per_minute`, rounded up.
///
/// Words are whitespace-separated tokens. An empty body still counts as one word, so
/// the minimum is one minute.
pub fn reading_time(body: &str, words_per_minute: u32) -> u32 {
    let words = body.split_whitespace().count().max(1);
    let words = u32::try_from(words).unwrap_or(u32::MAX);
    words.div_ceil(words_per_minute.max(1))
}

/// Parse the date formats posts use. Naive values are taken as UTC.
pub fn parse_post_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
    ] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Newest first. Unparseable dates sort after all valid ones; ties fall back to
/// category then slug.
pub fn compare_by_date_desc(a: &Post, b: &Post) -> Ordering {
    let by_date = match (parse_post_date(&a.date), parse_post_date(&b.date)) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_date
        .then_with(|| a.category.cmp(&b.category))
        .then_with(|| a.slug.cmp(&b.slug))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::types::{PostPriority, PostStatus};
    use chrono::TimeDelta;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn post_file(title: &str, date: &str, extra: &str, body: &str) -> String {
        format!("---\ntitle: {title}\ndate: {date}\ndescription: About {title}\n{extra}---\n{body}")
    }

    fn create_test_resolver() -> (ContentResolver, TempDir, Arc<ManualClock>) {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let mut config = BlogConfig::default();
        config.content.root = temp_dir.path().to_path_buf();
        config.cache.ttl_secs = 60;
        let clock = ManualClock::shared();
        let resolver = ContentResolver::with_clock(config, clock.clone());
        (resolver, temp_dir, clock)
    }

    fn seed(root: &Path) {
        write(
            root,
            "tech/hello-world.mdx",
            &post_file("Hello", "2024-01-10", "tags: [rust]\n", "# Hi\nsome words here"),
        );
        write(
            root,
            "tech/ownership.mdx",
            &post_file(
                "Ownership",
                "2024-02-01",
                "koreanSlug: \"소유권\"\nseries: rust\nseriesOrder: 1\n",
                "## Borrowing\n",
            ),
        );
        write(
            root,
            "tech/old.md",
            &post_file("Old", "2023-05-05", "", "old body"),
        );
        write(
            root,
            "life/diary.mdx",
            &post_file("Diary", "2024-03-01", "status: done\npriority: low\n", "dear diary"),
        );
    }

    #[test]
    fn test_list_all_posts_sorted_newest_first() {
        let (resolver, temp_dir, _) = create_test_resolver();
        seed(temp_dir.path());

        let slugs: Vec<_> = resolver
            .list_all_posts()
            .into_iter()
            .map(|p| p.slug)
            .collect();
        assert_eq!(slugs, vec!["diary", "ownership", "hello-world", "old"]);
    }

    #[test]
    fn test_empty_or_missing_root_yields_no_posts() {
        let mut config = BlogConfig::default();
        config.content.root = "/no/such/content/root".into();
        let resolver = ContentResolver::new(config);
        assert!(resolver.list_all_posts().is_empty());
        assert!(resolver.list_categories().is_empty());

        let (resolver, _temp_dir, _) = create_test_resolver();
        assert!(resolver.list_all_posts().is_empty());
    }

    #[test]
    fn test_defaults_and_declared_values() {
        let (resolver, temp_dir, _) = create_test_resolver();
        seed(temp_dir.path());

        let hello = resolver.find_post_by_slug("tech", "hello-world").unwrap();
        assert_eq!(hello.status, PostStatus::InProgress);
        assert_eq!(hello.priority, PostPriority::Medium);
        assert_eq!(hello.tags, vec!["rust"]);
        assert_eq!(hello.title, "Hello");
        assert_eq!(hello.reading_time, 1);
        assert!(hello.series.is_none());

        let diary = resolver.find_post_by_slug("life", "diary").unwrap();
        assert_eq!(diary.status, PostStatus::Done);
        assert_eq!(diary.priority, PostPriority::Low);
    }

    #[test]
    fn test_find_post_by_filename_slug() {
        let (resolver, temp_dir, _) = create_test_resolver();
        seed(temp_dir.path());

        let post = resolver.find_post_by_slug("tech", "old").unwrap();
        assert_eq!(post.slug, "old");
        assert_eq!(post.category, "tech");
        assert_eq!(post.content, "old body");
    }

    #[test]
    fn test_find_post_by_korean_alias() {
        // Given: A post reachable by its filename and by a Korean alias
        let (resolver, temp_dir, _) = create_test_resolver();
        seed(temp_dir.path());

        // When: Resolving both ways
        let by_alias = resolver.find_post_by_slug("tech", "소유권").unwrap();
        let by_file = resolver.find_post_by_slug("tech", "ownership").unwrap();

        // Then: Both resolve to the same post
        assert_eq!(by_alias, by_file);
        assert_eq!(by_alias.slug, "ownership");
        assert_eq!(by_alias.korean_slug.as_deref(), Some("소유권"));
    }

    #[test]
    fn test_missing_posts_and_categories() {
        let (resolver, temp_dir, _) = create_test_resolver();
        seed(temp_dir.path());

        assert!(resolver.find_post_by_slug("tech", "nonexistent").is_none());
        assert!(resolver.find_post_by_slug("nonexistent", "old").is_none());
        assert!(resolver.find_post_by_slug("../tech", "old").is_none());
        assert!(resolver.list_posts_by_category("nonexistent-category").is_empty());
    }

    #[test]
    fn test_post_cache_outlives_file_changes_until_ttl() {
        let (resolver, temp_dir, clock) = create_test_resolver();
        seed(temp_dir.path());
        assert_eq!(resolver.find_post_by_slug("tech", "old").unwrap().title, "Old");

        write(
            temp_dir.path(),
            "tech/old.md",
            &post_file("Renamed", "2023-05-05", "", "old body"),
        );
        assert_eq!(resolver.find_post_by_slug("tech", "old").unwrap().title, "Old");

        clock.advance(TimeDelta::seconds(61));
        assert_eq!(resolver.find_post_by_slug("tech", "old").unwrap().title, "Renamed");
    }

    #[test]
    fn test_invalidate_all_picks_up_new_posts() {
        let (resolver, temp_dir, _) = create_test_resolver();
        seed(temp_dir.path());
        assert!(resolver.find_post_by_slug("tech", "fresh").is_none());
        assert_eq!(resolver.list_posts_by_category("tech").len(), 3);

        write(
            temp_dir.path(),
            "tech/fresh.mdx",
            &post_file("Fresh", "2025-01-01", "", "new"),
        );
        assert_eq!(resolver.list_posts_by_category("tech").len(), 3);

        resolver.invalidate_all();
        assert_eq!(resolver.list_posts_by_category("tech").len(), 4);
        assert!(resolver.find_post_by_slug("tech", "fresh").is_some());
    }

    #[test]
    fn test_malformed_front_matter_is_skipped() {
        let (resolver, temp_dir, _) = create_test_resolver();
        seed(temp_dir.path());
        write(temp_dir.path(), "tech/broken.mdx", "---\ntitle: [oops\n---\nbody");

        let slugs: Vec<_> = resolver
            .list_posts_by_category("tech")
            .into_iter()
            .map(|p| p.slug)
            .collect();
        assert!(!slugs.contains(&"broken".to_string()));
        assert_eq!(slugs.len(), 3);
        assert!(resolver.find_post_by_slug("tech", "broken").is_none());
    }

    #[test]
    fn test_incomplete_front_matter_kept_unless_strict() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "notes/draft.md", "---\ntitle: Draft\n---\nwip");

        let mut config = BlogConfig::default();
        config.content.root = temp_dir.path().to_path_buf();
        let lenient = ContentResolver::new(config.clone());
        let draft = lenient.find_post_by_slug("notes", "draft").unwrap();
        assert_eq!(draft.date, "");
        assert_eq!(draft.description, "");

        config.front_matter.strict = true;
        let strict = ContentResolver::new(config);
        assert!(strict.find_post_by_slug("notes", "draft").is_none());
        assert!(strict.list_all_posts().is_empty());
    }

    #[test]
    fn test_reading_time_explicit_value_wins() {
        let (resolver, temp_dir, _) = create_test_resolver();
        let long_body = "word ".repeat(450);
        write(
            temp_dir.path(),
            "tech/long.mdx",
            &post_file("Long", "2024-01-01", "", &long_body),
        );
        write(
            temp_dir.path(),
            "tech/declared.mdx",
            &post_file("Declared", "2024-01-01", "readingTime: 12\n", &long_body),
        );

        assert_eq!(resolver.find_post_by_slug("tech", "long").unwrap().reading_time, 3);
        assert_eq!(
            resolver.find_post_by_slug("tech", "declared").unwrap().reading_time,
            12
        );
    }

    #[test]
    fn test_reading_time_rounding() {
        assert_eq!(reading_time("", 200), 1);
        assert_eq!(reading_time("   \n\t ", 200), 1);
        assert_eq!(reading_time("one", 200), 1);
        assert_eq!(reading_time(&"w ".repeat(200), 200), 1);
        assert_eq!(reading_time(&"w ".repeat(201), 200), 2);
        assert_eq!(reading_time(&"w ".repeat(10), 0), 10);
    }

    #[test]
    fn test_adjacent_posts_follow_date_order() {
        // Given: Three tech posts, newest to oldest: ownership, hello-world, old
        let (resolver, temp_dir, _) = create_test_resolver();
        seed(temp_dir.path());

        // When: Looking up the neighbours of the middle one
        let adjacent = resolver.find_adjacent_posts("tech", "2024-01-10", "hello-world");

        // Then: previous is newer, next is older
        assert_eq!(adjacent.previous.unwrap().slug, "ownership");
        assert_eq!(adjacent.next.unwrap().slug, "old");

        let newest = resolver.find_adjacent_posts("tech", "2024-02-01", "ownership");
        assert!(newest.previous.is_none());
        assert_eq!(newest.next.unwrap().slug, "hello-world");

        let missing = resolver.find_adjacent_posts("tech", "1999-01-01", "hello-world");
        assert_eq!(missing, AdjacentPosts::default());
    }

    #[test]
    fn test_slug_mappings_cover_aliases_only() {
        let (resolver, temp_dir, _) = create_test_resolver();
        seed(temp_dir.path());

        let mappings = resolver.slug_mappings("tech");
        assert_eq!(mappings.len(), 1);
        assert_eq!(mappings.get("소유권").map(String::as_str), Some("ownership"));
        assert!(resolver.slug_mappings("life").is_empty());
    }

    #[test]
    fn test_table_of_contents_for_post() {
        let (resolver, temp_dir, _) = create_test_resolver();
        seed(temp_dir.path());

        let post = resolver.find_post_by_slug("tech", "hello-world").unwrap();
        let first = resolver.table_of_contents(&post);
        let second = resolver.table_of_contents(&post);
        assert_eq!(first, second);
        assert_eq!(first[0].text, "Hi");
    }

    #[test]
    fn test_table_of_contents_keys_do_not_collide() {
        // Given: Two posts whose category and slug join to the same hyphenated text
        let (resolver, temp_dir, _) = create_test_resolver();
        write(
            temp_dir.path(),
            "tech/a-b.mdx",
            &post_file("First", "2024-01-01", "", "# Tech Heading\n"),
        );
        write(
            temp_dir.path(),
            "tech-a/b.mdx",
            &post_file("Second", "2024-01-02", "", "# Other Heading\n"),
        );

        // When: Building both outlines through the shared cache
        let first = resolver.find_post_by_slug("tech", "a-b").unwrap();
        let second = resolver.find_post_by_slug("tech-a", "b").unwrap();
        let first_toc = resolver.table_of_contents(&first);
        let second_toc = resolver.table_of_contents(&second);

        // Then: Each post gets its own outline
        assert_eq!(first_toc[0].text, "Tech Heading");
        assert_eq!(second_toc[0].text, "Other Heading");
    }

    #[test]
    fn test_wrong_typed_numbers_keep_post_listed() {
        // Given: Numeric keys written as strings or out of range
        let (resolver, temp_dir, _) = create_test_resolver();
        let body = "word ".repeat(450);
        write(
            temp_dir.path(),
            "tech/a.mdx",
            &post_file("A", "2024-01-02", "readingTime: \"5\"\n", &body),
        );
        write(
            temp_dir.path(),
            "tech/b.mdx",
            &post_file("B", "2024-01-01", "series: s\nseriesOrder: \"2\"\n", &body),
        );
        write(
            temp_dir.path(),
            "tech/c.mdx",
            &post_file("C", "2023-12-31", "readingTime: -1\nseriesOrder: later\n", &body),
        );

        // When: Listing and resolving them
        let posts = resolver.list_posts_by_category("tech");

        // Then: Every post stays visible; unusable values fall back
        assert_eq!(posts.len(), 3);
        let a = resolver.find_post_by_slug("tech", "a").unwrap();
        assert_eq!(a.reading_time, 5);
        let b = resolver.find_post_by_slug("tech", "b").unwrap();
        assert_eq!(b.series_order, Some(2));
        let c = resolver.find_post_by_slug("tech", "c").unwrap();
        assert_eq!(c.reading_time, 3);
        assert_eq!(c.series_order, None);
    }

    #[test]
    fn test_post_params_and_check() {
        let (resolver, temp_dir, _) = create_test_resolver();
        seed(temp_dir.path());
        write(temp_dir.path(), "life/untitled.md", "no front matter");

        let params = resolver.post_params();
        assert_eq!(params.len(), 5);
        assert!(params.contains(&PostParams {
            category: "tech".into(),
            slug: "ownership".into()
        }));

        let problems = resolver.check_content();
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].file, "untitled.md");
        assert!(problems[0].problem.contains("title"));
    }

    #[test]
    fn test_date_ordering_is_total() {
        let mk = |category: &str, slug: &str, date: &str| Post {
            slug: slug.into(),
            korean_slug: None,
            category: category.into(),
            title: String::new(),
            date: date.into(),
            description: String::new(),
            content: String::new(),
            status: PostStatus::default(),
            priority: PostPriority::default(),
            tags: Vec::new(),
            reading_time: 1,
            series: None,
            series_title: None,
            series_description: None,
            series_order: None,
            extra: std::collections::BTreeMap::new(),
        };

        let mut posts = vec![
            mk("b", "z", "not a date"),
            mk("a", "y", "2024-01-01"),
            mk("a", "x", "2024-01-01T12:00:00Z"),
            mk("a", "w", ""),
            mk("b", "v", "2024-01-01"),
        ];
        posts.sort_by(compare_by_date_desc);

        let order: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(order, vec!["x", "y", "v", "w", "z"]);
    }

    #[test]
    fn test_parse_post_date_formats() {
        assert!(parse_post_date("2024-01-15").is_some());
        assert!(parse_post_date("2024-01-15 09:30").is_some());
        assert!(parse_post_date("2024-01-15T09:30:00").is_some());
        assert!(parse_post_date("2024-01-15T09:30:00+09:00").is_some());
        assert!(parse_post_date("January 15").is_none());
        assert!(parse_post_date("").is_none());
    }
}
