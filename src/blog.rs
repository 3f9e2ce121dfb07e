use chrono::{DateTime, Utc};
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "ssr")]
use dashmap::DashMap;
#[cfg(feature = "ssr")]
use gray_matter::{engine::YAML, Matter};
#[cfg(feature = "ssr")]
use std::sync::LazyLock;

#[cfg(feature = "ssr")]
const META_CACHE_KEY: &str = "";

#[cfg(feature = "ssr")]
static GLOBAL_META_CACHE: LazyLock<DashMap<String, Vec<PostMeta>>> =
    LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "blog"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct Assets;

#[cfg(feature = "ssr")]
#[derive(Deserialize, Debug, Default)]
struct FrontMatter {
    title: String,
    description: String,
    author: String,
    date: DateTime<Utc>,
    category: String,
    read_time: String,
    image: String,
    tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostMeta {
    pub name: String,
    pub title: String,
    pub description: String,
    pub author: String,
    pub date: DateTime<Utc>,
    pub category: String,
    pub read_time: String,
    pub image: String,
    pub tags: Vec<String>,
}

impl PostMeta {
    pub fn display_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlogError {
    #[error("Blog post not found")]
    NotFound,
    #[error("Couldn't parse blog post {0}")]
    ParseError(String),
}

#[cfg(feature = "ssr")]
fn parse_meta(matter: &Matter<YAML>, file: &str) -> Result<PostMeta, BlogError> {
    let content = Assets::get(file).ok_or(BlogError::NotFound)?;
    let content = std::str::from_utf8(&content.data)
        .map_err(|_| BlogError::ParseError(file.to_string()))?;
    let fm = matter
        .parse_with_struct::<FrontMatter>(content)
        .ok_or_else(|| BlogError::ParseError(file.to_string()))?;
    Ok(PostMeta {
        name: file.trim_end_matches(".md").to_string(),
        title: fm.data.title,
        description: fm.data.description,
        author: fm.data.author,
        date: fm.data.date,
        category: fm.data.category,
        read_time: fm.data.read_time,
        image: fm.data.image,
        tags: fm.data.tags,
    })
}

/// Front matter of every embedded post, newest first.
#[cfg(feature = "ssr")]
pub fn get_meta() -> Result<Vec<PostMeta>, BlogError> {
    let cache = &*GLOBAL_META_CACHE;
    if let Some(r) = cache.get(META_CACHE_KEY) {
        return Ok(r.clone());
    }
    let matter = Matter::<YAML>::new();
    let mut posts = Assets::iter()
        .filter(|s| s.ends_with(".md"))
        .map(|s| parse_meta(&matter, &s))
        .collect::<Result<Vec<_>, _>>()?;
    posts.sort_by(|a, b| b.date.cmp(&a.date));
    cache.insert(META_CACHE_KEY.to_string(), posts.clone());
    Ok(posts)
}

#[cfg(feature = "ssr")]
pub fn recent_posts(limit: usize) -> Result<Vec<PostMeta>, BlogError> {
    let mut posts = get_meta()?;
    posts.truncate(limit);
    Ok(posts)
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_meta_is_newest_first() {
        let posts = get_meta().expect("embedded posts should parse");
        assert_eq!(posts.len(), 3);
        assert!(posts.windows(2).all(|w| w[0].date >= w[1].date));
        assert_eq!(posts[0].name, "scalable-web-apps");
        assert_eq!(posts[0].display_date(), "May 1, 2023");
        assert_eq!(posts[0].read_time, "8 min read");
    }

    #[test]
    fn test_recent_posts_limit() {
        assert_eq!(recent_posts(2).unwrap().len(), 2);
        assert_eq!(recent_posts(10).unwrap().len(), 3);
        assert!(recent_posts(0).unwrap().is_empty());
    }

    #[test]
    fn test_meta_is_cached_on_server() {
        let first = get_meta().expect("embedded posts should parse");
        assert!(GLOBAL_META_CACHE.contains_key(META_CACHE_KEY));
        assert_eq!(GLOBAL_META_CACHE.len(), 1);
        assert_eq!(get_meta().unwrap(), first);
    }

    #[test]
    fn test_missing_post() {
        let matter = Matter::<YAML>::new();
        assert_eq!(
            parse_meta(&matter, "does-not-exist.md"),
            Err(BlogError::NotFound)
        );
    }
}
