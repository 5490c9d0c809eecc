//! Listings over the host's content repository and attachment store.
//!
//! The host implements [`ContentRepository`], [`AttachmentStore`] and
//! [`ObjectCache`]; the functions here only reshape what those return.
use crate::errors::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub id: u64,
    pub name: String,
}

/// A taxonomy or post type: slug plus plural label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labelled {
    pub slug: String,
    pub label: String,
}

/// Post query arguments, passed through to the repository.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppress_filters: Option<bool>,
    #[serde(flatten)]
    pub args: Map<String, Value>,
}

pub trait ContentRepository: Send + Sync {
    fn posts(&self, query: &PostQuery) -> Result<Vec<Post>>;
    fn public_taxonomies(&self) -> Result<Vec<Labelled>>;
    fn public_post_types(&self) -> Result<Vec<Labelled>>;
    fn terms(&self, taxonomies: &[String]) -> Result<Vec<Term>>;
}

/// Posts as id → title. Filters stay on unless the query says otherwise.
pub fn get_posts(repo: &dyn ContentRepository, query: &PostQuery) -> Result<BTreeMap<u64, String>> {
    let mut query = query.clone();
    query.suppress_filters.get_or_insert(false);
    Ok(repo
        .posts(&query)?
        .into_iter()
        .map(|p| (p.id, p.title))
        .collect())
}

/// Public taxonomies as slug → label.
pub fn get_taxonomies(repo: &dyn ContentRepository) -> Result<BTreeMap<String, String>> {
    Ok(repo
        .public_taxonomies()?
        .into_iter()
        .map(|t| (t.slug, t.label))
        .collect())
}

/// Public post types as slug → label.
pub fn get_post_types(repo: &dyn ContentRepository) -> Result<BTreeMap<String, String>> {
    Ok(repo
        .public_post_types()?
        .into_iter()
        .map(|t| (t.slug, t.label))
        .collect())
}

/// Terms of the given taxonomies as id → name.
pub fn get_terms(repo: &dyn ContentRepository, taxonomies: &[String]) -> Result<BTreeMap<u64, String>> {
    Ok(repo
        .terms(taxonomies)?
        .into_iter()
        .map(|t| (t.id, t.name))
        .collect())
}

/// Source of an attachment image at a given size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSrc {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub intermediate: bool,
}

pub trait AttachmentStore: Send + Sync {
    /// Ids of attachments whose guid is exactly `url`.
    fn ids_by_guid(&self, url: &str) -> Result<Vec<u64>>;
    fn image_src(&self, id: u64, size: &str) -> Result<Option<ImageSrc>>;
}

/// Key/value cache owned by the host.
pub trait ObjectCache: Send + Sync {
    fn get(&self, key: &str) -> Option<Vec<u64>>;
    /// Store `value` unless `key` is already present.
    fn add(&self, key: &str, value: Vec<u64>);
}

/// Process-local [`ObjectCache`].
#[derive(Debug, Default)]
pub struct MemoryCache {
    inner: Mutex<HashMap<String, Vec<u64>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ObjectCache for MemoryCache {
    fn get(&self, key: &str) -> Option<Vec<u64>> {
        let map = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        map.get(key).cloned()
    }

    fn add(&self, key: &str, value: Vec<u64>) {
        let mut map = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        map.entry(key.to_string()).or_insert(value);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageInfo {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub thumbnail: bool,
}

/// Resolves image URLs to attachments, caching id lookups.
pub struct ImageLookup<'a> {
    store: &'a dyn AttachmentStore,
    cache: &'a dyn ObjectCache,
}

impl<'a> ImageLookup<'a> {
    pub fn new(store: &'a dyn AttachmentStore, cache: &'a dyn ObjectCache) -> Self {
        Self { store, cache }
    }

    /// Attachment id for `url`, or 0 when there is none.
    pub fn image_id(&self, url: &str) -> Result<u64> {
        if url.is_empty() {
            return Ok(0);
        }
        let key = cache_key(url);
        let ids = match self.cache.get(&key) {
            Some(ids) => ids,
            None => {
                let ids = self.store.ids_by_guid(url)?;
                tracing::trace!(%key, found = ids.len(), "image id cache miss");
                self.cache.add(&key, ids.clone());
                ids
            }
        };
        Ok(ids.first().copied().unwrap_or(0))
    }

    /// Full-size image behind `url`.
    pub fn image_from_url(&self, url: &str) -> Result<Option<ImageInfo>> {
        let id = self.image_id(url)?;
        Ok(self.store.image_src(id, "full")?.map(|src| ImageInfo {
            url: src.url,
            width: src.width,
            height: src.height,
            thumbnail: src.intermediate,
        }))
    }
}

fn cache_key(url: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(url.as_bytes());
    format!("image_id_{:x}", hasher.finalize())
}
