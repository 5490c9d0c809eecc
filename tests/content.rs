use customizer_value_helpers::content::{
    get_post_types, get_posts, get_taxonomies, get_terms, AttachmentStore, ContentRepository,
    ImageInfo, ImageLookup, ImageSrc, Labelled, MemoryCache, Post, PostQuery, Term,
};
use customizer_value_helpers::{HelperError, Result};
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Default)]
struct FakeRepo {
    last_query: Mutex<Option<PostQuery>>,
}

impl ContentRepository for FakeRepo {
    fn posts(&self, query: &PostQuery) -> Result<Vec<Post>> {
        *self.last_query.lock().unwrap() = Some(query.clone());
        Ok(vec![
            Post { id: 12, title: "Hello".into() },
            Post { id: 3, title: "About".into() },
        ])
    }

    fn public_taxonomies(&self) -> Result<Vec<Labelled>> {
        Ok(vec![
            Labelled { slug: "category".into(), label: "Categories".into() },
            Labelled { slug: "post_tag".into(), label: "Tags".into() },
        ])
    }

    fn public_post_types(&self) -> Result<Vec<Labelled>> {
        Ok(vec![Labelled { slug: "page".into(), label: "Pages".into() }])
    }

    fn terms(&self, taxonomies: &[String]) -> Result<Vec<Term>> {
        if taxonomies.is_empty() {
            return Err(HelperError::Collaborator("no taxonomy given".into()));
        }
        Ok(vec![Term { id: 7, name: "News".into() }])
    }
}

#[test]
fn test_posts_keyed_by_id_with_filters_on() {
    let repo = FakeRepo::default();
    let posts = get_posts(&repo, &PostQuery::default()).unwrap();
    assert_eq!(posts.get(&12).map(String::as_str), Some("Hello"));
    assert_eq!(posts.len(), 2);
    let seen = repo.last_query.lock().unwrap().clone().unwrap();
    assert_eq!(seen.suppress_filters, Some(false));

    let explicit = PostQuery { suppress_filters: Some(true), ..PostQuery::default() };
    get_posts(&repo, &explicit).unwrap();
    let seen = repo.last_query.lock().unwrap().clone().unwrap();
    assert_eq!(seen.suppress_filters, Some(true));
}

#[test]
fn test_taxonomies_post_types_terms() {
    let repo = FakeRepo::default();
    let tax = get_taxonomies(&repo).unwrap();
    assert_eq!(tax.get("post_tag").map(String::as_str), Some("Tags"));
    let types = get_post_types(&repo).unwrap();
    assert_eq!(types.get("page").map(String::as_str), Some("Pages"));
    let terms = get_terms(&repo, &["category".to_string()]).unwrap();
    assert_eq!(terms.get(&7).map(String::as_str), Some("News"));
    assert!(matches!(get_terms(&repo, &[]), Err(HelperError::Collaborator(_))));
}

#[derive(Default)]
struct FakeStore {
    queries: AtomicUsize,
}

impl AttachmentStore for FakeStore {
    fn ids_by_guid(&self, url: &str) -> Result<Vec<u64>> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        Ok(if url.ends_with("logo.png") { vec![42, 43] } else { Vec::new() })
    }

    fn image_src(&self, id: u64, size: &str) -> Result<Option<ImageSrc>> {
        assert_eq!(size, "full");
        Ok((id == 42).then(|| ImageSrc {
            url: "https://example.com/logo.png".into(),
            width: 640,
            height: 480,
            intermediate: false,
        }))
    }
}

#[test]
fn test_image_id_is_cached() {
    let store = FakeStore::default();
    let cache = MemoryCache::new();
    let lookup = ImageLookup::new(&store, &cache);

    assert_eq!(lookup.image_id("https://example.com/logo.png").unwrap(), 42);
    assert_eq!(lookup.image_id("https://example.com/logo.png").unwrap(), 42);
    assert_eq!(store.queries.load(Ordering::SeqCst), 1);

    assert_eq!(lookup.image_id("https://example.com/missing.png").unwrap(), 0);
    assert_eq!(lookup.image_id("").unwrap(), 0);
    assert_eq!(store.queries.load(Ordering::SeqCst), 2);
}

#[test]
fn test_image_from_url() {
    let store = FakeStore::default();
    let cache = MemoryCache::new();
    let lookup = ImageLookup::new(&store, &cache);

    assert_eq!(
        lookup.image_from_url("https://example.com/logo.png").unwrap(),
        Some(ImageInfo {
            url: "https://example.com/logo.png".into(),
            width: 640,
            height: 480,
            thumbnail: false,
        })
    );
    assert_eq!(lookup.image_from_url("https://example.com/other.png").unwrap(), None);
}
