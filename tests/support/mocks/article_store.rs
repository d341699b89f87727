// tests/support/mocks/article_store.rs
use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use slugpress::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleSlug, ArticleUpdate,
    ArticleWriteRepository, CreatedAtOrder, NewArticle,
};
use slugpress::domain::errors::{DomainError, DomainResult};

#[derive(Default)]
struct StoreState {
    next_id: i64,
    rows: BTreeMap<i64, Article>,
}

impl StoreState {
    fn slug_taken(&self, slug: &ArticleSlug, except: Option<ArticleId>) -> bool {
        self.rows
            .values()
            .any(|a| a.slug == *slug && Some(a.id) != except)
    }
}

/// In-memory store with the same slug uniqueness contract as the Postgres one.
#[derive(Default)]
pub struct InMemoryArticleStore {
    inner: Mutex<StoreState>,
}

impl InMemoryArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().rows.len()
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut state = self.inner.lock().unwrap();
        if state.slug_taken(&article.slug, None) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }

        state.next_id += 1;
        let id = state.next_id;
        let stored = Article {
            id: ArticleId::new(id)?,
            title: article.title,
            description: article.description,
            markdown: article.markdown,
            slug: article.slug,
            sanitized_html: article.sanitized_html,
            created_at: article.created_at,
        };
        state.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut state = self.inner.lock().unwrap();
        if state.slug_taken(&update.slug, Some(update.id)) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }

        let article = state
            .rows
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        article.apply(update);
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut state = self.inner.lock().unwrap();
        state
            .rows
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let state = self.inner.lock().unwrap();
        Ok(state.rows.get(&i64::from(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let state = self.inner.lock().unwrap();
        Ok(state.rows.values().find(|a| a.slug == *slug).cloned())
    }

    async fn list(&self, order: CreatedAtOrder) -> DomainResult<Vec<Article>> {
        let state = self.inner.lock().unwrap();
        let mut articles: Vec<Article> = state.rows.values().cloned().collect();
        articles.sort_by_key(|a| (a.created_at, a.id));
        if order == CreatedAtOrder::NewestFirst {
            articles.reverse();
        }
        Ok(articles)
    }
}

/// Every call fails as if the database were down.
pub struct UnavailableStore;

fn unavailable<T>() -> DomainResult<T> {
    Err(DomainError::Persistence("connection refused".into()))
}

#[async_trait]
impl ArticleWriteRepository for UnavailableStore {
    async fn insert(&self, _article: NewArticle) -> DomainResult<Article> {
        unavailable()
    }

    async fn update(&self, _update: ArticleUpdate) -> DomainResult<Article> {
        unavailable()
    }

    async fn delete(&self, _id: ArticleId) -> DomainResult<()> {
        unavailable()
    }
}

#[async_trait]
impl ArticleReadRepository for UnavailableStore {
    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        unavailable()
    }

    async fn find_by_slug(&self, _slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        unavailable()
    }

    async fn list(&self, _order: CreatedAtOrder) -> DomainResult<Vec<Article>> {
        unavailable()
    }
}
