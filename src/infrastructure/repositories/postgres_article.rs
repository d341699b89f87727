// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleDescription, ArticleId, ArticleMarkdown, ArticleReadRepository, ArticleSlug,
    ArticleTitle, ArticleUpdate, ArticleWriteRepository, CreatedAtOrder, NewArticle,
    SanitizedHtml,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const ARTICLE_COLUMNS: &str =
    "id, title, description, markdown, slug, sanitized_html, created_at";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    description: Option<String>,
    markdown: String,
    slug: String,
    sanitized_html: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            description: row.description.and_then(ArticleDescription::parse),
            markdown: ArticleMarkdown::new(row.markdown)?,
            slug: ArticleSlug::new(row.slug)?,
            sanitized_html: SanitizedHtml::new(row.sanitized_html)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            description,
            markdown,
            slug,
            sanitized_html,
            created_at,
        } = article;

        let sql = format!(
            "INSERT INTO articles (title, description, markdown, slug, sanitized_html, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(title.into_inner())
            .bind(description.map(ArticleDescription::into_inner))
            .bind(markdown.into_inner())
            .bind(slug.into_inner())
            .bind(sanitized_html.into_inner())
            .bind(created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            description,
            markdown,
            slug,
            sanitized_html,
        } = update;

        // Last write wins; rows carry no version column.
        let sql = format!(
            "UPDATE articles
             SET title = $1, description = $2, markdown = $3, slug = $4, sanitized_html = $5
             WHERE id = $6
             RETURNING {ARTICLE_COLUMNS}"
        );
        let maybe_row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(title.into_inner())
            .bind(description.map(ArticleDescription::into_inner))
            .bind(markdown.into_inner())
            .bind(slug.into_inner())
            .bind(sanitized_html.into_inner())
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let row = maybe_row.ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE slug = $1");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list(&self, order: CreatedAtOrder) -> DomainResult<Vec<Article>> {
        let direction = match order {
            CreatedAtOrder::NewestFirst => "DESC",
            CreatedAtOrder::OldestFirst => "ASC",
        };
        let sql = format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles ORDER BY created_at {direction}, id {direction}"
        );

        let rows = sqlx::query_as::<_, ArticleRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}
