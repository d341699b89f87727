// src/domain/article/draft.rs
use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::services::DerivedContent;
use crate::domain::article::value_objects::{
    ArticleDescription, ArticleId, ArticleMarkdown, ArticleSlug, ArticleTitle, SanitizedHtml,
};
use crate::domain::errors::FieldErrors;
use chrono::{DateTime, Utc};

/// Slugs that collide with fixed paths under `/articles/`.
const RESERVED_SLUGS: &[&str] = &["new"];

/// Raw, user-supplied article fields as they arrive from a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFields {
    pub title: String,
    pub description: String,
    pub markdown: String,
}

/// In-memory article state that may not be valid yet.
///
/// A draft backs both the "new" and the "edit" forms. Raw fields are assigned
/// from input, the derived `slug` and `sanitized_html` are refreshed through
/// [`ArticleDraft::apply_derivation`], and [`ArticleDraft::validate`] decides
/// whether the result may be persisted. On failure the draft itself is what
/// gets redisplayed.
#[derive(Debug, Clone, Default)]
pub struct ArticleDraft {
    pub id: Option<ArticleId>,
    pub title: String,
    pub description: String,
    pub markdown: String,
    pub slug: String,
    pub sanitized_html: String,
}

#[derive(Debug, Clone)]
pub struct ValidatedArticle {
    pub title: ArticleTitle,
    pub description: Option<ArticleDescription>,
    pub markdown: ArticleMarkdown,
    pub slug: ArticleSlug,
    pub sanitized_html: SanitizedHtml,
}

impl ArticleDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites title, description and markdown. The derived fields are left
    /// stale until the next call to `apply_derivation`.
    pub fn assign(&mut self, fields: ArticleFields) {
        self.title = fields.title;
        self.description = fields.description;
        self.markdown = fields.markdown;
    }

    pub fn apply_derivation(&mut self, derived: DerivedContent) {
        self.slug = derived.slug;
        self.sanitized_html = derived.sanitized_html;
    }

    pub fn validate(&self) -> Result<ValidatedArticle, FieldErrors> {
        let mut errors = FieldErrors::new();

        let title = ArticleTitle::new(self.title.as_str())
            .map_err(|_| errors.push("title", "is required"))
            .ok();

        // An empty slug from a blank title is already covered by the title error.
        let slug = match ArticleSlug::new(self.slug.as_str()) {
            Ok(slug) if RESERVED_SLUGS.contains(&slug.as_str()) => {
                errors.push("slug", "is reserved");
                None
            }
            Ok(slug) => Some(slug),
            Err(_) => {
                if title.is_some() {
                    errors.push("slug", "title must contain at least one letter or digit");
                }
                None
            }
        };

        let markdown = ArticleMarkdown::new(self.markdown.as_str())
            .map_err(|_| errors.push("markdown", "is required"))
            .ok();

        let sanitized_html = match SanitizedHtml::new(self.sanitized_html.as_str()) {
            Ok(html) => Some(html),
            Err(_) => {
                if markdown.is_some() {
                    errors.push("markdown", "has no displayable content");
                }
                None
            }
        };

        match (title, slug, markdown, sanitized_html) {
            (Some(title), Some(slug), Some(markdown), Some(sanitized_html)) => {
                Ok(ValidatedArticle {
                    title,
                    description: ArticleDescription::parse(self.description.as_str()),
                    markdown,
                    slug,
                    sanitized_html,
                })
            }
            _ => Err(errors),
        }
    }
}

impl From<&Article> for ArticleDraft {
    fn from(article: &Article) -> Self {
        Self {
            id: Some(article.id),
            title: article.title.as_str().to_string(),
            description: article
                .description
                .as_ref()
                .map(|d| d.as_str().to_string())
                .unwrap_or_default(),
            markdown: article.markdown.as_str().to_string(),
            slug: article.slug.as_str().to_string(),
            sanitized_html: article.sanitized_html.as_str().to_string(),
        }
    }
}

impl ValidatedArticle {
    #[must_use]
    pub fn into_new(self, created_at: DateTime<Utc>) -> NewArticle {
        NewArticle {
            title: self.title,
            description: self.description,
            markdown: self.markdown,
            slug: self.slug,
            sanitized_html: self.sanitized_html,
            created_at,
        }
    }

    #[must_use]
    pub fn into_update(self, id: ArticleId) -> ArticleUpdate {
        ArticleUpdate {
            id,
            title: self.title,
            description: self.description,
            markdown: self.markdown,
            slug: self.slug,
            sanitized_html: self.sanitized_html,
        }
    }
}
