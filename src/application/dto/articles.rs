use crate::domain::article::{Article, ArticleDraft};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub markdown: String,
    pub slug: String,
    pub sanitized_html: String,
    pub created_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            description: article.description.map(|d| d.into_inner()),
            markdown: article.markdown.into_inner(),
            slug: article.slug.into_inner(),
            sanitized_html: article.sanitized_html.into_inner(),
            created_at: article.created_at,
        }
    }
}

/// The user-editable part of an article, as shown in the new/edit forms.
/// `id` is set when editing an existing article.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleFormDto {
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub markdown: String,
}

impl From<&ArticleDraft> for ArticleFormDto {
    fn from(draft: &ArticleDraft) -> Self {
        Self {
            id: draft.id.map(Into::into),
            title: draft.title.clone(),
            description: draft.description.clone(),
            markdown: draft.markdown.clone(),
        }
    }
}

impl From<&ArticleDto> for ArticleFormDto {
    fn from(article: &ArticleDto) -> Self {
        Self {
            id: Some(article.id),
            title: article.title.clone(),
            description: article.description.clone().unwrap_or_default(),
            markdown: article.markdown.clone(),
        }
    }
}
