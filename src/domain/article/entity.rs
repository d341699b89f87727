// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleDescription, ArticleId, ArticleMarkdown, ArticleSlug, ArticleTitle, SanitizedHtml,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub description: Option<ArticleDescription>,
    pub markdown: ArticleMarkdown,
    pub slug: ArticleSlug,
    pub sanitized_html: SanitizedHtml,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub description: Option<ArticleDescription>,
    pub markdown: ArticleMarkdown,
    pub slug: ArticleSlug,
    pub sanitized_html: SanitizedHtml,
    pub created_at: DateTime<Utc>,
}

/// Full overwrite of the editable and derived columns. `id` and `created_at`
/// never change after insert.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub description: Option<ArticleDescription>,
    pub markdown: ArticleMarkdown,
    pub slug: ArticleSlug,
    pub sanitized_html: SanitizedHtml,
}

impl Article {
    /// Applies an update in memory, keeping identity and creation time.
    pub fn apply(&mut self, update: ArticleUpdate) {
        debug_assert_eq!(self.id, update.id);
        self.title = update.title;
        self.description = update.description;
        self.markdown = update.markdown;
        self.slug = update.slug;
        self.sanitized_html = update.sanitized_html;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_article() -> Article {
        Article {
            id: ArticleId::new(1).unwrap(),
            title: ArticleTitle::new("title").unwrap(),
            description: None,
            markdown: ArticleMarkdown::new("body").unwrap(),
            slug: ArticleSlug::new("title").unwrap(),
            sanitized_html: SanitizedHtml::new("<p>body</p>").unwrap(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn apply_overwrites_content_but_keeps_identity() {
        let mut article = sample_article();
        let created_at = article.created_at;
        article.apply(ArticleUpdate {
            id: article.id,
            title: ArticleTitle::new("new title").unwrap(),
            description: ArticleDescription::parse("about"),
            markdown: ArticleMarkdown::new("new body").unwrap(),
            slug: ArticleSlug::new("new-title").unwrap(),
            sanitized_html: SanitizedHtml::new("<p>new body</p>").unwrap(),
        });

        assert_eq!(i64::from(article.id), 1);
        assert_eq!(article.created_at, created_at);
        assert_eq!(article.title.as_str(), "new title");
        assert_eq!(article.slug.as_str(), "new-title");
        assert_eq!(article.description.unwrap().as_str(), "about");
    }
}
