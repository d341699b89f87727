// src/domain/article/services/mod.rs
use std::sync::Arc;

use crate::application::ports::{markdown::MarkdownRenderer, util::SlugGenerator};
use crate::domain::article::draft::ArticleDraft;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedContent {
    pub slug: String,
    pub sanitized_html: String,
}

/// Domain service computing the slug and sanitized body of an article.
///
/// Derivation is a pure function of `(title, markdown)`; both collaborators are
/// stateless. It never fails: empty input yields empty output, which the
/// draft validation then rejects.
pub struct ArticleDerivation {
    slugger: Arc<dyn SlugGenerator>,
    renderer: Arc<dyn MarkdownRenderer>,
}

impl ArticleDerivation {
    #[must_use]
    pub fn new(slugger: Arc<dyn SlugGenerator>, renderer: Arc<dyn MarkdownRenderer>) -> Self {
        Self { slugger, renderer }
    }

    #[must_use]
    pub fn derive(&self, title: &str, markdown: &str) -> DerivedContent {
        let slug = if title.trim().is_empty() {
            String::new()
        } else {
            self.slugger.slugify(title)
        };
        let sanitized_html = if markdown.trim().is_empty() {
            String::new()
        } else {
            self.renderer.render(markdown)
        };

        DerivedContent {
            slug,
            sanitized_html,
        }
    }

    /// Re-derives the draft's slug and html from its current raw fields.
    pub fn apply(&self, draft: &mut ArticleDraft) {
        let derived = self.derive(&draft.title, &draft.markdown);
        draft.apply_derivation(derived);
    }
}
