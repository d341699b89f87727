// src/application/commands/articles/save.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleFormDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleDraft, ValidatedArticle},
        errors::{DomainError, FieldErrors},
    },
};

impl ArticleCommandService {
    /// Runs derivation on the draft and validates it. A rejected draft is
    /// returned inside the error so the caller can redisplay the form.
    pub(super) fn prepare(&self, draft: &mut ArticleDraft) -> ApplicationResult<ValidatedArticle> {
        self.derivation.apply(draft);
        draft.validate().map_err(|errors| {
            tracing::debug!(%errors, "article rejected by validation");
            ApplicationError::invalid_article(ArticleFormDto::from(&*draft), errors)
        })
    }

    /// Store-level slug collisions surface as a field error on the draft.
    pub(super) fn reject_conflict(draft: &ArticleDraft, err: DomainError) -> ApplicationError {
        match err {
            DomainError::Conflict(msg) => {
                tracing::debug!(slug = %draft.slug, reason = %msg, "article rejected by store");
                ApplicationError::invalid_article(
                    ArticleFormDto::from(draft),
                    FieldErrors::single("slug", "is already used by another article"),
                )
            }
            other => other.into(),
        }
    }
}
