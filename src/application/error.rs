// src/application/error.rs
use crate::application::dto::ArticleFormDto;
use crate::domain::errors::{DomainError, FieldErrors};
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// A save that failed validation, together with what the user submitted.
#[derive(Debug, Clone)]
pub struct RejectedArticle {
    pub form: ArticleFormDto,
    pub errors: FieldErrors,
}

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("invalid article: {}", .0.errors)]
    InvalidArticle(Box<RejectedArticle>),

    #[error("resource not found: {0}")]
    NotFound(String),
}

impl ApplicationError {
    #[must_use]
    pub fn invalid_article(form: ArticleFormDto, errors: FieldErrors) -> Self {
        Self::InvalidArticle(Box::new(RejectedArticle { form, errors }))
    }

    #[must_use]
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// True for any flavour of "the thing you asked for does not exist".
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::Domain(DomainError::NotFound(_))
        )
    }
}
