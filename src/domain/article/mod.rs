pub mod draft;
pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use draft::{ArticleDraft, ArticleFields, ValidatedArticle};
pub use entity::{Article, ArticleUpdate, NewArticle};
pub use repository::{ArticleReadRepository, ArticleWriteRepository, CreatedAtOrder};
pub use services::{ArticleDerivation, DerivedContent};
pub use value_objects::{
    ArticleDescription, ArticleId, ArticleMarkdown, ArticleSlug, ArticleTitle, SanitizedHtml,
};
