// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::articles::ArticleCommandService,
        ports::{ClockPort, MarkdownRendererPort, SlugGeneratorPort},
        queries::articles::ArticleQueryService,
    },
    domain::article::{ArticleDerivation, ArticleReadRepository, ArticleWriteRepository},
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    derivation: Arc<ArticleDerivation>,
}

impl ApplicationServices {
    #[must_use]
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        clock: Arc<ClockPort>,
        slugger: Arc<SlugGeneratorPort>,
        renderer: Arc<MarkdownRendererPort>,
    ) -> Self {
        let derivation = Arc::new(ArticleDerivation::new(
            Arc::clone(&slugger),
            Arc::clone(&renderer),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&derivation),
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_read_repo)));

        Self {
            article_commands,
            article_queries,
            derivation,
        }
    }

    #[must_use]
    pub fn derivation(&self) -> Arc<ArticleDerivation> {
        Arc::clone(&self.derivation)
    }
}
