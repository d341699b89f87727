// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{ArticleDraft, ArticleFields},
};

#[derive(Debug, Clone, Default)]
pub struct CreateArticleCommand {
    pub title: String,
    pub description: String,
    pub markdown: String,
}

impl From<CreateArticleCommand> for ArticleFields {
    fn from(command: CreateArticleCommand) -> Self {
        Self {
            title: command.title,
            description: command.description,
            markdown: command.markdown,
        }
    }
}

impl ArticleCommandService {
    pub async fn create_article(&self, command: CreateArticleCommand) -> ApplicationResult<ArticleDto> {
        let mut draft = ArticleDraft::new();
        draft.assign(command.into());
        let validated = self.prepare(&mut draft)?;

        let new_article = validated.into_new(self.clock.now());
        let created = self
            .write_repo
            .insert(new_article)
            .await
            .map_err(|err| Self::reject_conflict(&draft, err))?;

        tracing::info!(article_id = %created.id, slug = %created.slug, "article created");
        Ok(created.into())
    }
}
