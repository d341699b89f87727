// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{article::ArticleId, errors::DomainError},
};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let id = ArticleId::new(command.id)
            .map_err(|_| ApplicationError::not_found("article not found"))?;

        self.write_repo.delete(id).await.map_err(|err| match err {
            DomainError::NotFound(_) => ApplicationError::not_found("article not found"),
            other => other.into(),
        })?;

        tracing::info!(article_id = %id, "article deleted");
        Ok(())
    }
}
