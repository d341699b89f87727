use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleDraft, ArticleFields, ArticleId},
};

#[derive(Debug, Clone)]
pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub markdown: String,
}

impl ArticleCommandService {
    pub async fn update_article(&self, command: UpdateArticleCommand) -> ApplicationResult<ArticleDto> {
        let UpdateArticleCommand {
            id,
            title,
            description,
            markdown,
        } = command;

        let id = ArticleId::new(id).map_err(|_| ApplicationError::not_found("article not found"))?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let mut draft = ArticleDraft::from(&article);
        draft.assign(ArticleFields {
            title,
            description,
            markdown,
        });
        let validated = self.prepare(&mut draft)?;

        let updated = self
            .write_repo
            .update(validated.into_update(id))
            .await
            .map_err(|err| Self::reject_conflict(&draft, err))?;

        tracing::info!(article_id = %updated.id, slug = %updated.slug, "article updated");
        Ok(updated.into())
    }
}
