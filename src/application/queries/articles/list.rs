use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::CreatedAtOrder,
};

pub struct ListArticlesQuery {
    pub newest_first: bool,
}

impl Default for ListArticlesQuery {
    fn default() -> Self {
        Self { newest_first: true }
    }
}

impl ArticleQueryService {
    pub async fn list_articles(&self, query: ListArticlesQuery) -> ApplicationResult<Vec<ArticleDto>> {
        let order = if query.newest_first {
            CreatedAtOrder::NewestFirst
        } else {
            CreatedAtOrder::OldestFirst
        };

        let records = self.read_repo.list(order).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
