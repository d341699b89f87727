// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::{ArticleDto, ArticleFormDto},
    error::ApplicationError,
    queries::articles::{GetArticleByIdQuery, GetArticleBySlugQuery, ListArticlesQuery},
    ApplicationResult,
};
use crate::domain::errors::FieldErrors;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::views;
use axum::{
    Extension, Form,
    extract::Path,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;

/// Body of the new/edit forms. Absent fields are read as empty so they show up
/// as validation messages instead of a rejected request.
#[derive(Debug, Default, Deserialize)]
pub struct ArticleForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub markdown: String,
}

#[derive(Debug, Clone, Copy)]
enum FormView {
    New,
    Edit,
}

impl FormView {
    fn render(self, form: &ArticleFormDto, errors: &FieldErrors) -> String {
        match self {
            Self::New => views::new_article(form, errors),
            Self::Edit => views::edit_article(form, errors),
        }
    }
}

fn article_location(article: &ArticleDto) -> String {
    format!("/articles/{}", article.slug)
}

/// Success redirects to the article; a rejected save re-renders the form with
/// what the user typed.
fn save_response(result: ApplicationResult<ArticleDto>, view: FormView) -> HttpResult<Response> {
    match result {
        Ok(article) => Ok(Redirect::to(&article_location(&article)).into_response()),
        Err(ApplicationError::InvalidArticle(rejected)) => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(view.render(&rejected.form, &rejected.errors)),
        )
            .into_response()),
        Err(err) => Err(HttpError::from_error(err)),
    }
}

pub async fn index(Extension(state): Extension<HttpState>) -> HttpResult<Html<String>> {
    let articles = state
        .services
        .article_queries
        .list_articles(ListArticlesQuery::default())
        .await
        .into_http()?;

    Ok(Html(views::index(&articles)))
}

pub async fn new_form() -> Html<String> {
    Html(views::new_article(
        &ArticleFormDto::default(),
        &FieldErrors::new(),
    ))
}

pub async fn edit_form(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Html<String>> {
    let article = state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()?;

    Ok(Html(views::edit_article(
        &ArticleFormDto::from(&article),
        &FieldErrors::new(),
    )))
}

pub async fn show(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Response> {
    let result = state
        .services
        .article_queries
        .get_article_by_slug(GetArticleBySlugQuery { slug })
        .await;

    match result {
        Ok(article) => Ok(Html(views::show_article(&article)).into_response()),
        Err(err) if err.is_not_found() => Ok(Redirect::to("/").into_response()),
        Err(err) => Err(HttpError::from_error(err)),
    }
}

pub async fn create(
    Extension(state): Extension<HttpState>,
    Form(form): Form<ArticleForm>,
) -> HttpResult<Response> {
    let command = CreateArticleCommand {
        title: form.title,
        description: form.description,
        markdown: form.markdown,
    };

    let result = state.services.article_commands.create_article(command).await;
    save_response(result, FormView::New)
}

pub async fn update(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Form(form): Form<ArticleForm>,
) -> HttpResult<Response> {
    let command = UpdateArticleCommand {
        id,
        title: form.title,
        description: form.description,
        markdown: form.markdown,
    };

    let result = state.services.article_commands.update_article(command).await;
    save_response(result, FormView::Edit)
}

pub async fn delete(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Redirect> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(Redirect::to("/"))
}
