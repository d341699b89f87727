// src/presentation/http/views.rs
//! Server-side HTML pages.
//!
//! Every user-provided value goes through `ammonia::clean_text` before it is
//! interpolated. The only exception is `sanitized_html`, which was cleaned
//! when the article was saved and is emitted as-is on the show page.
use crate::application::dto::{ArticleDto, ArticleFormDto};
use crate::domain::errors::FieldErrors;
use ammonia::clean_text as escape;
use axum::http::StatusCode;
use chrono::{DateTime, Utc};

const STYLESHEET: &str = r"
body { font-family: system-ui, sans-serif; max-width: 52rem; margin: 2rem auto; padding: 0 1rem; color: #222; }
a.button, button { display: inline-block; padding: .35rem .8rem; border: 1px solid #888; border-radius: 4px; background: #f4f4f4; color: #222; text-decoration: none; font-size: .95rem; cursor: pointer; }
a.button.primary, button.primary { background: #2563eb; border-color: #2563eb; color: #fff; }
button.danger { background: #dc2626; border-color: #dc2626; color: #fff; }
.card { border: 1px solid #ddd; border-radius: 6px; padding: 1rem 1.25rem; margin: 1rem 0; }
.muted { color: #666; font-size: .9rem; }
.actions { display: flex; gap: .5rem; align-items: center; margin-top: .75rem; }
.actions form { margin: 0; }
label { display: block; font-weight: 600; margin-top: 1rem; }
input[type=text], textarea { width: 100%; box-sizing: border-box; padding: .4rem; font: inherit; }
textarea { min-height: 6rem; }
textarea#markdown { min-height: 18rem; font-family: ui-monospace, monospace; }
.errors { border: 1px solid #dc2626; background: #fef2f2; padding: .5rem 1rem; border-radius: 4px; }
.field-error { color: #dc2626; font-size: .9rem; }
";

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n<style>{STYLESHEET}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        title = escape(title),
    )
}

fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%B %-d, %Y").to_string()
}

fn delete_form(id: i64) -> String {
    format!(
        "<form action=\"/articles/{id}?_method=DELETE\" method=\"POST\">\
         <button type=\"submit\" class=\"danger\">Delete</button></form>"
    )
}

#[must_use]
pub fn index(articles: &[ArticleDto]) -> String {
    let mut body = String::from(
        "<h1>Blog Articles</h1>\n<a href=\"/articles/new\" class=\"button primary\">New Article</a>\n",
    );

    if articles.is_empty() {
        body.push_str("<p class=\"muted\">No articles yet.</p>\n");
    }

    for article in articles {
        let description = article
            .description
            .as_deref()
            .map(|d| format!("<p>{}</p>", escape(d)))
            .unwrap_or_default();
        body.push_str(&format!(
            "<article class=\"card\">\n<h2>{title}</h2>\n<div class=\"muted\">{date}</div>\n{description}\n\
             <div class=\"actions\">\
             <a href=\"/articles/{slug}\" class=\"button primary\">Read More</a>\
             <a href=\"/articles/edit/{id}\" class=\"button\">Edit</a>{delete}</div>\n</article>\n",
            title = escape(&article.title),
            date = format_date(&article.created_at),
            slug = escape(&article.slug),
            id = article.id,
            delete = delete_form(article.id),
        ));
    }

    layout("Blog Articles", &body)
}

#[must_use]
pub fn show_article(article: &ArticleDto) -> String {
    let body = format!(
        "<h1>{title}</h1>\n<div class=\"muted\">{date}</div>\n\
         <div class=\"actions\"><a href=\"/\" class=\"button\">All Articles</a>\
         <a href=\"/articles/edit/{id}\" class=\"button\">Edit</a>{delete}</div>\n\
         <div class=\"content\">\n{html}\n</div>",
        title = escape(&article.title),
        date = format_date(&article.created_at),
        id = article.id,
        delete = delete_form(article.id),
        html = article.sanitized_html,
    );

    layout(&article.title, &body)
}

#[must_use]
pub fn new_article(form: &ArticleFormDto, errors: &FieldErrors) -> String {
    let body = format!(
        "<h1>New Article</h1>\n<form action=\"/articles\" method=\"POST\">\n{fields}\n</form>",
        fields = form_fields(form, errors),
    );
    layout("New Article", &body)
}

#[must_use]
pub fn edit_article(form: &ArticleFormDto, errors: &FieldErrors) -> String {
    let action = form
        .id
        .map_or_else(|| "/articles".to_string(), |id| format!("/articles/{id}?_method=PUT"));
    let body = format!(
        "<h1>Edit Article</h1>\n<form action=\"{action}\" method=\"POST\">\n{fields}\n</form>",
        fields = form_fields(form, errors),
    );
    layout("Edit Article", &body)
}

#[must_use]
pub fn error_page(status: StatusCode, message: &str) -> String {
    let reason = status.canonical_reason().unwrap_or("Error");
    let body = format!(
        "<h1>{code} {reason}</h1>\n<p>{message}</p>\n<a href=\"/\" class=\"button\">All Articles</a>",
        code = status.as_u16(),
        message = escape(message),
    );
    layout(reason, &body)
}

fn form_fields(form: &ArticleFormDto, errors: &FieldErrors) -> String {
    let mut out = String::new();

    if !errors.is_empty() {
        out.push_str("<div class=\"errors\"><ul>");
        for err in errors.iter() {
            out.push_str(&format!(
                "<li>{} {}</li>",
                escape(err.field),
                escape(&err.message)
            ));
        }
        out.push_str("</ul></div>\n");
    }

    let field_error = |field: &str| {
        errors
            .get(field)
            .map(|msg| format!("<div class=\"field-error\">{}</div>", escape(msg)))
            .unwrap_or_default()
    };
    // Slug problems are caused by the title, so they are shown next to it.
    let title_error = format!("{}{}", field_error("title"), field_error("slug"));

    out.push_str(&format!(
        "<label for=\"title\">Title</label>\n\
         <input type=\"text\" id=\"title\" name=\"title\" required value=\"{title}\">\n{title_error}\n\
         <label for=\"description\">Description</label>\n\
         <textarea id=\"description\" name=\"description\">{description}</textarea>\n\
         <label for=\"markdown\">Markdown</label>\n\
         <textarea id=\"markdown\" name=\"markdown\" required>{markdown}</textarea>\n{markdown_error}\n\
         <div class=\"actions\"><a href=\"/\" class=\"button\">Cancel</a>\
         <button type=\"submit\" class=\"primary\">Save</button></div>",
        title = escape(&form.title),
        description = escape(&form.description),
        markdown = escape(&form.markdown),
        markdown_error = field_error("markdown"),
    ));

    out
}
