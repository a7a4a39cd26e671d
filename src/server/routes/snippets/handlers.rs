use super::extract::SnippetId;
use super::form::CreateSnippetForm;
use crate::error::{SnippetboxError, status_text};
use crate::server::router::SnippetboxState;
use crate::server::views;
use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use tracing::{debug, info};

/// # GET /
/// Lists the latest live snippets.
pub async fn home(State(state): State<SnippetboxState>) -> Result<Html<String>, SnippetboxError> {
    let snippets = state.snippets.latest().await?;
    Ok(Html(views::home(&snippets).into_string()))
}

/// # GET /snippet/view?id=<n>
pub async fn snippet_view(
    State(state): State<SnippetboxState>,
    SnippetId(id): SnippetId,
) -> Result<Html<String>, SnippetboxError> {
    let snippet = state.snippets.get(id).await?;
    Ok(Html(views::view(&snippet).into_string()))
}

/// # GET /snippet/create
pub async fn snippet_create_form() -> Html<String> {
    Html(views::create(&CreateSnippetForm::blank(), &Default::default()).into_string())
}

/// # POST /snippet/create
/// Validates the form, inserts the snippet and redirects to its view page.
pub async fn snippet_create(
    State(state): State<SnippetboxState>,
    form: Result<Form<CreateSnippetForm>, FormRejection>,
) -> Result<Response, SnippetboxError> {
    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => {
            debug!(error = %rejection, "[Snippets] unreadable create form");
            return Ok(status_text(StatusCode::BAD_REQUEST).into_response());
        }
    };

    let new_snippet = match form.validate() {
        Ok(new_snippet) => new_snippet,
        Err(errors) => {
            debug!(invalid_fields = errors.len(), "[Snippets] create form rejected");
            let page = views::create(&form, &errors).into_string();
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response());
        }
    };

    let expires_in_days = new_snippet.expires_in_days;
    let id = state.snippets.insert(new_snippet).await?;
    info!(id, expires_in_days, "[Snippets] snippet created");

    Ok(Redirect::to(&format!("/snippet/view?id={id}")).into_response())
}
