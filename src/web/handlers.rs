//! HTTP request handlers

use super::state::AppState;
use crate::providers::ProviderId;
use crate::results::ImageRecord;
use crate::search::SearchOutcome;
use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use serde::{Deserialize, Serialize};

/// Shown when the request itself could not be handled
const UNEXPECTED_ERROR_MESSAGE: &str = "Something went wrong!";

/// Fields posted by the search form
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchForm {
    pub name: String,
    pub email: String,
    pub search_term: String,
    pub api_service: String,
}

/// Provider option in the form's select box
#[derive(Debug, Serialize)]
pub struct ServiceOption {
    pub id: &'static str,
    pub label: &'static str,
}

/// Context for `index.html`
#[derive(Debug, Serialize)]
pub struct IndexPage {
    pub api_services: Vec<ServiceOption>,
    pub images: Vec<ImageRecord>,
    pub error: Option<String>,
    pub name: String,
    pub email: String,
    pub search_term: String,
    pub api_service: String,
}

impl IndexPage {
    /// Empty form with `default_provider` selected
    pub fn empty(state: &AppState) -> Self {
        Self::from_form(
            state,
            SearchForm {
                api_service: state.default_provider().to_string(),
                ..Default::default()
            },
            SearchOutcome::default(),
        )
    }

    /// Echo the submitted form alongside the search outcome
    pub fn from_form(state: &AppState, form: SearchForm, outcome: SearchOutcome) -> Self {
        Self {
            api_services: state
                .registry
                .iter()
                .map(|d| ServiceOption {
                    id: d.id.as_str(),
                    label: d.id.label(),
                })
                .collect(),
            images: outcome.images,
            error: outcome.error,
            name: form.name,
            email: form.email,
            search_term: form.search_term,
            api_service: form.api_service,
        }
    }
}

fn render_page(state: &AppState, status: StatusCode, page: &IndexPage) -> Response {
    match state.templates.render("index.html", page) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Template error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
        }
    }
}

/// Home page handler
pub async fn index(State(state): State<AppState>) -> Response {
    render_page(&state, StatusCode::OK, &IndexPage::empty(&state))
}

/// Search handler
pub async fn search(
    State(state): State<AppState>,
    form: Result<Form<SearchForm>, FormRejection>,
) -> Response {
    let Form(form) = match form {
        Ok(form) => form,
        Err(e) => {
            tracing::error!("Rejected search form: {}", e);
            let mut page = IndexPage::empty(&state);
            page.error = Some(UNEXPECTED_ERROR_MESSAGE.to_string());
            return render_page(&state, StatusCode::INTERNAL_SERVER_ERROR, &page);
        }
    };

    let outcome = state.search.run(&form.search_term, &form.api_service).await;
    let page = IndexPage::from_form(&state, form, outcome);

    render_page(&state, StatusCode::OK, &page)
}

/// Health check handler
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let missing: Vec<ProviderId> = state.registry.missing_credentials();

    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION,
        "missing_credentials": missing,
    }))
}
