use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use super::domain::ApplicationSubmission;
use super::notifier::MailTransport;
use super::repository::ApplicationRepository;
use super::service::{ApplicationService, ApplicationServiceError};
use crate::recruiting::positions::{PositionRepository, RepositoryError};

/// Router builder exposing application intake and the CSV report.
pub fn application_router<P, A, M>(service: Arc<ApplicationService<P, A, M>>) -> Router
where
    P: PositionRepository + 'static,
    A: ApplicationRepository + 'static,
    M: MailTransport + 'static,
{
    Router::new()
        .route(
            "/api/v1/positions/:slug/applications",
            post(submit_handler::<P, A, M>),
        )
        .route(
            "/api/v1/positions/:slug/applications/report",
            get(report_handler::<P, A, M>),
        )
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ReportParams {
    /// Comma-separated applicant columns; question columns always follow.
    #[serde(default)]
    fields: Option<String>,
}

pub(crate) async fn submit_handler<P, A, M>(
    State(service): State<Arc<ApplicationService<P, A, M>>>,
    Path(slug): Path<String>,
    axum::Json(submission): axum::Json<ApplicationSubmission>,
) -> Response
where
    P: PositionRepository + 'static,
    A: ApplicationRepository + 'static,
    M: MailTransport + 'static,
{
    match service.submit(&slug, submission, Utc::now()) {
        Ok(application) => {
            let view = application.status_view();
            (StatusCode::CREATED, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn report_handler<P, A, M>(
    State(service): State<Arc<ApplicationService<P, A, M>>>,
    Path(slug): Path<String>,
    Query(params): Query<ReportParams>,
) -> Response
where
    P: PositionRepository + 'static,
    A: ApplicationRepository + 'static,
    M: MailTransport + 'static,
{
    let fields = params.fields.map(|raw| {
        raw.split(',')
            .map(str::trim)
            .filter(|field| !field.is_empty())
            .map(str::to_string)
            .collect::<Vec<String>>()
    });

    match service.report_csv(&slug, fields) {
        Ok(csv) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, mime::TEXT_CSV_UTF_8.as_ref())],
            csv,
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: ApplicationServiceError) -> Response {
    match error {
        ApplicationServiceError::Validation(errors) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            axum::Json(json!({ "errors": errors.errors() })),
        )
            .into_response(),
        ApplicationServiceError::Closed(slug) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            axum::Json(json!({
                "error": format!("position {slug} is not accepting applications"),
            })),
        )
            .into_response(),
        ApplicationServiceError::Repository(RepositoryError::NotFound) => (
            StatusCode::NOT_FOUND,
            axum::Json(json!({ "error": "position not found" })),
        )
            .into_response(),
        ApplicationServiceError::Repository(RepositoryError::Conflict) => (
            StatusCode::CONFLICT,
            axum::Json(json!({ "error": "application already exists" })),
        )
            .into_response(),
        other => (
            StatusCode::INTERNAL_SERVER_ERROR,
            axum::Json(json!({ "error": other.to_string() })),
        )
            .into_response(),
    }
}
