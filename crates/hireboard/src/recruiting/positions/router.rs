use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use chrono::Utc;
use serde::Serialize;
use serde_json::json;

use super::domain::Position;
use super::repository::{PositionRepository, RepositoryError};
use super::search::SearchFilters;
use super::service::{PositionService, PositionServiceError};
use crate::recruiting::questions::{rendering_directive, Answer, FormDirective};

/// Router exposing the applicant-facing position listing and detail.
pub fn position_router<R>(service: Arc<PositionService<R>>) -> Router
where
    R: PositionRepository + 'static,
{
    Router::new()
        .route("/api/v1/positions", get(list_handler::<R>))
        .route("/api/v1/positions/:slug", get(detail_handler::<R>))
        .with_state(service)
}

/// Listing row for the index endpoint.
#[derive(Debug, Serialize)]
pub struct PositionSummaryView {
    pub title: String,
    pub slug: String,
    pub team: String,
    pub short_description: String,
    pub paid: bool,
    pub human_time_commitment: String,
    pub status: &'static str,
}

/// Detail payload: rendered descriptions plus one form directive per
/// attached question, in order.
#[derive(Debug, Serialize)]
pub struct PositionDetailView {
    pub title: String,
    pub slug: String,
    pub team: String,
    pub short_description: String,
    pub duration: String,
    pub human_time_commitment: String,
    pub paid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rendered_paid_description: Option<String>,
    pub rendered_general_description: String,
    pub rendered_position_description: String,
    pub rendered_applicant_description: String,
    pub status: &'static str,
    pub human_status: String,
    pub questions: Vec<QuestionFieldView>,
}

#[derive(Debug, Serialize)]
pub struct QuestionFieldView {
    pub short_name: String,
    pub order_position: i32,
    pub directive: FormDirective,
}

impl PositionSummaryView {
    fn from_position(position: &Position, now: chrono::DateTime<Utc>) -> Self {
        Self {
            title: position.title.clone(),
            slug: position.slug.clone(),
            team: position.team.name.clone(),
            short_description: position.short_description.clone(),
            paid: position.paid,
            human_time_commitment: position.human_time_commitment(),
            status: position.status(now).code(),
        }
    }
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<PositionService<R>>>,
    Query(filters): Query<SearchFilters>,
) -> Response
where
    R: PositionRepository + 'static,
{
    let now = Utc::now();
    match service.search(filters, now) {
        Ok(positions) => {
            let views: Vec<PositionSummaryView> = positions
                .iter()
                .map(|position| PositionSummaryView::from_position(position, now))
                .collect();
            (StatusCode::OK, axum::Json(views)).into_response()
        }
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn detail_handler<R>(
    State(service): State<Arc<PositionService<R>>>,
    Path(slug): Path<String>,
) -> Response
where
    R: PositionRepository + 'static,
{
    let now = Utc::now();
    match service.fetch(&slug) {
        Ok(position) => {
            let questions = position
                .ordered_questions()
                .into_iter()
                .map(|row| QuestionFieldView {
                    short_name: row.question.short_name.clone(),
                    order_position: row.order_position,
                    directive: rendering_directive(&row.question, &Answer::blank()),
                })
                .collect();

            let view = PositionDetailView {
                title: position.title.clone(),
                slug: position.slug.clone(),
                team: position.team.name.clone(),
                short_description: position.short_description.clone(),
                duration: position.duration.clone(),
                human_time_commitment: position.human_time_commitment(),
                paid: position.paid,
                rendered_paid_description: position.rendered_paid_description.clone(),
                rendered_general_description: position.rendered_general_description.clone(),
                rendered_position_description: position.rendered_position_description.clone(),
                rendered_applicant_description: position.rendered_applicant_description.clone(),
                status: position.status(now).code(),
                human_status: position.human_status(service.localizer(), now),
                questions,
            };
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error) => service_error_response(error),
    }
}

fn service_error_response(error: PositionServiceError) -> Response {
    match error {
        PositionServiceError::Validation(errors) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            axum::Json(json!({ "errors": errors.errors() })),
        )
            .into_response(),
        PositionServiceError::Repository(RepositoryError::NotFound) => (
            StatusCode::NOT_FOUND,
            axum::Json(json!({ "error": "position not found" })),
        )
            .into_response(),
        PositionServiceError::Repository(RepositoryError::Conflict) => (
            StatusCode::CONFLICT,
            axum::Json(json!({ "error": "position already exists" })),
        )
            .into_response(),
        other => (
            StatusCode::INTERNAL_SERVER_ERROR,
            axum::Json(json!({ "error": other.to_string() })),
        )
            .into_response(),
    }
}
