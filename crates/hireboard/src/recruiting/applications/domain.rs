use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::recruiting::questions::Answer;

/// Identifier wrapper for submitted applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

/// A submitted answer, keyed by the question's short name. The optional
/// `required` override feeds the directive mapper and the intake gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerInput {
    pub short_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

impl AnswerInput {
    pub fn answer(&self) -> Answer {
        Answer {
            value: self.value.clone(),
            required: self.required,
        }
    }
}

/// Applicant-provided payload for a position's application form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationSubmission {
    pub applicant_name: String,
    pub applicant_email: String,
    #[serde(default)]
    pub answers: Vec<AnswerInput>,
}

/// A stored application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionApplication {
    pub id: ApplicationId,
    pub position_slug: String,
    pub applicant_name: String,
    pub applicant_email: String,
    pub answers: Vec<AnswerInput>,
    pub submitted_at: DateTime<Utc>,
}

impl PositionApplication {
    pub fn status_view(&self) -> ApplicationStatusView {
        ApplicationStatusView {
            application_id: self.id.clone(),
            position: self.position_slug.clone(),
            submitted_at: self.submitted_at,
        }
    }
}

/// Sanitized representation returned from the submit endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationStatusView {
    pub application_id: ApplicationId,
    pub position: String,
    pub submitted_at: DateTime<Utc>,
}
