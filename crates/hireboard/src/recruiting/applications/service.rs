use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use super::domain::{ApplicationId, ApplicationSubmission, PositionApplication};
use super::notifier::{ApplicationNotifier, MailError, MailTransport};
use super::reporter::{ApplicationReporter, ReportError};
use super::repository::ApplicationRepository;
use crate::config::MailerConfig;
use crate::recruiting::positions::{Position, PositionRepository, RepositoryError};
use crate::recruiting::validate::ValidationErrors;

/// Service composing intake validation, storage, and the receipt notice.
pub struct ApplicationService<P, A, M> {
    positions: Arc<P>,
    applications: Arc<A>,
    transport: Arc<M>,
    notifier: ApplicationNotifier,
}

static APPLICATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_application_id() -> ApplicationId {
    let id = APPLICATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ApplicationId(format!("app-{id:06}"))
}

impl<P, A, M> ApplicationService<P, A, M>
where
    P: PositionRepository + 'static,
    A: ApplicationRepository + 'static,
    M: MailTransport + 'static,
{
    pub fn new(
        positions: Arc<P>,
        applications: Arc<A>,
        transport: Arc<M>,
        mailer: MailerConfig,
    ) -> Self {
        Self {
            positions,
            applications,
            transport,
            notifier: ApplicationNotifier::new(mailer),
        }
    }

    /// Submit an application against a viewable position. The application is
    /// stored before the notice goes out, so a transport failure surfaces as
    /// an error without losing the submission.
    pub fn submit(
        &self,
        slug: &str,
        submission: ApplicationSubmission,
        now: DateTime<Utc>,
    ) -> Result<PositionApplication, ApplicationServiceError> {
        let position = self
            .positions
            .fetch(slug)?
            .ok_or(RepositoryError::NotFound)?;

        if !position.is_viewable(now) {
            return Err(ApplicationServiceError::Closed(slug.to_string()));
        }

        validate_submission(&position, &submission)?;

        let application = PositionApplication {
            id: next_application_id(),
            position_slug: slug.to_string(),
            applicant_name: submission.applicant_name,
            applicant_email: submission.applicant_email,
            answers: submission.answers,
            submitted_at: now,
        };

        let stored = self.applications.insert(application)?;
        info!(position = %slug, application = %stored.id.0, "application received");

        let message = self.notifier.application_received(&position, &stored);
        self.transport.deliver(message)?;

        Ok(stored)
    }

    pub fn get(
        &self,
        id: &ApplicationId,
    ) -> Result<PositionApplication, ApplicationServiceError> {
        let application = self
            .applications
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(application)
    }

    /// CSV export of a position's applications; `fields` narrows the
    /// applicant columns when given.
    pub fn report_csv(
        &self,
        slug: &str,
        fields: Option<Vec<String>>,
    ) -> Result<String, ApplicationServiceError> {
        let position = self
            .positions
            .fetch(slug)?
            .ok_or(RepositoryError::NotFound)?;
        let applications = self.applications.for_position(slug)?;

        let reporter = match fields {
            Some(fields) => ApplicationReporter::with_fields(&position, fields),
            None => ApplicationReporter::new(&position),
        };
        Ok(reporter.to_csv(&applications)?)
    }
}

/// Required answers must be present and non-blank. Presence of the applicant
/// identity fields is checked alongside.
fn validate_submission(
    position: &Position,
    submission: &ApplicationSubmission,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    errors.require("applicant_name", &submission.applicant_name);
    errors.require("applicant_email", &submission.applicant_email);

    for row in position.ordered_questions() {
        let answer = submission
            .answers
            .iter()
            .find(|answer| answer.short_name == row.question.short_name);

        let required = answer
            .map(|input| input.answer().effective_required(&row.question))
            .unwrap_or(row.question.required_by_default);

        let blank = answer
            .and_then(|input| input.value.as_deref())
            .map_or(true, |value| value.trim().is_empty());

        if required && blank {
            errors.add(
                format!("answers.{}", row.question.short_name),
                "can't be blank",
            );
        }
    }

    errors.finish()
}

/// Error raised by the application service.
#[derive(Debug, thiserror::Error)]
pub enum ApplicationServiceError {
    #[error("position {0} is not accepting applications")]
    Closed(String),
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Mail(#[from] MailError),
    #[error(transparent)]
    Report(#[from] ReportError),
}
