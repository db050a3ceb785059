//! Applicant submissions: intake validation, receipt notification, and CSV
//! reporting.

mod domain;
mod notifier;
mod reporter;
mod repository;
pub mod router;
mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AnswerInput, ApplicationId, ApplicationStatusView, ApplicationSubmission, PositionApplication,
};
pub use notifier::{
    ApplicationNotifier, MailError, MailMessage, MailTransport, APPLICATION_RECEIVED_SUBJECT,
};
pub use reporter::{ApplicationReporter, ReportError};
pub use repository::ApplicationRepository;
pub use router::application_router;
pub use service::{ApplicationService, ApplicationServiceError};
