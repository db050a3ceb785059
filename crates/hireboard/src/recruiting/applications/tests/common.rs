use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};

use crate::config::MailerConfig;
use crate::recruiting::applications::{
    AnswerInput, ApplicationId, ApplicationRepository, ApplicationService,
    ApplicationSubmission, MailError, MailMessage, MailTransport, PositionApplication,
};
use crate::recruiting::positions::{
    Position, PositionQuestion, PositionRepository, PositionScope, RepositoryError, Team,
};
use crate::recruiting::questions::{Question, QuestionMetadata, QuestionType};

// The router handlers read the real clock, so the fixture window is pinned
// around it rather than a fixed instant.
pub(super) fn now() -> DateTime<Utc> {
    Utc::now()
}

pub(super) fn mailer_config() -> MailerConfig {
    MailerConfig {
        from: "recruiting@example.org".to_string(),
        base_url: "https://jobs.example.org".to_string(),
    }
}

pub(super) fn question(short_name: &str, required_by_default: bool) -> Question {
    Question {
        question: format!("Tell us about {short_name}"),
        short_name: short_name.to_string(),
        question_type: QuestionType::Text,
        hint: None,
        default_value: None,
        required_by_default,
        metadata: QuestionMetadata::Absent,
    }
}

/// A viewable position with one required and one optional question.
pub(super) fn position() -> Position {
    Position {
        title: "Marketing Monkey".to_string(),
        slug: "marketing-monkey".to_string(),
        team: Team {
            name: "Community".to_string(),
            slug: "community".to_string(),
        },
        short_description: "Spread the word.".to_string(),
        duration: "3 months".to_string(),
        time_commitment: Some("1_hour".to_string()),
        paid: false,
        paid_description: None,
        general_description: "general".to_string(),
        position_description: "position".to_string(),
        applicant_description: "applicant".to_string(),
        rendered_paid_description: None,
        rendered_general_description: String::new(),
        rendered_position_description: String::new(),
        rendered_applicant_description: String::new(),
        contact_emails: vec![
            "hiring@example.org".to_string(),
            "team-lead@example.org".to_string(),
        ],
        published_at: Some(now() - Duration::weeks(1)),
        expires_at: Some(now() + Duration::weeks(1)),
        questions: vec![
            PositionQuestion {
                question: question("experience", true),
                order_position: 1,
            },
            PositionQuestion {
                question: question("referral", false),
                order_position: 2,
            },
        ],
    }
}

pub(super) fn draft_position() -> Position {
    Position {
        slug: "upcoming".to_string(),
        published_at: Some(now() + Duration::weeks(1)),
        expires_at: None,
        ..position()
    }
}

pub(super) fn submission() -> ApplicationSubmission {
    ApplicationSubmission {
        applicant_name: "Robin Applicant".to_string(),
        applicant_email: "robin@example.org".to_string(),
        answers: vec![
            AnswerInput {
                short_name: "experience".to_string(),
                value: Some("Three years of marketing.".to_string()),
                required: None,
            },
            AnswerInput {
                short_name: "referral".to_string(),
                value: None,
                required: None,
            },
        ],
    }
}

pub(super) type MemoryService =
    ApplicationService<MemoryPositionStore, MemoryApplicationStore, MemoryTransport>;

pub(super) fn build_service() -> (
    MemoryService,
    Arc<MemoryPositionStore>,
    Arc<MemoryApplicationStore>,
    Arc<MemoryTransport>,
) {
    let positions = Arc::new(MemoryPositionStore::default());
    positions.seed(position());
    let applications = Arc::new(MemoryApplicationStore::default());
    let transport = Arc::new(MemoryTransport::default());
    let service = ApplicationService::new(
        positions.clone(),
        applications.clone(),
        transport.clone(),
        mailer_config(),
    );
    (service, positions, applications, transport)
}

#[derive(Default)]
pub(super) struct MemoryPositionStore {
    records: Mutex<Vec<Position>>,
}

impl MemoryPositionStore {
    pub(super) fn seed(&self, position: Position) {
        self.records
            .lock()
            .expect("repository mutex poisoned")
            .push(position);
    }
}

impl PositionRepository for MemoryPositionStore {
    fn insert(&self, position: Position) -> Result<Position, RepositoryError> {
        self.seed(position.clone());
        Ok(position)
    }

    fn update(&self, position: Position) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        match guard.iter_mut().find(|existing| existing.slug == position.slug) {
            Some(existing) => {
                *existing = position;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn fetch(&self, slug: &str) -> Result<Option<Position>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().find(|position| position.slug == slug).cloned())
    }

    fn slug_taken(&self, slug: &str) -> Result<bool, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .any(|position| position.slug.eq_ignore_ascii_case(slug)))
    }

    fn scoped(
        &self,
        scope: PositionScope,
        now: DateTime<Utc>,
    ) -> Result<Vec<Position>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .filter(|position| scope.matches(position, now))
            .cloned()
            .collect())
    }

    fn attach_question(
        &self,
        slug: &str,
        row: PositionQuestion,
    ) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let position = guard
            .iter_mut()
            .find(|position| position.slug == slug)
            .ok_or(RepositoryError::NotFound)?;
        position.questions.push(row);
        Ok(())
    }

    fn max_order_position(&self, slug: &str) -> Result<Option<i32>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let position = guard
            .iter()
            .find(|position| position.slug == slug)
            .ok_or(RepositoryError::NotFound)?;
        Ok(position
            .questions
            .iter()
            .map(|row| row.order_position)
            .max())
    }
}

#[derive(Default)]
pub(super) struct MemoryApplicationStore {
    records: Mutex<Vec<PositionApplication>>,
}

impl ApplicationRepository for MemoryApplicationStore {
    fn insert(
        &self,
        application: PositionApplication,
    ) -> Result<PositionApplication, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.iter().any(|existing| existing.id == application.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(application.clone());
        Ok(application)
    }

    fn fetch(
        &self,
        id: &ApplicationId,
    ) -> Result<Option<PositionApplication>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().find(|application| &application.id == id).cloned())
    }

    fn for_position(&self, slug: &str) -> Result<Vec<PositionApplication>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .filter(|application| application.position_slug == slug)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub(super) struct MemoryTransport {
    deliveries: Mutex<Vec<MailMessage>>,
}

impl MemoryTransport {
    pub(super) fn deliveries(&self) -> Vec<MailMessage> {
        self.deliveries.lock().expect("mail mutex poisoned").clone()
    }
}

impl MailTransport for MemoryTransport {
    fn deliver(&self, message: MailMessage) -> Result<(), MailError> {
        self.deliveries
            .lock()
            .expect("mail mutex poisoned")
            .push(message);
        Ok(())
    }
}

pub(super) struct FailingTransport;

impl MailTransport for FailingTransport {
    fn deliver(&self, _message: MailMessage) -> Result<(), MailError> {
        Err(MailError::Transport("smtp offline".to_string()))
    }
}

pub(super) struct UnavailableApplicationStore;

impl ApplicationRepository for UnavailableApplicationStore {
    fn insert(
        &self,
        _application: PositionApplication,
    ) -> Result<PositionApplication, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(
        &self,
        _id: &ApplicationId,
    ) -> Result<Option<PositionApplication>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn for_position(&self, _slug: &str) -> Result<Vec<PositionApplication>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}
