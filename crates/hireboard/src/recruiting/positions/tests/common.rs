use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};

use crate::recruiting::positions::{
    Position, PositionDraft, PositionQuestion, PositionRepository, PositionScope,
    PositionService, RepositoryError, Team,
};
use crate::recruiting::questions::{Question, QuestionMetadata, QuestionType};

pub(super) fn now() -> DateTime<Utc> {
    "2026-08-08T12:00:00Z".parse().expect("valid instant")
}

pub(super) fn weeks(count: i64) -> Duration {
    Duration::weeks(count)
}

pub(super) fn team() -> Team {
    Team {
        name: "Community".to_string(),
        slug: "community".to_string(),
    }
}

pub(super) fn draft(title: &str) -> PositionDraft {
    PositionDraft {
        title: title.to_string(),
        team: Some(team()),
        short_description: "Keep the wheels turning.".to_string(),
        duration: "3 months".to_string(),
        time_commitment: Some("1_hour".to_string()),
        paid: false,
        paid_description: None,
        general_description: "# About us".to_string(),
        position_description: "# The role".to_string(),
        applicant_description: "# You".to_string(),
        contact_emails: Vec::new(),
        published_at: None,
        expires_at: None,
    }
}

pub(super) fn published_draft(title: &str) -> PositionDraft {
    PositionDraft {
        contact_emails: vec!["team@example.org".to_string()],
        published_at: Some(now() - weeks(1)),
        expires_at: Some(now() + weeks(1)),
        ..draft(title)
    }
}

/// Direct construction for window/scope assertions, skipping the service.
pub(super) fn position(
    slug: &str,
    published_at: Option<DateTime<Utc>>,
    expires_at: Option<DateTime<Utc>>,
) -> Position {
    Position {
        title: slug.to_string(),
        slug: slug.to_string(),
        team: team(),
        short_description: "Short.".to_string(),
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
        contact_emails: vec!["team@example.org".to_string()],
        published_at,
        expires_at,
        questions: Vec::new(),
    }
}

pub(super) fn question(short_name: &str) -> Question {
    Question {
        question: format!("Tell us about {short_name}"),
        short_name: short_name.to_string(),
        question_type: QuestionType::Text,
        hint: None,
        default_value: None,
        required_by_default: false,
        metadata: QuestionMetadata::Absent,
    }
}

pub(super) fn build_service() -> (
    PositionService<MemoryPositionRepository>,
    Arc<MemoryPositionRepository>,
) {
    let repository = Arc::new(MemoryPositionRepository::default());
    let service = PositionService::new(repository.clone());
    (service, repository)
}

#[derive(Default)]
pub(super) struct MemoryPositionRepository {
    records: Mutex<Vec<Position>>,
    pub(super) max_queries: Mutex<u32>,
}

impl PositionRepository for MemoryPositionRepository {
    fn insert(&self, position: Position) -> Result<Position, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard
            .iter()
            .any(|existing| existing.slug.eq_ignore_ascii_case(&position.slug))
        {
            return Err(RepositoryError::Conflict);
        }
        guard.push(position.clone());
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
        *self.max_queries.lock().expect("counter mutex poisoned") += 1;
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
