use chrono::{DateTime, Utc};
use hireboard::recruiting::applications::{
    ApplicationId, ApplicationRepository, MailError, MailMessage, MailTransport,
    PositionApplication,
};
use hireboard::recruiting::positions::{
    Position, PositionQuestion, PositionRepository, PositionScope, RepositoryError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default)]
pub(crate) struct InMemoryPositionRepository {
    records: Mutex<Vec<Position>>,
}

impl PositionRepository for InMemoryPositionRepository {
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
        match guard
            .iter_mut()
            .find(|existing| existing.slug == position.slug)
        {
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

    fn attach_question(&self, slug: &str, row: PositionQuestion) -> Result<(), RepositoryError> {
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
pub(crate) struct InMemoryApplicationRepository {
    records: Mutex<Vec<PositionApplication>>,
}

impl ApplicationRepository for InMemoryApplicationRepository {
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

    fn fetch(&self, id: &ApplicationId) -> Result<Option<PositionApplication>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .find(|application| &application.id == id)
            .cloned())
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

/// Stores outbound mail in memory and logs each delivery. Stands in for the
/// real transport until an SMTP adapter is wired up.
#[derive(Default)]
pub(crate) struct InMemoryMailTransport {
    deliveries: Mutex<Vec<MailMessage>>,
}

impl MailTransport for InMemoryMailTransport {
    fn deliver(&self, message: MailMessage) -> Result<(), MailError> {
        info!(
            to = ?message.to,
            subject = %message.subject,
            "outbound notification mail"
        );
        self.deliveries
            .lock()
            .expect("mail mutex poisoned")
            .push(message);
        Ok(())
    }
}

impl InMemoryMailTransport {
    pub(crate) fn deliveries(&self) -> Vec<MailMessage> {
        self.deliveries.lock().expect("mail mutex poisoned").clone()
    }
}
