use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use super::domain::Position;
use super::draft::PositionDraft;
use super::markdown::{render_descriptions, CommonMarkRenderer, MarkdownRenderer};
use super::ordering::{next_order_position, AggregateMax, PositionQuestion};
use super::repository::{PositionRepository, PositionScope, RepositoryError};
use super::search::{PositionSearch, SearchFilters};
use super::slugs::assign_slug;
use crate::recruiting::questions::{Localizer, NullLocalizer, Question};
use crate::recruiting::validate::ValidationErrors;

/// Service composing validation, slug assignment, markdown rendering, and
/// the question association over a position store.
pub struct PositionService<R> {
    repository: Arc<R>,
    renderer: Arc<dyn MarkdownRenderer>,
    localizer: Arc<dyn Localizer>,
}

impl<R> PositionService<R>
where
    R: PositionRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            renderer: Arc::new(CommonMarkRenderer),
            localizer: Arc::new(NullLocalizer),
        }
    }

    pub fn with_collaborators(
        repository: Arc<R>,
        renderer: Arc<dyn MarkdownRenderer>,
        localizer: Arc<dyn Localizer>,
    ) -> Self {
        Self {
            repository,
            renderer,
            localizer,
        }
    }

    pub fn localizer(&self) -> &dyn Localizer {
        &*self.localizer
    }

    /// Validate, assign the slug (once, at creation), render the markdown
    /// descriptions, and store.
    pub fn create(
        &self,
        draft: PositionDraft,
        now: DateTime<Utc>,
    ) -> Result<Position, PositionServiceError> {
        draft.validate(now)?;

        let slug = assign_slug(&*self.repository, &draft.title)?;
        let mut position = draft.into_position(slug);
        render_descriptions(&*self.renderer, &mut position);

        let stored = self.repository.insert(position)?;
        info!(slug = %stored.slug, "position created");
        Ok(stored)
    }

    /// Re-validate and re-render an existing position. The slug and the
    /// question association survive the edit untouched.
    pub fn update(
        &self,
        slug: &str,
        draft: PositionDraft,
        now: DateTime<Utc>,
    ) -> Result<Position, PositionServiceError> {
        let existing = self
            .repository
            .fetch(slug)?
            .ok_or(RepositoryError::NotFound)?;

        draft.validate(now)?;

        let mut position = draft.into_position(existing.slug);
        position.questions = existing.questions;
        render_descriptions(&*self.renderer, &mut position);

        self.repository.update(position.clone())?;
        Ok(position)
    }

    pub fn fetch(&self, slug: &str) -> Result<Position, PositionServiceError> {
        let position = self
            .repository
            .fetch(slug)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(position)
    }

    /// Attach a question at the next order position, resolved through the
    /// repository's aggregate maximum (the association is not re-loaded).
    pub fn attach_question(
        &self,
        slug: &str,
        question: Question,
    ) -> Result<PositionQuestion, PositionServiceError> {
        let order_position = next_order_position(&AggregateMax {
            repository: &*self.repository,
            slug,
        })?;

        let row = PositionQuestion {
            question,
            order_position,
        };
        self.repository.attach_question(slug, row.clone())?;
        Ok(row)
    }

    pub fn scoped(
        &self,
        scope: PositionScope,
        now: DateTime<Utc>,
    ) -> Result<Vec<Position>, PositionServiceError> {
        Ok(self.repository.scoped(scope, now)?)
    }

    /// Search over the viewable scope.
    pub fn search(
        &self,
        filters: SearchFilters,
        now: DateTime<Utc>,
    ) -> Result<Vec<Position>, PositionServiceError> {
        let viewable = self.repository.scoped(PositionScope::Viewable, now)?;
        Ok(PositionSearch::new(filters).filter(viewable))
    }
}

/// Error raised by the position service.
#[derive(Debug, thiserror::Error)]
pub enum PositionServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
