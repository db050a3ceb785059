use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::Position;
use super::ordering::PositionQuestion;

/// Named visibility scopes over the position store, all evaluated against an
/// explicit instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionScope {
    Viewable,
    Published,
    Unpublished,
    Expired,
    Unexpired,
}

impl PositionScope {
    pub fn matches(self, position: &Position, now: DateTime<Utc>) -> bool {
        match self {
            Self::Viewable => position.is_viewable(now),
            Self::Published => position.is_published(now),
            Self::Unpublished => !position.is_published(now),
            Self::Expired => position.is_expired(now),
            Self::Unexpired => !position.is_expired(now),
        }
    }
}

/// Storage abstraction over positions and their question association, so the
/// service modules can be exercised in isolation.
pub trait PositionRepository: Send + Sync {
    fn insert(&self, position: Position) -> Result<Position, RepositoryError>;
    fn update(&self, position: Position) -> Result<(), RepositoryError>;
    fn fetch(&self, slug: &str) -> Result<Option<Position>, RepositoryError>;
    /// Case-insensitive, per the unique slug constraint.
    fn slug_taken(&self, slug: &str) -> Result<bool, RepositoryError>;
    fn scoped(&self, scope: PositionScope, now: DateTime<Utc>)
        -> Result<Vec<Position>, RepositoryError>;
    /// Callers are expected to serialize attachment per position; the store
    /// itself does not guard against racing order assignments.
    fn attach_question(&self, slug: &str, row: PositionQuestion) -> Result<(), RepositoryError>;
    /// Aggregate maximum of `order_position` for a position, `None` when no
    /// questions are attached.
    fn max_order_position(&self, slug: &str) -> Result<Option<i32>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
