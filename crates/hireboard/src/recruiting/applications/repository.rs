use super::domain::{ApplicationId, PositionApplication};
use crate::recruiting::positions::RepositoryError;

/// Storage abstraction over submitted applications.
pub trait ApplicationRepository: Send + Sync {
    fn insert(
        &self,
        application: PositionApplication,
    ) -> Result<PositionApplication, RepositoryError>;
    fn fetch(&self, id: &ApplicationId) -> Result<Option<PositionApplication>, RepositoryError>;
    /// Applications for a position, oldest first.
    fn for_position(&self, slug: &str) -> Result<Vec<PositionApplication>, RepositoryError>;
}
