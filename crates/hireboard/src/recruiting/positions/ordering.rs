use serde::{Deserialize, Serialize};

use super::repository::{PositionRepository, RepositoryError};
use crate::recruiting::questions::Question;

/// Join row associating a question with a position. `order_position` is
/// unique per position in practice, assigned sequentially from 1, but
/// contiguity is not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionQuestion {
    pub question: Question,
    pub order_position: i32,
}

/// Single seam over "which order values exist right now". One backend reads
/// rows already materialized in memory, the other issues the repository's
/// aggregate maximum query; the core computation is the same either way.
pub trait OrderPositionSource {
    fn order_positions(&self) -> Result<Vec<i32>, RepositoryError>;
}

/// Backend over association rows already loaded in memory. Never queries.
pub struct MaterializedOrders<'a>(pub &'a [PositionQuestion]);

impl OrderPositionSource for MaterializedOrders<'_> {
    fn order_positions(&self) -> Result<Vec<i32>, RepositoryError> {
        Ok(self.0.iter().map(|row| row.order_position).collect())
    }
}

/// Backend over the repository's aggregate maximum. The single max value is
/// all the computation needs, so that is all this backend surfaces.
pub struct AggregateMax<'a, R: PositionRepository + ?Sized> {
    pub repository: &'a R,
    pub slug: &'a str,
}

impl<R: PositionRepository + ?Sized> OrderPositionSource for AggregateMax<'_, R> {
    fn order_positions(&self) -> Result<Vec<i32>, RepositoryError> {
        Ok(self
            .repository
            .max_order_position(self.slug)?
            .into_iter()
            .collect())
    }
}

/// `max(existing ∪ {0}) + 1`: 1 for the first question, max + 1 afterwards.
/// Uniqueness holds only while callers serialize attachment per position;
/// concurrent attachers can race to the same value.
pub fn next_order_position(source: &dyn OrderPositionSource) -> Result<i32, RepositoryError> {
    let max = source.order_positions()?.into_iter().max().unwrap_or(0);
    Ok(max + 1)
}
