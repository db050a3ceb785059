//! Published openings: visibility windows, markdown descriptions, slugs, and
//! the ordered question association.

mod domain;
mod draft;
mod markdown;
mod ordering;
mod repository;
pub mod router;
mod search;
mod service;
mod slugs;

#[cfg(test)]
mod tests;

pub use domain::{Position, PositionStatus, Team};
pub use draft::PositionDraft;
pub use markdown::{CommonMarkRenderer, MarkdownRenderer};
pub use ordering::{
    next_order_position, AggregateMax, MaterializedOrders, OrderPositionSource, PositionQuestion,
};
pub use repository::{PositionRepository, PositionScope, RepositoryError};
pub use router::position_router;
pub use search::{PositionSearch, SearchFilters};
pub use service::{PositionService, PositionServiceError};
pub use slugs::assign_slug;
