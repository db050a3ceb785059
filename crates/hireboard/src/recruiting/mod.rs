//! Recruitment domain: the question catalog, published positions, and
//! applicant submissions.

pub mod applications;
pub mod positions;
pub mod questions;
pub mod validate;

pub use positions::{Position, PositionScope, PositionStatus, RepositoryError};
pub use questions::{Question, QuestionMetadata, QuestionType};
pub use validate::{FieldError, ValidationErrors};
