use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ordering::PositionQuestion;
use crate::recruiting::questions::{humanize, Localizer};

const STATUS_SCOPE: &str = "ui.position_status";

/// The team that owns a position; the slug feeds admin links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub slug: String,
}

/// Derived visibility state. Never stored; recomputed from the two window
/// timestamps on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionStatus {
    Draft,
    Published,
    Expired,
}

impl PositionStatus {
    pub const fn code(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Expired => "expired",
        }
    }
}

/// An opening with descriptions, a visibility window, and an ordered list of
/// attached questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub title: String,
    pub slug: String,
    pub team: Team,
    pub short_description: String,
    pub duration: String,
    pub time_commitment: Option<String>,
    pub paid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_description: Option<String>,
    pub general_description: String,
    pub position_description: String,
    pub applicant_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rendered_paid_description: Option<String>,
    #[serde(default)]
    pub rendered_general_description: String,
    #[serde(default)]
    pub rendered_position_description: String,
    #[serde(default)]
    pub rendered_applicant_description: String,
    #[serde(default)]
    pub contact_emails: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub questions: Vec<PositionQuestion>,
}

impl Position {
    pub fn is_published(&self, now: DateTime<Utc>) -> bool {
        self.published_at.is_some_and(|at| at <= now)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }

    /// Published and not yet expired, i.e. currently visible to applicants.
    pub fn is_viewable(&self, now: DateTime<Utc>) -> bool {
        self.is_published(now) && !self.is_expired(now)
    }

    pub fn status(&self, now: DateTime<Utc>) -> PositionStatus {
        if !self.is_published(now) {
            PositionStatus::Draft
        } else if self.is_expired(now) {
            PositionStatus::Expired
        } else {
            PositionStatus::Published
        }
    }

    pub fn human_status(&self, localizer: &dyn Localizer, now: DateTime<Utc>) -> String {
        let code = self.status(now).code();
        localizer
            .translate(STATUS_SCOPE, code)
            .unwrap_or_else(|| humanize(code))
    }

    /// "1_hour" reads as "1 hour"; an unset commitment reads as nothing.
    pub fn human_time_commitment(&self) -> String {
        self.time_commitment
            .as_deref()
            .map(humanize)
            .unwrap_or_default()
    }

    /// Attached questions sorted by their explicit order position.
    pub fn ordered_questions(&self) -> Vec<&PositionQuestion> {
        let mut rows: Vec<&PositionQuestion> = self.questions.iter().collect();
        rows.sort_by_key(|row| row.order_position);
        rows
    }

    /// Next order value computed from the rows already in memory, without
    /// touching the repository.
    pub fn next_order_position(&self) -> i32 {
        self.questions
            .iter()
            .map(|row| row.order_position)
            .max()
            .unwrap_or(0)
            + 1
    }
}
