use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::locale::{humanize, Localizer};
use super::metadata::QuestionMetadata;
use crate::recruiting::validate::ValidationErrors;

const TYPE_SCOPE: &str = "ui.question_types";

/// The declared answer type of a question. Declaration order is the order
/// offered to administrators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    DateTime,
    ShortText,
    Text,
    MultipleChoice,
    CheckBoxes,
    Select,
    Scale,
}

impl QuestionType {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::DateTime,
            Self::ShortText,
            Self::Text,
            Self::MultipleChoice,
            Self::CheckBoxes,
            Self::Select,
            Self::Scale,
        ]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::DateTime => "date_time",
            Self::ShortText => "short_text",
            Self::Text => "text",
            Self::MultipleChoice => "multiple_choice",
            Self::CheckBoxes => "check_boxes",
            Self::Select => "select",
            Self::Scale => "scale",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a valid question type")]
pub struct UnknownQuestionType(pub String);

impl FromStr for QuestionType {
    type Err = UnknownQuestionType;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        QuestionType::ordered()
            .into_iter()
            .find(|kind| kind.code() == raw)
            .ok_or_else(|| UnknownQuestionType(raw.to_string()))
    }
}

/// Localized label for a type, falling back to the humanized code.
pub fn human_type_name(localizer: &dyn Localizer, kind: QuestionType) -> String {
    localizer
        .translate(TYPE_SCOPE, kind.code())
        .unwrap_or_else(|| humanize(kind.code()))
}

/// `(label, code)` pairs for a type picker, in declaration order.
pub fn types_for_select(localizer: &dyn Localizer) -> Vec<(String, QuestionType)> {
    QuestionType::ordered()
        .into_iter()
        .map(|kind| (human_type_name(localizer, kind), kind))
        .collect()
}

/// A reusable prompt definition. Positions reference questions through an
/// ordered association; the question itself carries no ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    pub short_name: String,
    pub question_type: QuestionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default)]
    pub required_by_default: bool,
    #[serde(default)]
    pub metadata: QuestionMetadata,
}

impl Question {
    pub fn is_type(&self, kind: QuestionType) -> bool {
        self.question_type == kind
    }

    pub fn human_question_type(&self, localizer: &dyn Localizer) -> String {
        human_type_name(localizer, self.question_type)
    }
}

/// Administrator-editable form of a question: the type arrives as a code
/// string and the metadata as the newline-joined editable view.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionDraft {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub question_type: String,
    #[serde(default)]
    pub hint: Option<String>,
    #[serde(default)]
    pub default_value: Option<String>,
    #[serde(default)]
    pub required_by_default: bool,
    #[serde(default)]
    pub editable_metadata: String,
}

impl QuestionDraft {
    /// Validate the draft into a catalog entry. Failures are field-level and
    /// collected; an unknown type code is reported alongside any missing
    /// fields rather than short-circuiting.
    pub fn validate(self) -> Result<Question, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("question", &self.question);
        errors.require("short_name", &self.short_name);

        let question_type = if self.question_type.trim().is_empty() {
            errors.add("question_type", "can't be blank");
            None
        } else {
            match self.question_type.parse::<QuestionType>() {
                Ok(kind) => Some(kind),
                Err(_) => {
                    errors.add("question_type", "is not included in the list");
                    None
                }
            }
        };

        errors.finish()?;

        Ok(Question {
            question: self.question,
            short_name: self.short_name,
            // finish() returned above unless the parse succeeded
            question_type: question_type.expect("validated question type"),
            hint: self.hint,
            default_value: self.default_value,
            required_by_default: self.required_by_default,
            metadata: QuestionMetadata::from_editable(&self.editable_metadata),
        })
    }
}

/// Answer surface consumed by the directive mapper: the submitted value plus
/// the optional per-answer required override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

impl Answer {
    pub fn blank() -> Self {
        Self::default()
    }

    /// The override when present, the question's default otherwise.
    pub fn effective_required(&self, question: &Question) -> bool {
        self.required.unwrap_or(question.required_by_default)
    }
}
