//! Reusable question catalog: declared answer types, choice metadata, and the
//! pure mapping from a question to a form-rendering directive.

mod directive;
mod domain;
mod locale;
mod metadata;

#[cfg(test)]
mod tests;

pub use directive::{rendering_directive, FormDirective, WidgetKind};
pub use domain::{
    human_type_name, types_for_select, Answer, Question, QuestionDraft, QuestionType,
    UnknownQuestionType,
};
pub use locale::{humanize, Localizer, NullLocalizer, StaticLocalizer};
pub use metadata::QuestionMetadata;
