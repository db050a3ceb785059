use serde::Serialize;

use super::domain::{Answer, Question, QuestionType};

/// Form widget selected for a question type. `Scale` has no mapping; the
/// directive carries no widget and the rendering layer applies its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    DatetimePicker,
    StringField,
    TextArea,
    RadioGroup,
    CheckboxGroup,
    Dropdown,
}

impl WidgetKind {
    const fn offers_choices(self) -> bool {
        matches!(
            self,
            Self::RadioGroup | Self::CheckboxGroup | Self::Dropdown
        )
    }
}

impl QuestionType {
    pub const fn widget(self) -> Option<WidgetKind> {
        match self {
            Self::DateTime => Some(WidgetKind::DatetimePicker),
            Self::ShortText => Some(WidgetKind::StringField),
            Self::Text => Some(WidgetKind::TextArea),
            Self::MultipleChoice => Some(WidgetKind::RadioGroup),
            Self::CheckBoxes => Some(WidgetKind::CheckboxGroup),
            Self::Select => Some(WidgetKind::Dropdown),
            Self::Scale => None,
        }
    }
}

/// Pure description of how a question should be presented as a form field,
/// consumed by an external rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormDirective {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub widget: Option<WidgetKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<String>>,
    pub required: bool,
}

/// Map a question and its answer to a rendering directive. Pure function of
/// its inputs; choices are included only for choice-style widgets.
pub fn rendering_directive(question: &Question, answer: &Answer) -> FormDirective {
    let widget = question.question_type.widget();

    let choices = match widget {
        Some(kind) if kind.offers_choices() => Some(question.metadata.choices()),
        _ => None,
    };

    let hint = question
        .hint
        .as_deref()
        .filter(|hint| !hint.trim().is_empty())
        .map(str::to_string);

    FormDirective {
        label: question.question.clone(),
        widget,
        hint,
        choices,
        required: answer.effective_required(question),
    }
}
