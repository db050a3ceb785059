use crate::recruiting::questions::{Question, QuestionMetadata, QuestionType};

pub(super) fn question(question_type: QuestionType) -> Question {
    Question {
        question: "Are you a ninja?".to_string(),
        short_name: "ninja".to_string(),
        question_type,
        hint: None,
        default_value: None,
        required_by_default: false,
        metadata: QuestionMetadata::Absent,
    }
}

pub(super) fn choice_question(question_type: QuestionType, choices: &[&str]) -> Question {
    Question {
        metadata: QuestionMetadata::List(choices.iter().map(|c| c.to_string()).collect()),
        ..question(question_type)
    }
}
