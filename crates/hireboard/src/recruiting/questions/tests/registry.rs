use super::common::question;
use crate::recruiting::questions::{
    human_type_name, types_for_select, NullLocalizer, QuestionDraft, QuestionType,
    StaticLocalizer,
};

#[test]
fn ordered_lists_all_seven_types_in_declaration_order() {
    let codes: Vec<&str> = QuestionType::ordered().iter().map(|t| t.code()).collect();
    assert_eq!(
        codes,
        vec![
            "date_time",
            "short_text",
            "text",
            "multiple_choice",
            "check_boxes",
            "select",
            "scale",
        ]
    );
}

#[test]
fn every_code_parses_back_to_its_type() {
    for kind in QuestionType::ordered() {
        assert_eq!(kind.code().parse::<QuestionType>(), Ok(kind));
    }
}

#[test]
fn unknown_codes_do_not_parse() {
    for raw in ["something-else", "", "another", "SELECT"] {
        assert!(raw.parse::<QuestionType>().is_err(), "{raw:?} should fail");
    }
}

#[test]
fn serde_codes_match_the_wire_format() {
    let json = serde_json::to_string(&QuestionType::MultipleChoice).expect("serializes");
    assert_eq!(json, "\"multiple_choice\"");
    let parsed: QuestionType = serde_json::from_str("\"check_boxes\"").expect("deserializes");
    assert_eq!(parsed, QuestionType::CheckBoxes);
}

#[test]
fn human_type_name_prefers_the_localizer() {
    let localizer =
        StaticLocalizer::new().with("ui.question_types", "multiple_choice", "Pick One");
    assert_eq!(
        human_type_name(&localizer, QuestionType::MultipleChoice),
        "Pick One"
    );
}

#[test]
fn human_type_name_falls_back_to_the_humanized_code() {
    assert_eq!(
        human_type_name(&NullLocalizer, QuestionType::MultipleChoice),
        "Multiple choice"
    );
    assert_eq!(
        human_type_name(&NullLocalizer, QuestionType::DateTime),
        "Date time"
    );
}

#[test]
fn types_for_select_pairs_labels_with_codes() {
    let options = types_for_select(&NullLocalizer);
    assert_eq!(options.len(), 7);
    assert_eq!(
        options[0],
        ("Date time".to_string(), QuestionType::DateTime)
    );
    assert_eq!(options[6], ("Scale".to_string(), QuestionType::Scale));
}

#[test]
fn draft_validation_collects_missing_fields() {
    let errors = QuestionDraft::default()
        .validate()
        .expect_err("blank draft is invalid");
    let fields: Vec<&str> = errors.errors().iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["question", "short_name", "question_type"]);
}

#[test]
fn draft_validation_rejects_unknown_type_codes() {
    let draft = QuestionDraft {
        question: "Pick a color".to_string(),
        short_name: "color".to_string(),
        question_type: "something-else".to_string(),
        ..QuestionDraft::default()
    };
    let errors = draft.validate().expect_err("unknown type is invalid");
    assert_eq!(errors.errors().len(), 1);
    assert_eq!(errors.errors()[0].field, "question_type");
    assert_eq!(errors.errors()[0].message, "is not included in the list");
}

#[test]
fn draft_validation_builds_the_question() {
    let draft = QuestionDraft {
        question: "Pick a color".to_string(),
        short_name: "color".to_string(),
        question_type: "select".to_string(),
        editable_metadata: "red\ngreen\nblue".to_string(),
        required_by_default: true,
        ..QuestionDraft::default()
    };
    let question = draft.validate().expect("valid draft");
    assert_eq!(question.question_type, QuestionType::Select);
    assert!(question.required_by_default);
    assert_eq!(
        question.metadata.choices(),
        vec!["red".to_string(), "green".to_string(), "blue".to_string()]
    );
}

#[test]
fn is_type_compares_the_declared_type() {
    let q = question(QuestionType::Scale);
    assert!(q.is_type(QuestionType::Scale));
    assert!(!q.is_type(QuestionType::Text));
}
