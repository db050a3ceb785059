use std::collections::HashMap;

/// Localization collaborator. Lookups are scoped (`ui.question_types`,
/// `ui.position_status`); a miss falls back to [`humanize`].
pub trait Localizer: Send + Sync {
    fn translate(&self, scope: &str, key: &str) -> Option<String>;
}

/// Localizer with no translations; every lookup falls back.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLocalizer;

impl Localizer for NullLocalizer {
    fn translate(&self, _scope: &str, _key: &str) -> Option<String> {
        None
    }
}

/// Table-backed localizer for deployments that ship their own labels.
#[derive(Debug, Default, Clone)]
pub struct StaticLocalizer {
    entries: HashMap<(String, String), String>,
}

impl StaticLocalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, scope: &str, key: &str, label: &str) -> Self {
        self.entries
            .insert((scope.to_string(), key.to_string()), label.to_string());
        self
    }
}

impl Localizer for StaticLocalizer {
    fn translate(&self, scope: &str, key: &str) -> Option<String> {
        self.entries
            .get(&(scope.to_string(), key.to_string()))
            .cloned()
    }
}

/// Fallback label: underscores become spaces, first character is uppercased.
pub fn humanize(code: &str) -> String {
    let spaced = code.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
