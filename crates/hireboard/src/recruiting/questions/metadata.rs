use serde::{Deserialize, Serialize};

/// Per-question configuration, typically the selectable choices for
/// choice-type questions. Serialized as `null`, a single string, or an
/// ordered list of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuestionMetadata {
    #[default]
    Absent,
    Scalar(String),
    List(Vec<String>),
}

impl QuestionMetadata {
    /// Single-string view for human editing: lists join with newlines, a
    /// scalar is shown as-is, absence is the empty string.
    pub fn editable(&self) -> String {
        match self {
            Self::Absent => String::new(),
            Self::Scalar(value) => value.clone(),
            Self::List(values) => values.join("\n"),
        }
    }

    /// Rebuild metadata from the editable view. Blank input clears it;
    /// anything else becomes a list of trimmed, non-blank lines. The
    /// normalization is deliberately lossy: surrounding whitespace and blank
    /// lines do not survive a round trip. Structured values assigned
    /// directly (not through this constructor) are kept unchanged.
    pub fn from_editable(text: &str) -> Self {
        if text.trim().is_empty() {
            return Self::Absent;
        }

        let lines: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        Self::List(lines)
    }

    /// Metadata flattened into the ordered choice labels consumed by
    /// choice-style widgets.
    pub fn choices(&self) -> Vec<String> {
        match self {
            Self::Absent => Vec::new(),
            Self::Scalar(value) => vec![value.clone()],
            Self::List(values) => values.clone(),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}
