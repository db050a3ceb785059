use serde::Deserialize;

use super::domain::Position;

/// Applicant-facing search parameters over the viewable scope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchFilters {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub paid: Option<bool>,
    #[serde(default)]
    pub time_commitment: Option<String>,
}

/// Search object: filters an already-scoped set of positions. Scoping to
/// viewable happens at the repository; this narrows further.
#[derive(Debug, Clone)]
pub struct PositionSearch {
    filters: SearchFilters,
}

impl PositionSearch {
    pub fn new(filters: SearchFilters) -> Self {
        Self { filters }
    }

    pub fn filter(&self, positions: Vec<Position>) -> Vec<Position> {
        positions
            .into_iter()
            .filter(|position| self.matches(position))
            .collect()
    }

    fn matches(&self, position: &Position) -> bool {
        if let Some(paid) = self.filters.paid {
            if position.paid != paid {
                return false;
            }
        }

        if let Some(commitment) = self
            .filters
            .time_commitment
            .as_deref()
            .filter(|code| !code.trim().is_empty())
        {
            if position.time_commitment.as_deref() != Some(commitment) {
                return false;
            }
        }

        if let Some(query) = self
            .filters
            .query
            .as_deref()
            .map(str::trim)
            .filter(|query| !query.is_empty())
        {
            let needle = query.to_lowercase();
            let haystack = format!(
                "{} {}",
                position.title.to_lowercase(),
                position.short_description.to_lowercase()
            );
            if !haystack.contains(&needle) {
                return false;
            }
        }

        true
    }
}
