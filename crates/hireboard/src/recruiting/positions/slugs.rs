use super::repository::{PositionRepository, RepositoryError};

/// Derive a unique slug from a title. The base form comes straight from the
/// title; collisions resolve by suffixing `--1`, `--2`, ... until the store
/// reports the candidate free. Collisions are never an error.
pub fn assign_slug<R: PositionRepository + ?Sized>(
    repository: &R,
    title: &str,
) -> Result<String, RepositoryError> {
    let base = slug::slugify(title);
    let base = if base.is_empty() {
        "position".to_string()
    } else {
        base
    };

    if !repository.slug_taken(&base)? {
        return Ok(base);
    }

    let mut suffix = 1u32;
    loop {
        let candidate = format!("{base}--{suffix}");
        if !repository.slug_taken(&candidate)? {
            return Ok(candidate);
        }
        suffix += 1;
    }
}
