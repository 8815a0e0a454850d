//! Exact structural-path matching over a candidate listing

use crate::error::{GitlabError, Result};
use crate::gitlab::traits::GitlabResource;

/// Outcome of an exact-path scan
#[derive(Debug)]
pub struct ExactMatch<T> {
    /// First candidate, in listing order, whose path equals the request
    pub entity: T,
    /// How many candidates carried that same path (1 unless ambiguous)
    pub match_count: usize,
}

impl<T> ExactMatch<T> {
    pub fn is_ambiguous(&self) -> bool {
        self.match_count > 1
    }
}

/// Pick the entity whose structural path equals `path`.
///
/// `kind` names the entity in the `NotFound` message ("Project", "Group").
pub fn locate_by_path<T>(candidates: Vec<T>, path: &str, kind: &str) -> Result<ExactMatch<T>>
where
    T: GitlabResource,
{
    let mut matches = candidates.into_iter().filter(|c| c.has_path(path));

    let entity = matches
        .next()
        .ok_or_else(|| GitlabError::NotFound(format!("{} with path '{}' not found", kind, path)))?;

    Ok(ExactMatch {
        entity,
        match_count: 1 + matches.count(),
    })
}
