//! Search-term selection from path and name hints

use crate::error::{GitlabError, Result};

/// A (path, name) hint pair supplied by the caller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerms {
    path: String,
    name: String,
}

impl SearchTerms {
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
        }
    }

    /// Build from optional CLI values; `None` counts as empty
    pub fn from_options(path: Option<&str>, name: Option<&str>) -> Self {
        Self::new(path.unwrap_or_default(), name.unwrap_or_default())
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Term for the first search attempt: path, else name, else `""`
    /// (an unfiltered listing).
    pub fn effective(&self) -> &str {
        if !self.path.is_empty() {
            &self.path
        } else {
            &self.name
        }
    }

    /// Like [`effective`](Self::effective), but an empty result is an error
    pub fn require(&self) -> Result<&str> {
        match self.effective() {
            "" => Err(GitlabError::InvalidInput(
                "either a path or a name must be provided".to_string(),
            )),
            term => Ok(term),
        }
    }

    /// Terms to try in order within one scope.
    ///
    /// The name is only tried after the path yielded nothing, and only when
    /// it is non-empty and differs from the path.
    pub fn attempts(&self) -> Vec<&str> {
        let mut attempts = Vec::with_capacity(2);
        if !self.path.is_empty() {
            attempts.push(self.path.as_str());
        }
        if !self.name.is_empty() && self.name != self.path {
            attempts.push(self.name.as_str());
        }
        attempts
    }
}
