//! Hierarchical resolution of projects and groups
//!
//! A [`Resolver`] walks one level of the namespace tree below an ancestor
//! group. It either collects every loosely-matching project
//! ([`Lookup::Aggregate`]) or narrows a listing down to the single entity
//! whose structural path equals the request ([`Lookup::Project`],
//! [`Lookup::Group`]).
//!
//! All remote calls are issued one after another; result order is the
//! traversal order (ancestor first, then subgroups in listing order).

mod exact;
#[cfg(test)]
pub(crate) mod fake;
mod terms;

use log::{debug, info, warn};

use crate::config::api;
use crate::error::{GitlabError, Result};
use crate::gitlab::pagination::fetch_all_pages;
use crate::gitlab::traits::{GitlabApi, GitlabResource};
use crate::gitlab::{Group, Project};

pub use exact::{locate_by_path, ExactMatch};
pub use terms::SearchTerms;

/// Receives notice of events the resolver tolerates instead of failing on
pub trait ResolveObserver: Send + Sync {
    /// The ancestor's own project search failed and its projects were skipped
    fn scope_skipped(&self, group_id: u64, error: &GitlabError);

    /// A subgroup's project search failed and the subgroup was skipped
    fn subgroup_skipped(&self, group: &Group, error: &GitlabError);

    /// Several entities carried the requested path; the first was used
    fn ambiguous_match(&self, kind: &str, path: &str, count: usize);
}

/// Observer that forwards to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl ResolveObserver for LogObserver {
    fn scope_skipped(&self, group_id: u64, error: &GitlabError) {
        warn!("Skipping projects of group {}: {}", group_id, error);
    }

    fn subgroup_skipped(&self, group: &Group, error: &GitlabError) {
        warn!(
            "Skipping subgroup '{}' ({}): {}",
            group.full_path, group.id, error
        );
    }

    fn ambiguous_match(&self, kind: &str, path: &str, count: usize) {
        warn!(
            "{} entities of kind {} share path '{}'; using the first in listing order",
            count, kind, path
        );
    }
}

/// Where an exact lookup is anchored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Namespace (group) that directly owns the wanted project
    Namespace(u64),
    /// Parent group of the wanted subgroup
    Parent(u64),
}

impl Anchor {
    /// Choose the anchor from two mutually exclusive identifiers
    pub fn from_ids(namespace_id: Option<u64>, parent_id: Option<u64>) -> Result<Self> {
        match (namespace_id, parent_id) {
            (Some(ns), None) => Ok(Anchor::Namespace(ns)),
            (None, Some(parent)) => Ok(Anchor::Parent(parent)),
            (Some(_), Some(_)) => Err(GitlabError::InvalidInput(
                "namespace id and parent id are mutually exclusive".to_string(),
            )),
            (None, None) => Err(GitlabError::InvalidInput(
                "either a namespace id or a parent id must be provided".to_string(),
            )),
        }
    }

    /// Exact lookup of `path` under this anchor
    pub fn lookup(self, path: impl Into<String>) -> Lookup {
        let path = path.into();
        match self {
            Anchor::Namespace(namespace_id) => Lookup::Project { namespace_id, path },
            Anchor::Parent(parent_id) => Lookup::Group { parent_id, path },
        }
    }
}

/// A resolution request; the variant selects the mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// Collect matching projects from the ancestor and its direct subgroups
    Aggregate {
        ancestor_id: u64,
        terms: SearchTerms,
    },
    /// The project with exactly this path in the given namespace
    Project { namespace_id: u64, path: String },
    /// The direct subgroup with exactly this path under the given parent
    Group { parent_id: u64, path: String },
    /// Instance-wide search, matched on full path (and name when given)
    Global { terms: SearchTerms },
}

/// Result of a [`Lookup`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Projects(Vec<Project>),
    Project(Project),
    Group(Group),
}

/// Resolves projects and groups over a [`GitlabApi`]
pub struct Resolver<A> {
    api: A,
    per_page: u32,
    observer: Box<dyn ResolveObserver>,
}

impl<A: GitlabApi> Resolver<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            per_page: api::DEFAULT_PAGE_SIZE,
            observer: Box::new(LogObserver),
        }
    }

    /// Page size used for every listing call (clamped to 1..=100)
    pub fn with_page_size(mut self, per_page: u32) -> Self {
        self.per_page = per_page.clamp(1, api::MAX_PAGE_SIZE);
        self
    }

    pub fn with_observer(mut self, observer: Box<dyn ResolveObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn page_size(&self) -> u32 {
        self.per_page
    }

    /// Run a lookup in the mode its variant names
    pub async fn resolve(&self, lookup: &Lookup) -> Result<Resolution> {
        match lookup {
            Lookup::Aggregate { ancestor_id, terms } => self
                .aggregate(*ancestor_id, terms)
                .await
                .map(Resolution::Projects),
            Lookup::Project { namespace_id, path } => self
                .exact_project(*namespace_id, path)
                .await
                .map(Resolution::Project),
            Lookup::Group { parent_id, path } => self
                .exact_group(*parent_id, path)
                .await
                .map(Resolution::Group),
            Lookup::Global { terms } => self.lookup_global(terms).await.map(Resolution::Project),
        }
    }

    /// All immediate subgroups of a group, every page
    pub async fn subgroups(&self, group_id: u64) -> Result<Vec<Group>> {
        let context = format!("subgroups of group {}", group_id);
        fetch_all_pages(self.per_page, &context, |page, per_page| {
            self.api.list_subgroups_page(group_id, page, per_page)
        })
        .await
    }

    /// All projects of a group matching `term` (empty = unfiltered), every page
    pub async fn search_group_projects(&self, group_id: u64, term: &str) -> Result<Vec<Project>> {
        let context = format!("projects of group {} matching {:?}", group_id, term);
        fetch_all_pages(self.per_page, &context, |page, per_page| {
            self.api.list_projects_page(group_id, term, page, per_page)
        })
        .await
    }

    /// Search one group by path, falling back to name when the path finds nothing
    pub async fn search_scope(&self, group_id: u64, terms: &SearchTerms) -> Result<Vec<Project>> {
        for term in terms.attempts() {
            let found = self.search_group_projects(group_id, term).await?;
            if !found.is_empty() {
                debug!(
                    "Group {}: {} project(s) matching {:?}",
                    group_id,
                    found.len(),
                    term
                );
                return Ok(found);
            }
            debug!("Group {}: no projects matching {:?}", group_id, term);
        }
        Ok(Vec::new())
    }

    /// Matching projects of the ancestor and of each direct subgroup.
    ///
    /// A scope (the ancestor or a subgroup) whose search fails at the transport
    /// level is reported to the observer and contributes nothing. Only the
    /// subgroup enumeration of the ancestor is fatal. An empty overall result
    /// is `NotFound`.
    pub async fn aggregate(&self, ancestor_id: u64, terms: &SearchTerms) -> Result<Vec<Project>> {
        let term = terms.require()?;

        let subgroups = self.subgroups(ancestor_id).await?;
        debug!(
            "Group {} has {} direct subgroup(s)",
            ancestor_id,
            subgroups.len()
        );

        let mut results = match self.search_scope(ancestor_id, terms).await {
            Ok(found) => found,
            Err(e) if e.is_transport() => {
                self.observer.scope_skipped(ancestor_id, &e);
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        for group in &subgroups {
            match self.search_scope(group.id, terms).await {
                Ok(found) => results.extend(found),
                Err(e) if e.is_transport() => self.observer.subgroup_skipped(group, &e),
                Err(e) => return Err(e),
            }
        }

        if results.is_empty() {
            return Err(GitlabError::NotFound(format!(
                "No projects matching '{}' in group {} or its subgroups",
                term, ancestor_id
            )));
        }

        info!(
            "Found {} project(s) matching '{}' under group {}",
            results.len(),
            term,
            ancestor_id
        );
        Ok(results)
    }

    /// The project of `namespace_id` whose path equals `path` exactly
    pub async fn exact_project(&self, namespace_id: u64, path: &str) -> Result<Project> {
        require_path(path)?;

        let candidates = self.search_group_projects(namespace_id, "").await?;
        debug!(
            "Scanning {} project(s) of namespace {} for path '{}'",
            candidates.len(),
            namespace_id,
            path
        );

        let found = locate_by_path(candidates, path, "Project")?;
        if found.is_ambiguous() {
            self.observer
                .ambiguous_match("project", path, found.match_count);
        }
        Ok(found.entity)
    }

    /// The direct subgroup of `parent_id` whose path equals `path` exactly
    pub async fn exact_group(&self, parent_id: u64, path: &str) -> Result<Group> {
        require_path(path)?;

        let candidates = self.subgroups(parent_id).await?;
        debug!(
            "Scanning {} subgroup(s) of group {} for path '{}'",
            candidates.len(),
            parent_id,
            path
        );

        let found = locate_by_path(candidates, path, "Group")?;
        if found.is_ambiguous() {
            self.observer
                .ambiguous_match("group", path, found.match_count);
        }
        Ok(found.entity)
    }

    /// Instance-wide lookup by full namespace path, optionally confirmed by name
    pub async fn lookup_global(&self, terms: &SearchTerms) -> Result<Project> {
        let full_path = terms.path();
        require_path(full_path)?;
        let name = terms.name();

        let candidates = self.api.search_projects(full_path).await?;
        debug!(
            "Global search for '{}' returned {} project(s)",
            full_path,
            candidates.len()
        );

        candidates
            .into_iter()
            .find(|p| p.full_path() == full_path && (name.is_empty() || p.name() == name))
            .ok_or_else(|| {
                GitlabError::NotFound(format!("Project '{}' not found", full_path))
            })
    }

    /// Fresh copy of a project by ID
    pub async fn fetch_project(&self, id: u64) -> Result<Project> {
        self.api
            .get_project(id)
            .await?
            .ok_or_else(|| GitlabError::NotFound(format!("Project {} not found", id)))
    }

    /// Fresh copy of a group by ID
    pub async fn fetch_group(&self, id: u64) -> Result<Group> {
        self.api
            .get_group(id)
            .await?
            .ok_or_else(|| GitlabError::NotFound(format!("Group {} not found", id)))
    }
}

fn require_path(path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(GitlabError::InvalidInput("a path must be provided".to_string()));
    }
    Ok(())
}
