//! In-memory GitLab for resolver tests

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use super::ResolveObserver;
use crate::error::{GitlabError, Result};
use crate::gitlab::pagination::{Page, PageDescriptor};
use crate::gitlab::traits::GitlabApi;
use crate::gitlab::{Group, Project};

pub fn group(id: u64, path: &str, parent_id: u64) -> Group {
    Group {
        id,
        name: path.to_string(),
        path: path.to_string(),
        full_path: format!("root/{}", path),
        full_name: None,
        parent_id: Some(parent_id),
        web_url: None,
        description: None,
    }
}

pub fn project(id: u64, path: &str) -> Project {
    Project {
        id,
        name: path.to_string(),
        path: path.to_string(),
        path_with_namespace: format!("gitlab-org/api/{}", path),
        name_with_namespace: None,
        web_url: None,
        description: None,
        namespace: None,
    }
}

/// Serves configured listings page by page and records every call as
/// `subgroups:{group}:{page}` or `projects:{group}:{term}:{page}`.
#[derive(Default)]
pub struct FakeGitlab {
    subgroups: HashMap<u64, Vec<Group>>,
    projects: HashMap<u64, Vec<Project>>,
    search_results: Vec<Project>,
    failing_subgroups: HashSet<u64>,
    failing_projects: HashSet<u64>,
    malformed_projects: HashSet<u64>,
    calls: Mutex<Vec<String>>,
}

impl FakeGitlab {
    pub fn with_subgroups(mut self, parent_id: u64, groups: Vec<Group>) -> Self {
        self.subgroups.insert(parent_id, groups);
        self
    }

    pub fn with_projects(mut self, group_id: u64, projects: Vec<Project>) -> Self {
        self.projects.insert(group_id, projects);
        self
    }

    pub fn with_search_results(mut self, projects: Vec<Project>) -> Self {
        self.search_results = projects;
        self
    }

    pub fn failing_subgroups(mut self, group_id: u64) -> Self {
        self.failing_subgroups.insert(group_id);
        self
    }

    pub fn failing_projects(mut self, group_id: u64) -> Self {
        self.failing_projects.insert(group_id);
        self
    }

    /// Project listings of `group_id` fail to decode instead of failing in transit
    pub fn malformed_projects(mut self, group_id: u64) -> Self {
        self.malformed_projects.insert(group_id);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_matching(&self, prefix: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.starts_with(prefix))
            .count()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

fn server_error(what: String) -> GitlabError {
    GitlabError::Api {
        status: 500,
        message: format!("Failed to fetch {}", what),
    }
}

fn paginate<T: Clone>(items: &[T], page: u32, per_page: u32) -> Page<T> {
    let total_pages = (items.len() as u32).div_ceil(per_page);
    let start = ((page - 1) * per_page) as usize;
    let slice = items
        .iter()
        .skip(start)
        .take(per_page as usize)
        .cloned()
        .collect();
    Page::new(
        slice,
        PageDescriptor {
            current_page: page,
            total_pages: Some(total_pages),
            per_page,
            next_page: (page < total_pages).then_some(page + 1),
        },
    )
}

#[async_trait]
impl GitlabApi for FakeGitlab {
    async fn list_subgroups_page(
        &self,
        group_id: u64,
        page: u32,
        per_page: u32,
    ) -> Result<Page<Group>> {
        self.record(format!("subgroups:{}:{}", group_id, page));
        if self.failing_subgroups.contains(&group_id) {
            return Err(server_error(format!("subgroups of group {}", group_id)));
        }
        let groups = self.subgroups.get(&group_id).cloned().unwrap_or_default();
        Ok(paginate(&groups, page, per_page))
    }

    async fn list_projects_page(
        &self,
        group_id: u64,
        search: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Page<Project>> {
        self.record(format!("projects:{}:{}:{}", group_id, search, page));
        if self.failing_projects.contains(&group_id) {
            return Err(server_error(format!("projects of group {}", group_id)));
        }
        if self.malformed_projects.contains(&group_id) {
            return Err(GitlabError::Json(format!(
                "missing field `path` in projects of group {}",
                group_id
            )));
        }
        let needle = search.to_lowercase();
        let matching: Vec<Project> = self
            .projects
            .get(&group_id)
            .map(|all| {
                all.iter()
                    .filter(|p| {
                        p.name.to_lowercase().contains(&needle)
                            || p.path.to_lowercase().contains(&needle)
                    })
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(paginate(&matching, page, per_page))
    }

    async fn search_projects(&self, term: &str) -> Result<Vec<Project>> {
        self.record(format!("search:{}", term));
        Ok(self.search_results.clone())
    }

    async fn get_project(&self, id: u64) -> Result<Option<Project>> {
        Ok(self
            .projects
            .values()
            .flatten()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn get_group(&self, id: u64) -> Result<Option<Group>> {
        Ok(self
            .subgroups
            .values()
            .flatten()
            .find(|g| g.id == id)
            .cloned())
    }
}

/// Observer that keeps what it was told
#[derive(Clone, Default)]
pub struct RecordingObserver {
    skipped_scopes: Arc<Mutex<Vec<u64>>>,
    skipped: Arc<Mutex<Vec<u64>>>,
    ambiguous: Arc<Mutex<Vec<(String, usize)>>>,
}

impl RecordingObserver {
    pub fn skipped_scopes(&self) -> Vec<u64> {
        self.skipped_scopes.lock().unwrap().clone()
    }

    pub fn skipped(&self) -> Vec<u64> {
        self.skipped.lock().unwrap().clone()
    }

    pub fn ambiguous(&self) -> Vec<(String, usize)> {
        self.ambiguous.lock().unwrap().clone()
    }
}

impl ResolveObserver for RecordingObserver {
    fn scope_skipped(&self, group_id: u64, _error: &GitlabError) {
        self.skipped_scopes.lock().unwrap().push(group_id);
    }

    fn subgroup_skipped(&self, group: &Group, _error: &GitlabError) {
        self.skipped.lock().unwrap().push(group.id);
    }

    fn ambiguous_match(&self, kind: &str, _path: &str, count: usize) {
        self.ambiguous.lock().unwrap().push((kind.to_string(), count));
    }
}
