//! GitLab API client module
//!
//! Transport, entity models and pagination for the GitLab REST API v4.

mod client;
pub mod groups;
pub mod pagination;
pub mod projects;
pub mod traits;

pub use client::GitlabClient;
pub use groups::Group;
pub use pagination::{fetch_all_pages, Page, PageDescriptor};
pub use projects::{Project, ProjectNamespace};
pub use traits::{GitlabApi, GitlabResource};
