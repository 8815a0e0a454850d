//! glfind - Locate GitLab projects and groups inside a namespace hierarchy
//!
//! Given an ancestor group ID and a path or name hint, glfind searches the
//! ancestor and its direct subgroups, or narrows a listing down to the one
//! entity whose path matches exactly.
//!
//! # Features
//!
//! - Aggregate search across a group and its direct subgroups
//! - Path-first search with name fallback
//! - Exact path matching for projects and subgroups
//! - Automatic pagination handling
//! - Multiple output formats (table, CSV, JSON, YAML)
//!
//! # Example
//!
//! ```bash
//! # Projects matching "client" under group 9970 and its subgroups
//! glfind find --parent-id 9970 --path client
//!
//! # The project with path "client-go" in namespace 42
//! glfind project --namespace-id 42 --path client-go -o json
//!
//! # The subgroup "api" of group 9970
//! glfind group --parent-id 9970 --path api
//!
//! # Instance-wide lookup by full path
//! glfind search --path gitlab-org/api/client-go --name client-go
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod gitlab;
pub mod output;
pub mod resolve;
pub mod ui;

pub use cli::{Cli, Command, OutputFormat};
pub use commands::run_command;
pub use error::{GitlabError, Result};
pub use gitlab::{GitlabApi, GitlabClient, GitlabResource, Group, Project};
pub use resolve::{
    Anchor, LogObserver, Lookup, Resolution, ResolveObserver, Resolver, SearchTerms,
};
