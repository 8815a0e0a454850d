//! CLI argument parsing

mod common;
mod lookup;

use clap::{Parser, Subcommand};

use crate::config::{api, defaults, env};

pub use common::OutputFormat;
pub use lookup::{FindArgs, GroupArgs, ProjectArgs, ResolveArgs, SearchArgs};

/// GitLab namespace lookup CLI
#[derive(Parser, Debug)]
#[command(name = "glfind")]
#[command(version)]
#[command(about = "Locate GitLab projects and groups inside a namespace hierarchy", long_about = None)]
pub struct Cli {
    /// GitLab instance URL
    #[arg(short = 'u', long, env = env::URL, default_value = defaults::URL, global = true)]
    pub url: String,

    /// Personal access token
    #[arg(short = 't', long, env = env::TOKEN, hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL, global = true)]
    pub log_level: String,

    /// Items per page for listing requests
    #[arg(long, default_value_t = api::DEFAULT_PAGE_SIZE, global = true)]
    pub page_size: u32,

    /// Batch mode - no spinners
    #[arg(short, long, default_value_t = false, global = true)]
    pub batch: bool,

    /// Omit header row in table/CSV output
    #[arg(long, default_value_t = false, global = true)]
    pub no_header: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List projects matching a path or name in a group and its direct subgroups
    Find(FindArgs),

    /// Find the project with an exact path in a namespace
    #[command(visible_alias = "prj")]
    Project(ProjectArgs),

    /// Find the direct subgroup with an exact path under a parent group
    #[command(visible_alias = "grp")]
    Group(GroupArgs),

    /// Exact lookup anchored by either --namespace-id (project) or --parent-id (group)
    Resolve(ResolveArgs),

    /// Instance-wide project lookup by full path
    Search(SearchArgs),
}
