//! Lookup command arguments

use clap::Parser;

use super::common::OutputFormat;

/// Arguments for 'find' (aggregate search)
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
        glfind find --parent-id 9970 --path client\n  \
        glfind find --parent-id 9970 --name \"Client Go\" -o json")]
pub struct FindArgs {
    /// Ancestor group ID to search from
    #[arg(long)]
    pub parent_id: u64,

    /// Project path to search for (tried first)
    #[arg(long)]
    pub path: Option<String>,

    /// Project name to search for (fallback when the path finds nothing)
    #[arg(long)]
    pub name: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'project' (exact project lookup)
#[derive(Parser, Debug)]
pub struct ProjectArgs {
    /// Namespace (group) ID that owns the project
    #[arg(long)]
    pub namespace_id: u64,

    /// Exact project path segment (e.g. client-go)
    #[arg(long)]
    pub path: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'group' (exact subgroup lookup)
#[derive(Parser, Debug)]
pub struct GroupArgs {
    /// Parent group ID
    #[arg(long)]
    pub parent_id: u64,

    /// Exact subgroup path segment
    #[arg(long)]
    pub path: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'resolve' (exact lookup, anchor chosen by ID flag)
#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// Namespace ID - resolves a project
    #[arg(long)]
    pub namespace_id: Option<u64>,

    /// Parent group ID - resolves a subgroup
    #[arg(long)]
    pub parent_id: Option<u64>,

    /// Exact path segment
    #[arg(long)]
    pub path: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'search' (instance-wide lookup)
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Full project path with namespace (e.g. gitlab-org/api/client-go)
    #[arg(long)]
    pub path: String,

    /// Project name that must also match
    #[arg(long)]
    pub name: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
