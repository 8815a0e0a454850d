//! Command handlers
//!
//! Each handler resolves through a [`Resolver`] and prints the outcome.

use log::debug;

use crate::cli::{Cli, Command, FindArgs, GroupArgs, ProjectArgs, ResolveArgs, SearchArgs};
use crate::gitlab::GitlabApi;
use crate::output::{output_group, output_project, output_projects};
use crate::resolve::{Anchor, Lookup, Resolution, Resolver, SearchTerms};
use crate::ui::{clear_spinner, create_spinner, finish_spinner};

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Dispatch the parsed command line
pub async fn run_command<A: GitlabApi>(resolver: &Resolver<A>, cli: &Cli) -> CommandResult {
    match &cli.command {
        Command::Find(args) => run_find_command(resolver, cli, args).await,
        Command::Project(args) => run_project_command(resolver, cli, args).await,
        Command::Group(args) => run_group_command(resolver, cli, args).await,
        Command::Resolve(args) => run_resolve_command(resolver, cli, args).await,
        Command::Search(args) => run_search_command(resolver, cli, args).await,
    }
}

/// Resolve with a spinner shown while requests are in flight
async fn resolve_with_spinner<A: GitlabApi>(
    resolver: &Resolver<A>,
    lookup: &Lookup,
    message: &str,
    batch: bool,
) -> crate::Result<Resolution> {
    let spinner = create_spinner(message, batch);
    debug!("Resolving {:?}", lookup);

    match resolver.resolve(lookup).await {
        Ok(resolution) => {
            finish_spinner(spinner, "Done");
            Ok(resolution)
        }
        Err(e) => {
            clear_spinner(spinner);
            Err(e)
        }
    }
}

/// `find`: aggregate search below a parent group
pub async fn run_find_command<A: GitlabApi>(
    resolver: &Resolver<A>,
    cli: &Cli,
    args: &FindArgs,
) -> CommandResult {
    let terms = SearchTerms::from_options(args.path.as_deref(), args.name.as_deref());
    // Fail before any request when there is nothing to search for
    terms.require()?;

    let lookup = Lookup::Aggregate {
        ancestor_id: args.parent_id,
        terms,
    };
    let message = format!(
        "Searching group {} and its subgroups...",
        args.parent_id
    );

    if let Resolution::Projects(projects) =
        resolve_with_spinner(resolver, &lookup, &message, cli.batch).await?
    {
        output_projects(&projects, args.output, cli.no_header)?;
    }
    Ok(())
}

/// `project`: exact project in a namespace, then its full record
pub async fn run_project_command<A: GitlabApi>(
    resolver: &Resolver<A>,
    cli: &Cli,
    args: &ProjectArgs,
) -> CommandResult {
    let lookup = Anchor::Namespace(args.namespace_id).lookup(args.path.as_str());
    let resolution =
        resolve_with_spinner(resolver, &lookup, "Resolving project...", cli.batch).await?;
    print_exact(resolver, cli, resolution, args.output).await
}

/// `group`: exact subgroup under a parent, then its full record
pub async fn run_group_command<A: GitlabApi>(
    resolver: &Resolver<A>,
    cli: &Cli,
    args: &GroupArgs,
) -> CommandResult {
    let lookup = Anchor::Parent(args.parent_id).lookup(args.path.as_str());
    let resolution =
        resolve_with_spinner(resolver, &lookup, "Resolving group...", cli.batch).await?;
    print_exact(resolver, cli, resolution, args.output).await
}

/// `resolve`: exact lookup anchored by whichever ID was supplied
pub async fn run_resolve_command<A: GitlabApi>(
    resolver: &Resolver<A>,
    cli: &Cli,
    args: &ResolveArgs,
) -> CommandResult {
    let anchor = Anchor::from_ids(args.namespace_id, args.parent_id)?;
    let lookup = anchor.lookup(args.path.as_str());
    let resolution = resolve_with_spinner(resolver, &lookup, "Resolving...", cli.batch).await?;
    print_exact(resolver, cli, resolution, args.output).await
}

/// `search`: instance-wide lookup by full path
pub async fn run_search_command<A: GitlabApi>(
    resolver: &Resolver<A>,
    cli: &Cli,
    args: &SearchArgs,
) -> CommandResult {
    let lookup = Lookup::Global {
        terms: SearchTerms::from_options(Some(&args.path), args.name.as_deref()),
    };
    let resolution =
        resolve_with_spinner(resolver, &lookup, "Searching projects...", cli.batch).await?;

    if let Resolution::Project(project) = resolution {
        output_project(&project, args.output, cli.no_header)?;
    }
    Ok(())
}

/// Re-fetch the matched entity by ID and print it
async fn print_exact<A: GitlabApi>(
    resolver: &Resolver<A>,
    cli: &Cli,
    resolution: Resolution,
    format: crate::cli::OutputFormat,
) -> CommandResult {
    match resolution {
        Resolution::Project(project) => {
            let project = resolver.fetch_project(project.id).await?;
            output_project(&project, format, cli.no_header)?;
        }
        Resolution::Group(group) => {
            let group = resolver.fetch_group(group.id).await?;
            output_group(&group, format, cli.no_header)?;
        }
        Resolution::Projects(projects) => {
            output_projects(&projects, format, cli.no_header)?;
        }
    }
    Ok(())
}
