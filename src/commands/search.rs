use clap::Args;

use taskman::search::{self, SearchRequest, SearchResults, DEFAULT_THRESHOLD};
use taskman::ProjectService;

use super::{CmdResult, GlobalArgs};
use crate::tty;

#[derive(Args)]
pub struct SearchArgs {
    /// Search query
    #[arg(long)]
    pub query: Option<String>,

    /// Minimum similarity score (0-100)
    #[arg(long, default_value_t = DEFAULT_THRESHOLD, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub threshold: u8,

    /// Also search sections and tasks of this project
    #[arg(long)]
    pub project: Option<String>,

    /// Limit task search to this section (requires --project)
    #[arg(long, requires = "project")]
    pub section: Option<String>,
}

pub fn run(
    args: SearchArgs,
    global: &GlobalArgs,
    service: &dyn ProjectService,
) -> CmdResult<SearchResults> {
    let query = tty::text(args.query, "query", "Search Query")?;
    let workspace = global.select_workspace(service)?;

    let request = SearchRequest {
        query: &query,
        threshold: args.threshold,
        project: args.project.as_deref(),
        section: args.section.as_deref(),
    };
    let results = search::run(service, &workspace, &request)?;
    Ok((results, 0))
}
