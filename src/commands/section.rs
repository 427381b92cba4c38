use clap::Args;
use serde::Serialize;

use taskman::model::{Project, Section};
use taskman::{project, section, ProjectService};

use super::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct SectionsArgs {
    /// Project name
    #[arg(long)]
    pub project: String,
}

#[derive(Debug, Serialize)]
pub struct SectionListOutput {
    pub project: Project,
    pub sections: Vec<Section>,
}

pub fn run(
    args: SectionsArgs,
    global: &GlobalArgs,
    service: &dyn ProjectService,
) -> CmdResult<SectionListOutput> {
    let workspace = global.select_workspace(service)?;
    let project = project::select(service, &workspace, &args.project)?;
    let sections = section::list(service, &project)?;
    Ok((SectionListOutput { project, sections }, 0))
}
