use serde::Serialize;

use taskman::model::{Project, Workspace};
use taskman::{project, ProjectService};

use super::{CmdResult, GlobalArgs};

#[derive(Debug, Serialize)]
pub struct ProjectListOutput {
    pub workspace: Workspace,
    pub projects: Vec<Project>,
}

pub fn run(global: &GlobalArgs, service: &dyn ProjectService) -> CmdResult<ProjectListOutput> {
    let workspace = global.select_workspace(service)?;
    let projects = project::list(service, &workspace)?;
    Ok((
        ProjectListOutput {
            workspace,
            projects,
        },
        0,
    ))
}
