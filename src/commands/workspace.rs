use serde::Serialize;

use taskman::model::Workspace;
use taskman::{workspace, ProjectService};

use super::{CmdResult, GlobalArgs};

#[derive(Debug, Serialize)]
pub struct WorkspaceListOutput {
    pub workspaces: Vec<Workspace>,
}

pub fn run(_global: &GlobalArgs, service: &dyn ProjectService) -> CmdResult<WorkspaceListOutput> {
    let workspaces = workspace::list(service)?;
    Ok((WorkspaceListOutput { workspaces }, 0))
}
