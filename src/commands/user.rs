use serde::Serialize;

use taskman::model::{User, Workspace};
use taskman::{user, ProjectService};

use super::{CmdResult, GlobalArgs};

#[derive(Debug, Serialize)]
pub struct UserListOutput {
    pub workspace: Workspace,
    pub users: Vec<User>,
}

pub fn run(global: &GlobalArgs, service: &dyn ProjectService) -> CmdResult<UserListOutput> {
    let workspace = global.select_workspace(service)?;
    let users = user::list(service, &workspace)?;
    Ok((UserListOutput { workspace, users }, 0))
}
