use crate::error::Result;
use crate::model::{User, Workspace};
use crate::remote::ProjectService;

pub fn list(service: &dyn ProjectService, workspace: &Workspace) -> Result<Vec<User>> {
    service.users(&workspace.gid)
}
