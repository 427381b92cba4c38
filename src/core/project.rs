use crate::error::Result;
use crate::model::{EntityKind, Project, Workspace};
use crate::remote::ProjectService;
use crate::resolve;

pub fn list(service: &dyn ProjectService, workspace: &Workspace) -> Result<Vec<Project>> {
    service.projects(&workspace.gid)
}

/// Resolves a project by exact name inside `workspace`.
pub fn select(service: &dyn ProjectService, workspace: &Workspace, name: &str) -> Result<Project> {
    let projects = service.projects(&workspace.gid)?;
    resolve::resolve(&projects, name, EntityKind::Project, Some(&workspace.name)).cloned()
}
