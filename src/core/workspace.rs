use crate::error::{Error, Result};
use crate::model::{EntityKind, Workspace};
use crate::remote::ProjectService;
use crate::resolve;

pub fn list(service: &dyn ProjectService) -> Result<Vec<Workspace>> {
    service.workspaces()
}

/// Picks the workspace a command runs in.
///
/// A named workspace is resolved exactly. Without a name the first
/// workspace the API returns is used.
pub fn select(service: &dyn ProjectService, name: Option<&str>) -> Result<Workspace> {
    let workspaces = service.workspaces()?;

    match name {
        Some(name) => resolve::resolve(&workspaces, name, EntityKind::Workspace, None).cloned(),
        None => workspaces
            .into_iter()
            .next()
            .ok_or_else(|| Error::workspace_not_found("")),
    }
}
