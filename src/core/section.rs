use crate::error::Result;
use crate::model::{EntityKind, Project, Section};
use crate::remote::ProjectService;
use crate::resolve;

pub fn list(service: &dyn ProjectService, project: &Project) -> Result<Vec<Section>> {
    service.sections(&project.gid)
}

/// Resolves a section by exact name inside `project`.
pub fn select(service: &dyn ProjectService, project: &Project, name: &str) -> Result<Section> {
    let sections = service.sections(&project.gid)?;
    resolve::resolve(&sections, name, EntityKind::Section, Some(&project.name)).cloned()
}
