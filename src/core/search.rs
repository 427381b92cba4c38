//! Fuzzy search over project, section and task names.
//!
//! Projects are always searched in the selected workspace. Sections and
//! tasks are only searched when a project is given; a section further
//! narrows the task search to that section.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::{EntityKind, Named, Workspace};
use crate::remote::ProjectService;
use crate::utils::{token, validation};
use crate::{project, resolve, section};

pub const DEFAULT_THRESHOLD: u8 = 80;

#[derive(Debug, Clone)]
pub struct SearchRequest<'a> {
    pub query: &'a str,
    pub threshold: u8,
    pub project: Option<&'a str>,
    pub section: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub gid: String,
    pub name: String,
    pub score: u8,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub query: String,
    pub threshold: u8,
    pub projects: Vec<SearchHit>,
    pub sections: Vec<SearchHit>,
    pub tasks: Vec<SearchHit>,
}

/// Scores `items` by name and keeps those meeting `threshold`, in order.
pub fn filter_named<T: Named + AsRef<str>>(items: &[T], query: &str, threshold: u8) -> Vec<SearchHit> {
    token::filter_scored(items, query, threshold)
        .into_iter()
        .map(|(item, score)| SearchHit {
            gid: item.gid().to_string(),
            name: item.name().to_string(),
            score,
        })
        .collect()
}

pub fn run(
    service: &dyn ProjectService,
    workspace: &Workspace,
    request: &SearchRequest<'_>,
) -> Result<SearchResults> {
    validation::require_threshold(request.threshold)?;
    if request.section.is_some() && request.project.is_none() {
        return Err(Error::validation_invalid_argument(
            "section",
            "Searching within a section requires --project",
            None,
        ));
    }

    let projects = project::list(service, workspace)?;
    let mut results = SearchResults {
        query: request.query.to_string(),
        threshold: request.threshold,
        projects: filter_named(&projects, request.query, request.threshold),
        ..SearchResults::default()
    };

    if let Some(project_name) = request.project {
        let project = resolve::resolve(
            &projects,
            project_name,
            EntityKind::Project,
            Some(&workspace.name),
        )?;

        let sections = section::list(service, project)?;
        results.sections = filter_named(&sections, request.query, request.threshold);

        let tasks = match request.section {
            Some(section_name) => {
                let section = resolve::resolve(
                    &sections,
                    section_name,
                    EntityKind::Section,
                    Some(&project.name),
                )?;
                service.section_tasks(&section.gid)?
            }
            None => service.project_tasks(&project.gid)?,
        };
        results.tasks = filter_named(&tasks, request.query, request.threshold);
    }

    log::debug!(
        "search '{}' >= {}: {} projects, {} sections, {} tasks",
        request.query,
        request.threshold,
        results.projects.len(),
        results.sections.len(),
        results.tasks.len()
    );

    Ok(results)
}
