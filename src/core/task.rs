//! Task listing and the four task actions.
//!
//! Each action resolves the names it references against freshly fetched
//! lists, then issues exactly one remote mutation. A failed lookup returns
//! before anything is mutated. Nothing is rolled back if the mutation
//! itself fails.

use serde::Serialize;

use crate::error::Result;
use crate::model::{EntityKind, Project, Section, Story, Task, User, Workspace};
use crate::remote::ProjectService;
use crate::{resolve, section};

/// Tasks of a project, or of one of its sections.
pub fn list(
    service: &dyn ProjectService,
    project: &Project,
    section_name: Option<&str>,
) -> Result<Vec<Task>> {
    match section_name {
        Some(name) => {
            let section = section::select(service, project, name)?;
            service.section_tasks(&section.gid)
        }
        None => service.project_tasks(&project.gid),
    }
}

/// Resolves a task by exact name among all tasks of `project`.
pub fn select(service: &dyn ProjectService, project: &Project, name: &str) -> Result<Task> {
    let tasks = service.project_tasks(&project.gid)?;
    resolve::resolve(&tasks, name, EntityKind::Task, Some(&project.name)).cloned()
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCreated {
    pub project: Project,
    pub section: Section,
    pub task: Task,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentAdded {
    pub project: Project,
    pub task: Task,
    pub story: Story,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskMoved {
    pub project: Project,
    pub task: Task,
    pub section: Section,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAdded {
    pub project: Project,
    pub task: Task,
    pub user: User,
}

/// Creates `task_name` in `project`, placed in section `section_name`.
pub fn create(
    service: &dyn ProjectService,
    project: &Project,
    task_name: &str,
    section_name: &str,
) -> Result<TaskCreated> {
    let section = section::select(service, project, section_name)?;

    log_status!("task", "Creating '{}' in {} / {}", task_name, project.name, section.name);
    let task = service.create_task(&project.gid, &section.gid, task_name)?;
    log::info!("created task {} in section {}", task.gid, section.gid);

    Ok(TaskCreated {
        project: project.clone(),
        section,
        task,
    })
}

/// Adds a comment to the task named `task_name` in `project`.
pub fn comment(
    service: &dyn ProjectService,
    project: &Project,
    task_name: &str,
    text: &str,
) -> Result<CommentAdded> {
    let task = select(service, project, task_name)?;

    log_status!("task", "Commenting on '{}'", task.name);
    let story = service.add_comment(&task.gid, text)?;
    log::info!("added story {} to task {}", story.gid, task.gid);

    Ok(CommentAdded {
        project: project.clone(),
        task,
        story,
    })
}

/// Moves the task named `task_name` into section `section_name`.
///
/// The task is resolved before the section, so a missing task is reported
/// even when the section is missing too.
pub fn move_to_section(
    service: &dyn ProjectService,
    project: &Project,
    task_name: &str,
    section_name: &str,
) -> Result<TaskMoved> {
    let task = select(service, project, task_name)?;
    let section = section::select(service, project, section_name)?;

    log_status!("task", "Moving '{}' to {}", task.name, section.name);
    service.add_task_to_section(&section.gid, &task.gid)?;
    log::info!("moved task {} to section {}", task.gid, section.gid);

    Ok(TaskMoved {
        project: project.clone(),
        task,
        section,
    })
}

/// Adds the workspace user named `user_name` as a follower of the task.
pub fn add_user(
    service: &dyn ProjectService,
    workspace: &Workspace,
    project: &Project,
    task_name: &str,
    user_name: &str,
) -> Result<UserAdded> {
    let task = select(service, project, task_name)?;
    let users = service.users(&workspace.gid)?;
    let user = resolve::resolve(&users, user_name, EntityKind::User, Some(&workspace.name))?.clone();

    log_status!("task", "Adding {} to '{}'", user.name, task.name);
    service.add_follower(&task.gid, &user.gid)?;
    log::info!("added follower {} to task {}", user.gid, task.gid);

    Ok(UserAdded {
        project: project.clone(),
        task,
        user,
    })
}
