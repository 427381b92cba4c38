use clap::{Args, Subcommand};
use serde::Serialize;

use taskman::model::{Project, Task};
use taskman::task::{CommentAdded, TaskCreated, TaskMoved, UserAdded};
use taskman::{project, task, ProjectService};

use super::{CmdResult, GlobalArgs};
use crate::tty;

#[derive(Args)]
pub struct TasksArgs {
    /// Project name
    #[arg(long)]
    pub project: String,
    /// Only list tasks in this section
    #[arg(long)]
    pub section: Option<String>,
}

#[derive(Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: TaskCommand,
}

#[derive(Subcommand)]
enum TaskCommand {
    /// Create a task in a section of a project
    Create {
        /// Project name
        #[arg(long)]
        project: Option<String>,
        /// Section the new task is placed in
        #[arg(long)]
        section: Option<String>,
        /// Name of the new task
        #[arg(long)]
        name: Option<String>,
    },
    /// Add a comment to a task
    Comment {
        /// Project name
        #[arg(long)]
        project: Option<String>,
        /// Task name
        #[arg(long)]
        task: Option<String>,
        /// Comment text
        #[arg(long)]
        text: Option<String>,
    },
    /// Move a task to another section
    Move {
        /// Project name
        #[arg(long)]
        project: Option<String>,
        /// Task name
        #[arg(long)]
        task: Option<String>,
        /// Destination section name
        #[arg(long)]
        section: Option<String>,
    },
    /// Add a workspace user to a task as a follower
    AddUser {
        /// Project name
        #[arg(long)]
        project: Option<String>,
        /// Task name
        #[arg(long)]
        task: Option<String>,
        /// User's display name
        #[arg(long)]
        user: Option<String>,
    },
}

#[derive(Serialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum TaskOutput {
    Create(TaskCreated),
    Comment(CommentAdded),
    Move(TaskMoved),
    AddUser(UserAdded),
}

#[derive(Debug, Serialize)]
pub struct TaskListOutput {
    pub project: Project,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    pub tasks: Vec<Task>,
}

pub fn list(
    args: TasksArgs,
    global: &GlobalArgs,
    service: &dyn ProjectService,
) -> CmdResult<TaskListOutput> {
    let workspace = global.select_workspace(service)?;
    let project = project::select(service, &workspace, &args.project)?;
    let tasks = task::list(service, &project, args.section.as_deref())?;
    Ok((
        TaskListOutput {
            project,
            section: args.section,
            tasks,
        },
        0,
    ))
}

pub fn run(args: TaskArgs, global: &GlobalArgs, service: &dyn ProjectService) -> CmdResult<TaskOutput> {
    match args.command {
        TaskCommand::Create {
            project,
            section,
            name,
        } => {
            let project = select_project(project, global, service)?;
            let section = tty::field(section, "section", "Section Name")?;
            let name = tty::field(name, "name", "Task Name")?;
            let created = task::create(service, &project, &name, &section)?;
            Ok((TaskOutput::Create(created), 0))
        }
        TaskCommand::Comment {
            project,
            task: task_name,
            text,
        } => {
            let project = select_project(project, global, service)?;
            let task_name = tty::field(task_name, "task", "Task Name")?;
            let text = tty::field(text, "text", "Comment Text")?;
            let added = task::comment(service, &project, &task_name, &text)?;
            Ok((TaskOutput::Comment(added), 0))
        }
        TaskCommand::Move {
            project,
            task: task_name,
            section,
        } => {
            let project = select_project(project, global, service)?;
            let task_name = tty::field(task_name, "task", "Task Name")?;
            let section = tty::field(section, "section", "Section Name")?;
            let moved = task::move_to_section(service, &project, &task_name, &section)?;
            Ok((TaskOutput::Move(moved), 0))
        }
        TaskCommand::AddUser {
            project,
            task: task_name,
            user,
        } => {
            let workspace = global.select_workspace(service)?;
            let project_name = tty::field(project, "project", "Project")?;
            let project = project::select(service, &workspace, &project_name)?;
            let task_name = tty::field(task_name, "task", "Task Name")?;
            let user = tty::field(user, "user", "Username")?;
            let added = task::add_user(service, &workspace, &project, &task_name, &user)?;
            Ok((TaskOutput::AddUser(added), 0))
        }
    }
}

fn select_project(
    name: Option<String>,
    global: &GlobalArgs,
    service: &dyn ProjectService,
) -> taskman::Result<Project> {
    let workspace = global.select_workspace(service)?;
    let name = tty::field(name, "project", "Project")?;
    project::select(service, &workspace, &name)
}
