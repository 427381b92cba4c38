#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use taskman::error::{Error, RemoteRequestFailedDetails, Result};
use taskman::model::{Project, Section, Story, Task, User, Workspace};
use taskman::ProjectService;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    CreateTask {
        project: String,
        section: String,
        name: String,
    },
    AddComment {
        task: String,
        text: String,
    },
    AddTaskToSection {
        section: String,
        task: String,
    },
    AddFollower {
        task: String,
        user: String,
    },
}

/// In-memory stand-in for the remote service.
///
/// Lookups by an unknown gid fail the way the API does (HTTP 404), and every
/// mutation is recorded instead of applied.
#[derive(Default)]
pub struct FakeService {
    pub workspaces: Vec<Workspace>,
    pub projects: HashMap<String, Vec<Project>>,
    pub sections: HashMap<String, Vec<Section>>,
    pub project_tasks: HashMap<String, Vec<Task>>,
    pub section_tasks: HashMap<String, Vec<Task>>,
    pub users: HashMap<String, Vec<User>>,
    pub fail_mutations: bool,
    pub mutations: RefCell<Vec<Mutation>>,
}

fn missing(path: String) -> Error {
    Error::remote_request_failed(RemoteRequestFailedDetails {
        method: "GET".to_string(),
        path,
        status: Some(404),
        messages: vec!["Unknown object".to_string()],
        error: None,
    })
}

impl FakeService {
    pub fn mutations(&self) -> Vec<Mutation> {
        self.mutations.borrow().clone()
    }

    fn record(&self, path: &str, mutation: Mutation) -> Result<()> {
        if self.fail_mutations {
            return Err(Error::remote_request_failed(RemoteRequestFailedDetails {
                method: "POST".to_string(),
                path: path.to_string(),
                status: Some(500),
                messages: vec!["Server Error".to_string()],
                error: None,
            }));
        }
        self.mutations.borrow_mut().push(mutation);
        Ok(())
    }
}

impl ProjectService for FakeService {
    fn workspaces(&self) -> Result<Vec<Workspace>> {
        Ok(self.workspaces.clone())
    }

    fn projects(&self, workspace_gid: &str) -> Result<Vec<Project>> {
        Ok(self.projects.get(workspace_gid).cloned().unwrap_or_default())
    }

    fn sections(&self, project_gid: &str) -> Result<Vec<Section>> {
        self.sections
            .get(project_gid)
            .cloned()
            .ok_or_else(|| missing(format!("/projects/{}/sections", project_gid)))
    }

    fn project_tasks(&self, project_gid: &str) -> Result<Vec<Task>> {
        self.project_tasks
            .get(project_gid)
            .cloned()
            .ok_or_else(|| missing(format!("/projects/{}/tasks", project_gid)))
    }

    fn section_tasks(&self, section_gid: &str) -> Result<Vec<Task>> {
        self.section_tasks
            .get(section_gid)
            .cloned()
            .ok_or_else(|| missing(format!("/sections/{}/tasks", section_gid)))
    }

    fn users(&self, workspace_gid: &str) -> Result<Vec<User>> {
        Ok(self.users.get(workspace_gid).cloned().unwrap_or_default())
    }

    fn create_task(&self, project_gid: &str, section_gid: &str, name: &str) -> Result<Task> {
        self.record(
            "/tasks",
            Mutation::CreateTask {
                project: project_gid.to_string(),
                section: section_gid.to_string(),
                name: name.to_string(),
            },
        )?;
        Ok(Task::new("t-new", name))
    }

    fn add_comment(&self, task_gid: &str, text: &str) -> Result<Story> {
        self.record(
            &format!("/tasks/{}/stories", task_gid),
            Mutation::AddComment {
                task: task_gid.to_string(),
                text: text.to_string(),
            },
        )?;
        Ok(Story {
            gid: "story-1".to_string(),
            text: text.to_string(),
        })
    }

    fn add_task_to_section(&self, section_gid: &str, task_gid: &str) -> Result<()> {
        self.record(
            &format!("/sections/{}/addTask", section_gid),
            Mutation::AddTaskToSection {
                section: section_gid.to_string(),
                task: task_gid.to_string(),
            },
        )
    }

    fn add_follower(&self, task_gid: &str, user_gid: &str) -> Result<()> {
        self.record(
            &format!("/tasks/{}/addFollowers", task_gid),
            Mutation::AddFollower {
                task: task_gid.to_string(),
                user: user_gid.to_string(),
            },
        )
    }
}

/// Two workspaces; "Acme" holds the projects used throughout the tests.
///
/// Customer Portal (p1) has sections To Do / In Progress / Done with one
/// task each.
pub fn fixture() -> FakeService {
    let mut service = FakeService {
        workspaces: vec![Workspace::new("w1", "Acme"), Workspace::new("w2", "Personal")],
        ..FakeService::default()
    };

    service.projects.insert(
        "w1".to_string(),
        vec![
            Project::new("p1", "Customer Portal"),
            Project::new("p2", "Website Redesign"),
            Project::new("p3", "Redesign Website Q3"),
            Project::new("p4", "Marketing Plan"),
        ],
    );
    service
        .projects
        .insert("w2".to_string(), vec![Project::new("p9", "Groceries")]);

    service.sections.insert(
        "p1".to_string(),
        vec![
            Section::new("s1", "To Do"),
            Section::new("s2", "In Progress"),
            Section::new("s3", "Done"),
        ],
    );
    for project in ["p2", "p3", "p4", "p9"] {
        service.sections.insert(project.to_string(), Vec::new());
        service.project_tasks.insert(project.to_string(), Vec::new());
    }

    let fix = Task::new("t1", "Fix login bug");
    let notes = Task::new("t2", "Write release notes");
    let footer = Task::new("t3", "Update website footer");
    service.project_tasks.insert(
        "p1".to_string(),
        vec![fix.clone(), notes.clone(), footer.clone()],
    );
    service.section_tasks.insert("s1".to_string(), vec![fix]);
    service.section_tasks.insert("s2".to_string(), vec![notes]);
    service.section_tasks.insert("s3".to_string(), vec![footer]);

    service.users.insert(
        "w1".to_string(),
        vec![User::new("u1", "Ada Lovelace"), User::new("u2", "Grace Hopper")],
    );

    service
}

pub fn acme() -> Workspace {
    Workspace::new("w1", "Acme")
}

pub fn portal() -> Project {
    Project::new("p1", "Customer Portal")
}
