//! Remote project-management service.
//!
//! [`ProjectService`] is the only seam between this crate and the network.
//! [`AsanaClient`] implements it over the REST API; tests plug in an
//! in-memory implementation.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::http::{ApiClient, ApiRequest};
use crate::model::{Project, Section, Story, Task, User, Workspace};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

const LIST_FIELDS: &str = "gid,name";

/// List and mutation calls against the remote service.
///
/// Every call is a blocking round trip. Nothing is cached: callers re-fetch
/// a list every time they need to resolve a name.
pub trait ProjectService {
    fn workspaces(&self) -> Result<Vec<Workspace>>;
    fn projects(&self, workspace_gid: &str) -> Result<Vec<Project>>;
    fn sections(&self, project_gid: &str) -> Result<Vec<Section>>;
    fn project_tasks(&self, project_gid: &str) -> Result<Vec<Task>>;
    fn section_tasks(&self, section_gid: &str) -> Result<Vec<Task>>;
    fn users(&self, workspace_gid: &str) -> Result<Vec<User>>;

    fn create_task(&self, project_gid: &str, section_gid: &str, name: &str) -> Result<Task>;
    fn add_comment(&self, task_gid: &str, text: &str) -> Result<Story>;
    fn add_task_to_section(&self, section_gid: &str, task_gid: &str) -> Result<()>;
    fn add_follower(&self, task_gid: &str, user_gid: &str) -> Result<()>;
}

pub struct AsanaClient {
    http: ApiClient,
}

impl AsanaClient {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            http: ApiClient::new(config)?,
        })
    }

    fn call<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let data = self.http.execute(&request)?;
        decode(data, &request.path)
    }

    fn call_unit(&self, request: ApiRequest) -> Result<()> {
        self.http.execute(&request)?;
        Ok(())
    }
}

fn decode<T: DeserializeOwned>(data: Value, path: &str) -> Result<T> {
    serde_json::from_value(data)
        .map_err(|e| Error::internal_json(e.to_string(), Some(format!("decode {}", path))))
}

// Request shapes for each call. Listing calls only ask for gid and name.

fn list(path: impl Into<String>) -> ApiRequest {
    ApiRequest::get(path).query("opt_fields", LIST_FIELDS)
}

fn workspaces_request() -> ApiRequest {
    list("/workspaces")
}

fn projects_request(workspace_gid: &str) -> ApiRequest {
    list("/projects").query("workspace", workspace_gid)
}

fn sections_request(project_gid: &str) -> ApiRequest {
    list(format!("/projects/{}/sections", project_gid))
}

fn project_tasks_request(project_gid: &str) -> ApiRequest {
    list(format!("/projects/{}/tasks", project_gid))
}

fn section_tasks_request(section_gid: &str) -> ApiRequest {
    list(format!("/sections/{}/tasks", section_gid))
}

fn users_request(workspace_gid: &str) -> ApiRequest {
    list("/users").query("workspace", workspace_gid)
}

fn create_task_request(project_gid: &str, section_gid: &str, name: &str) -> ApiRequest {
    ApiRequest::post(
        "/tasks",
        json!({
            "name": name,
            "projects": [project_gid],
            "memberships": [{ "project": project_gid, "section": section_gid }],
        }),
    )
}

fn add_comment_request(task_gid: &str, text: &str) -> ApiRequest {
    ApiRequest::post(format!("/tasks/{}/stories", task_gid), json!({ "text": text }))
}

fn add_task_to_section_request(section_gid: &str, task_gid: &str) -> ApiRequest {
    ApiRequest::post(
        format!("/sections/{}/addTask", section_gid),
        json!({ "task": task_gid }),
    )
}

fn add_follower_request(task_gid: &str, user_gid: &str) -> ApiRequest {
    ApiRequest::post(
        format!("/tasks/{}/addFollowers", task_gid),
        json!({ "followers": [user_gid] }),
    )
}

impl ProjectService for AsanaClient {
    fn workspaces(&self) -> Result<Vec<Workspace>> {
        self.call(workspaces_request())
    }

    fn projects(&self, workspace_gid: &str) -> Result<Vec<Project>> {
        self.call(projects_request(workspace_gid))
    }

    fn sections(&self, project_gid: &str) -> Result<Vec<Section>> {
        self.call(sections_request(project_gid))
    }

    fn project_tasks(&self, project_gid: &str) -> Result<Vec<Task>> {
        self.call(project_tasks_request(project_gid))
    }

    fn section_tasks(&self, section_gid: &str) -> Result<Vec<Task>> {
        self.call(section_tasks_request(section_gid))
    }

    fn users(&self, workspace_gid: &str) -> Result<Vec<User>> {
        self.call(users_request(workspace_gid))
    }

    fn create_task(&self, project_gid: &str, section_gid: &str, name: &str) -> Result<Task> {
        self.call(create_task_request(project_gid, section_gid, name))
    }

    fn add_comment(&self, task_gid: &str, text: &str) -> Result<Story> {
        self.call(add_comment_request(task_gid, text))
    }

    fn add_task_to_section(&self, section_gid: &str, task_gid: &str) -> Result<()> {
        self.call_unit(add_task_to_section_request(section_gid, task_gid))
    }

    fn add_follower(&self, task_gid: &str, user_gid: &str) -> Result<()> {
        self.call_unit(add_follower_request(task_gid, user_gid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::Method;

    fn query(request: &ApiRequest) -> Vec<(&str, &str)> {
        request
            .query
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    #[test]
    fn listing_calls_ask_for_gid_and_name() {
        let cases = [
            (workspaces_request(), "/workspaces"),
            (sections_request("p1"), "/projects/p1/sections"),
            (project_tasks_request("p1"), "/projects/p1/tasks"),
            (section_tasks_request("s1"), "/sections/s1/tasks"),
        ];
        for (request, path) in cases {
            assert_eq!(request.method, Method::Get);
            assert_eq!(request.path, path);
            assert_eq!(query(&request), vec![("opt_fields", "gid,name")]);
            assert!(request.body.is_none());
        }
    }

    #[test]
    fn workspace_scoped_lists_pass_workspace() {
        let projects = projects_request("w1");
        assert_eq!(projects.path, "/projects");
        assert_eq!(
            query(&projects),
            vec![("opt_fields", "gid,name"), ("workspace", "w1")]
        );

        let users = users_request("w1");
        assert_eq!(users.path, "/users");
        assert!(query(&users).contains(&("workspace", "w1")));
    }

    #[test]
    fn create_task_places_task_through_memberships() {
        let request = create_task_request("p1", "s2", "Ship dark mode");
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "/tasks");
        assert_eq!(
            request.body,
            Some(json!({
                "name": "Ship dark mode",
                "projects": ["p1"],
                "memberships": [{ "project": "p1", "section": "s2" }],
            }))
        );
    }

    #[test]
    fn comment_posts_story_text() {
        let request = add_comment_request("t1", "Reproduced on staging");
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "/tasks/t1/stories");
        assert_eq!(request.body, Some(json!({ "text": "Reproduced on staging" })));
    }

    #[test]
    fn move_posts_to_section_add_task() {
        let request = add_task_to_section_request("s3", "t1");
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "/sections/s3/addTask");
        assert_eq!(request.body, Some(json!({ "task": "t1" })));
    }

    #[test]
    fn add_user_posts_follower_list() {
        let request = add_follower_request("t2", "u2");
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "/tasks/t2/addFollowers");
        assert_eq!(request.body, Some(json!({ "followers": ["u2"] })));
    }

    #[test]
    fn decode_failure_names_path() {
        let err = decode::<Vec<Workspace>>(json!({ "oops": true }), "/workspaces").unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::InternalJsonError);
        assert_eq!(err.details["context"], "decode /workspaces");
    }
}
