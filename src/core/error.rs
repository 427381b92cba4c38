use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigMissingKey,
    ConfigInvalidValue,

    ValidationMissingArgument,
    ValidationInvalidArgument,

    WorkspaceNotFound,
    ProjectNotFound,
    SectionNotFound,
    TaskNotFound,
    UserNotFound,

    RemoteRequestFailed,

    InternalIoError,
    InternalJsonError,
    InternalUnexpected,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ConfigMissingKey => "config.missing_key",
            ErrorCode::ConfigInvalidValue => "config.invalid_value",

            ErrorCode::ValidationMissingArgument => "validation.missing_argument",
            ErrorCode::ValidationInvalidArgument => "validation.invalid_argument",

            ErrorCode::WorkspaceNotFound => "workspace.not_found",
            ErrorCode::ProjectNotFound => "project.not_found",
            ErrorCode::SectionNotFound => "section.not_found",
            ErrorCode::TaskNotFound => "task.not_found",
            ErrorCode::UserNotFound => "user.not_found",

            ErrorCode::RemoteRequestFailed => "remote.request_failed",

            ErrorCode::InternalIoError => "internal.io_error",
            ErrorCode::InternalJsonError => "internal.json_error",
            ErrorCode::InternalUnexpected => "internal.unexpected",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ErrorCode::WorkspaceNotFound
                | ErrorCode::ProjectNotFound
                | ErrorCode::SectionNotFound
                | ErrorCode::TaskNotFound
                | ErrorCode::UserNotFound
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigMissingKeyDetails {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigInvalidValueDetails {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub problem: String,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
    pub retryable: Option<bool>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotFoundDetails {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingArgumentDetails {
    pub args: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidArgumentDetails {
    pub field: String,
    pub problem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Shared by the internal I/O and JSON errors; `context` names the step
/// that failed ("read stdin", "decode /workspaces").
#[derive(Debug, Serialize)]
pub struct InternalFailureDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// Details attached to a failed call against the remote API.
///
/// `status` is absent when the request never produced a response
/// (DNS, TLS, connection reset).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteRequestFailedDetails {
    pub method: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn to_details<T: Serialize>(details: T) -> Value {
    serde_json::to_value(details).unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
            retryable: None,
        }
    }

    pub fn validation_missing_argument(args: Vec<String>) -> Self {
        Self::new(
            ErrorCode::ValidationMissingArgument,
            "Missing required argument",
            to_details(MissingArgumentDetails { args }),
        )
    }

    pub fn validation_invalid_argument(
        field: impl Into<String>,
        problem: impl Into<String>,
        value: Option<String>,
    ) -> Self {
        Self::new(
            ErrorCode::ValidationInvalidArgument,
            "Invalid argument",
            to_details(InvalidArgumentDetails {
                field: field.into(),
                problem: problem.into(),
                value,
            }),
        )
    }

    pub fn workspace_not_found(name: impl Into<String>) -> Self {
        Self::not_found(ErrorCode::WorkspaceNotFound, "Workspace not found", name, None)
            .with_hint("Run 'taskman workspaces' to see available workspaces")
    }

    pub fn project_not_found(name: impl Into<String>, workspace: Option<String>) -> Self {
        Self::not_found(ErrorCode::ProjectNotFound, "Project not found", name, workspace)
            .with_hint("Run 'taskman projects' to see projects in the workspace")
    }

    pub fn section_not_found(name: impl Into<String>, project: Option<String>) -> Self {
        Self::not_found(ErrorCode::SectionNotFound, "Section not found", name, project)
    }

    pub fn task_not_found(name: impl Into<String>, scope: Option<String>) -> Self {
        Self::not_found(ErrorCode::TaskNotFound, "Task not found", name, scope)
    }

    pub fn user_not_found(name: impl Into<String>, workspace: Option<String>) -> Self {
        Self::not_found(ErrorCode::UserNotFound, "User not found", name, workspace)
            .with_hint("Run 'taskman users' to see users in the workspace")
    }

    fn not_found(
        code: ErrorCode,
        message: &str,
        name: impl Into<String>,
        scope: Option<String>,
    ) -> Self {
        Self::new(
            code,
            message,
            to_details(NotFoundDetails {
                name: name.into(),
                scope,
            }),
        )
    }

    pub fn remote_request_failed(details: RemoteRequestFailedDetails) -> Self {
        let message = match (details.status, details.messages.first()) {
            (Some(status), Some(first)) => format!("Remote request failed (HTTP {}): {}", status, first),
            (Some(status), None) => format!("Remote request failed (HTTP {})", status),
            (None, _) => "Remote request failed".to_string(),
        };
        let retryable = details.status.map(|s| s == 429 || s >= 500);

        let mut err = Self::new(ErrorCode::RemoteRequestFailed, message, to_details(details));
        err.retryable = retryable;
        err
    }

    pub fn config_missing_key(key: impl Into<String>, source: Option<String>) -> Self {
        Self::new(
            ErrorCode::ConfigMissingKey,
            "Missing required configuration key",
            to_details(ConfigMissingKeyDetails {
                key: key.into(),
                source,
            }),
        )
    }

    pub fn config_invalid_value(
        key: impl Into<String>,
        value: Option<String>,
        problem: impl Into<String>,
    ) -> Self {
        Self::new(
            ErrorCode::ConfigInvalidValue,
            "Invalid configuration value",
            to_details(ConfigInvalidValueDetails {
                key: key.into(),
                value,
                problem: problem.into(),
            }),
        )
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        Self::internal(ErrorCode::InternalIoError, "IO error", error.into(), context)
    }

    pub fn internal_json(error: impl Into<String>, context: Option<String>) -> Self {
        Self::internal(ErrorCode::InternalJsonError, "JSON error", error.into(), context)
    }

    fn internal(code: ErrorCode, message: &str, error: String, context: Option<String>) -> Self {
        Self::new(code, message, to_details(InternalFailureDetails { error, context }))
    }

    pub fn internal_unexpected(error: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InternalUnexpected,
            "Unexpected error",
            serde_json::json!({ "error": error.into() }),
        )
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }
}
