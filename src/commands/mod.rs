use serde_json::Value;

use taskman::config::Config;
use taskman::model::Workspace;
use taskman::{AsanaClient, ProjectService};

pub type CmdResult<T> = taskman::Result<(T, i32)>;

pub(crate) struct GlobalArgs {
    pub(crate) workspace: Option<String>,
}

impl GlobalArgs {
    /// Workspace selected by `--workspace`, or the first one the API returns.
    pub(crate) fn select_workspace(
        &self,
        service: &dyn ProjectService,
    ) -> taskman::Result<Workspace> {
        taskman::workspace::select(service, self.workspace.as_deref())
    }
}

pub mod project;
pub mod search;
pub mod section;
pub mod task;
pub mod user;
pub mod workspace;

/// Reads configuration once and builds the remote client for this run.
fn connect() -> taskman::Result<AsanaClient> {
    let config = Config::from_env()?;
    log::debug!("using API at {}", config.base_url);
    AsanaClient::new(&config)
}

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($global:expr, $service:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($global, $service))
    };
    ($args:expr, $global:expr, $service:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global, $service))
    };
}

pub(crate) fn run_json(command: crate::Commands, global: &GlobalArgs) -> (taskman::Result<Value>, i32) {
    crate::tty::status("taskman is working...");

    let client = match connect() {
        Ok(client) => client,
        Err(err) => return crate::output::map_cmd_result_to_json::<Value>(Err(err)),
    };
    let service: &dyn ProjectService = &client;

    match command {
        // Browsing
        crate::Commands::Workspaces => dispatch!(global, service, workspace),
        crate::Commands::Projects => dispatch!(global, service, project),
        crate::Commands::Sections(args) => dispatch!(args, global, service, section),
        crate::Commands::Tasks(args) => {
            crate::output::map_cmd_result_to_json(task::list(args, global, service))
        }
        crate::Commands::Users => dispatch!(global, service, user),

        // Actions
        crate::Commands::Task(args) => dispatch!(args, global, service, task),
        crate::Commands::Search(args) => dispatch!(args, global, service, search),
    }
}
