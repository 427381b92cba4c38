use clap::{Parser, Subcommand};

use commands::GlobalArgs;

mod commands;
mod output;
mod tty;

use commands::{search, section, task};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "taskman")]
#[command(version = VERSION)]
#[command(about = "Browse Asana workspaces and act on tasks by name")]
struct Cli {
    /// Workspace name (defaults to the first workspace)
    #[arg(long, global = true)]
    workspace: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List workspaces
    Workspaces,
    /// List projects in the workspace
    Projects,
    /// List sections of a project
    Sections(section::SectionsArgs),
    /// List tasks of a project or one of its sections
    Tasks(task::TasksArgs),
    /// List users in the workspace
    Users,
    /// Create, comment on, move and assign tasks
    Task(task::TaskArgs),
    /// Fuzzy search project, section and task names
    Search(search::SearchArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    if let Err(err) = taskman::logging::init(&taskman::config::log_spec()) {
        taskman::log_status!("logging", "diagnostic logging disabled: {}", err);
    }

    let global = GlobalArgs {
        workspace: cli.workspace,
    };

    let (json_result, exit_code) = commands::run_json(cli.command, &global);
    if let Err(err) = output::print_json_result(json_result) {
        eprintln!("{}", err);
        return std::process::ExitCode::from(1);
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
