//! CLI argument parsing
//!
//! Every input can also come from the `INPUT_*` environment variables a CI
//! runner sets for action inputs.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "render-task-definition")]
#[command(author, version, about = "Insert a container image and settings into a task definition file", long_about = None)]
pub struct Args {
    /// Path to the task definition JSON file (absolute or relative to the workspace)
    #[arg(long, env = "INPUT_TASK-DEFINITION", value_name = "PATH")]
    pub task_definition: Option<String>,

    /// Name of the container definition to update
    #[arg(long, env = "INPUT_CONTAINER-NAME", value_name = "NAME")]
    pub container_name: Option<String>,

    /// Image URI to insert into the container definition
    #[arg(long, env = "INPUT_IMAGE", value_name = "URI")]
    pub image: Option<String>,

    /// Environment variables, one NAME=value pair per line
    #[arg(long, env = "INPUT_ENVIRONMENT-VARIABLES", value_name = "NAME=VALUE")]
    pub environment_variables: Option<String>,

    /// Tags, one KEY=value pair per line
    #[arg(long, env = "INPUT_TAGS", value_name = "KEY=VALUE")]
    pub tags: Option<String>,

    /// Log driver for the container's log configuration
    #[arg(long, env = "INPUT_LOG-CONFIGURATION-LOG-DRIVER", value_name = "DRIVER")]
    pub log_configuration_log_driver: Option<String>,

    /// Log configuration options, one key=value pair per line
    #[arg(long, env = "INPUT_LOG-CONFIGURATION-OPTIONS", value_name = "KEY=VALUE")]
    pub log_configuration_options: Option<String>,

    /// Directory relative task definition paths are resolved against
    #[arg(long, env = "GITHUB_WORKSPACE", value_name = "DIR")]
    pub workspace: Option<PathBuf>,

    /// Directory the rendered task definition is written to
    #[arg(long, env = "RUNNER_TEMP", value_name = "DIR")]
    pub temp_dir: Option<PathBuf>,

    /// File that receives `name=value` outputs
    #[arg(long, env = "GITHUB_OUTPUT", value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
