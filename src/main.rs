//! render-task-definition CLI - render a task definition for deployment

use clap::Parser;
use tracing_subscriber::EnvFilter;

use taskdef_render::cli::Args;
use taskdef_render::{render, report_failure, set_output, Inputs, TASK_DEFINITION_OUTPUT};

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        report_failure(&e.to_string());
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "taskdef_render=debug" } else { "taskdef_render=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args) -> taskdef_render::Result<()> {
    let inputs = Inputs::from_args(args)?;
    tracing::debug!(
        task_definition = %inputs.task_definition_path.display(),
        container = %inputs.edits.container_name,
        "Rendering task definition"
    );

    let path = render(&inputs)?;
    set_output(
        TASK_DEFINITION_OUTPUT,
        &path.to_string_lossy(),
        inputs.output_file.as_deref(),
    )
}
