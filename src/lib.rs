//! taskdef-render - insert a container image and settings into a task definition
//!
//! A task definition JSON file is loaded, one named container definition is
//! edited (image, environment variables, tags, log configuration) and the
//! result is written to a new file for the deploy step that follows.
//!
//! # Example
//!
//! ```no_run
//! use taskdef_render::{apply_edits, load_task_definition, write_task_definition, EditRequest};
//! use std::path::Path;
//!
//! let task = load_task_definition(Path::new("task-def.json"), "task-def.json").unwrap();
//! let request = EditRequest::new("web", "nginx:1.27").with_environment_variables("PORT=8080");
//! let task = apply_edits(task, &request).unwrap();
//! let path = write_task_definition(&task, &std::env::temp_dir()).unwrap();
//! println!("{}", path.display());
//! ```

use std::path::PathBuf;

pub mod cli;
pub mod error;
pub mod inputs;
pub mod output;
pub mod taskdef;

pub use error::{RenderError, Result};
pub use inputs::Inputs;
pub use output::{report_failure, set_output, write_task_definition};
pub use taskdef::{apply_edits, load_task_definition, EditRequest, LogDriver, TaskDefinition};

/// Name of the output that carries the rendered file path.
pub const TASK_DEFINITION_OUTPUT: &str = "task-definition";

/// Load, edit and write out the task definition described by `inputs`.
///
/// Nothing is written unless every edit succeeds.
pub fn render(inputs: &Inputs) -> Result<PathBuf> {
    let task = load_task_definition(&inputs.task_definition_path, &inputs.task_definition)?;
    let task = apply_edits(task, &inputs.edits)?;
    write_task_definition(&task, &inputs.temp_dir)
}
