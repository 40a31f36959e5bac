//! Normalised run inputs
//!
//! Raw arguments are trimmed, blank values count as not supplied, and the
//! task definition path is resolved against the workspace.

use std::path::{Path, PathBuf};

use crate::cli::Args;
use crate::error::{RenderError, Result};
use crate::taskdef::EditRequest;

/// Everything one run needs, validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inputs {
    /// Task definition path as given.
    pub task_definition: String,
    /// Task definition path resolved against the workspace.
    pub task_definition_path: PathBuf,
    pub edits: EditRequest,
    /// Directory the rendered file is created in.
    pub temp_dir: PathBuf,
    /// File that receives outputs, if the runner provides one.
    pub output_file: Option<PathBuf>,
}

impl Inputs {
    pub fn from_args(args: Args) -> Result<Self> {
        let task_definition = required(args.task_definition, "task-definition")?;
        let container_name = required(args.container_name, "container-name")?;
        let image = required(args.image, "image")?;

        let workspace = match non_empty_path(args.workspace) {
            Some(dir) => dir,
            None => std::env::current_dir()?,
        };
        let task_definition_path = resolve_path(&workspace, &task_definition);

        let temp_dir = non_empty_path(args.temp_dir).unwrap_or_else(std::env::temp_dir);

        let edits = EditRequest {
            container_name,
            image,
            environment_variables: optional(args.environment_variables),
            tags: optional(args.tags),
            log_driver: optional(args.log_configuration_log_driver),
            log_options: optional(args.log_configuration_options),
        };

        Ok(Self {
            task_definition,
            task_definition_path,
            edits,
            temp_dir,
            output_file: non_empty_path(args.output_file),
        })
    }
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required(value: Option<String>, name: &'static str) -> Result<String> {
    optional(value).ok_or(RenderError::MissingInput(name))
}

fn non_empty_path(path: Option<PathBuf>) -> Option<PathBuf> {
    path.filter(|p| !p.as_os_str().is_empty())
}

/// Resolve `path` against `workspace` unless it is already absolute.
pub fn resolve_path(workspace: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        workspace.join(path)
    }
}
