//! Task definition documents and the edits applied to them

pub mod editor;
pub mod log_driver;
pub mod model;
pub mod pairs;

pub use editor::{apply_edits, EditRequest};
pub use log_driver::LogDriver;
pub use model::{ContainerDefinition, EnvironmentVariable, Field, LogConfiguration, Tag, TaskDefinition};

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{RenderError, Result};

/// Load a task definition file.
///
/// `display` is the path as the user gave it, used when the file is missing.
pub fn load_task_definition(path: &Path, display: &str) -> Result<TaskDefinition> {
    if !path.is_file() {
        return Err(RenderError::MissingFile(display.to_string()));
    }

    let contents = fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&contents)?;
    let task = TaskDefinition::from_value(value)?;

    debug!(
        path = %path.display(),
        containers = task.container_definitions.len(),
        "Loaded task definition"
    );
    Ok(task)
}
