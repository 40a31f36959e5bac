//! Rendered task definition files

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::Builder;
use tracing::info;

use crate::error::Result;
use crate::taskdef::TaskDefinition;

const FILE_PREFIX: &str = "task-definition-";
const FILE_SUFFIX: &str = ".json";

/// Write `task` as pretty printed JSON to a new, uniquely named file under
/// `dir` and return its path. The file is kept after the run.
pub fn write_task_definition(task: &TaskDefinition, dir: &Path) -> Result<PathBuf> {
    let contents = task.to_pretty_json()?;

    let mut file = Builder::new()
        .prefix(FILE_PREFIX)
        .suffix(FILE_SUFFIX)
        .tempfile_in(dir)?;
    file.write_all(contents.as_bytes())?;
    let (_, path) = file.keep().map_err(|e| e.error)?;

    info!(path = %path.display(), "Wrote rendered task definition");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_write_task_definition() {
        let temp_dir = TempDir::new().unwrap();
        let task = TaskDefinition::from_value(json!({
            "containerDefinitions": [{ "name": "web", "image": "new:tag" }]
        }))
        .unwrap();

        let path = write_task_definition(&task, temp_dir.path()).unwrap();

        assert_eq!(path.parent(), Some(temp_dir.path()));
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("task-definition-"));
        assert!(name.ends_with(".json"));

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, task.to_pretty_json().unwrap());
        let value: Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["containerDefinitions"][0]["image"], "new:tag");
    }

    #[test]
    fn test_each_write_gets_a_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let task = TaskDefinition::from_value(json!({ "containerDefinitions": [] })).unwrap();

        let first = write_task_definition(&task, temp_dir.path()).unwrap();
        let second = write_task_definition(&task, temp_dir.path()).unwrap();
        assert_ne!(first, second);
        assert!(first.exists() && second.exists());
    }

    #[test]
    fn test_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let task = TaskDefinition::from_value(json!({ "containerDefinitions": [] })).unwrap();
        assert!(write_task_definition(&task, &temp_dir.path().join("missing")).is_err());
    }
}
