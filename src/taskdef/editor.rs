//! Edits applied to a single container definition

use serde_json::Value;
use tracing::debug;

use crate::error::Result;
use crate::taskdef::log_driver::LogDriver;
use crate::taskdef::model::{loose_eq, ContainerDefinition, EnvironmentVariable, Tag, TaskDefinition};
use crate::taskdef::pairs::{parse_pairs, PairKind};

/// The edits requested for one container.
///
/// Optional edits that are `None` or empty are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditRequest {
    pub container_name: String,
    pub image: String,
    pub environment_variables: Option<String>,
    pub tags: Option<String>,
    pub log_driver: Option<String>,
    pub log_options: Option<String>,
}

impl EditRequest {
    pub fn new(container_name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            container_name: container_name.into(),
            image: image.into(),
            ..Self::default()
        }
    }

    pub fn with_environment_variables(mut self, block: impl Into<String>) -> Self {
        self.environment_variables = Some(block.into());
        self
    }

    pub fn with_tags(mut self, block: impl Into<String>) -> Self {
        self.tags = Some(block.into());
        self
    }

    pub fn with_log_driver(mut self, driver: impl Into<String>) -> Self {
        self.log_driver = Some(driver.into());
        self
    }

    pub fn with_log_options(mut self, block: impl Into<String>) -> Self {
        self.log_options = Some(block.into());
        self
    }
}

fn supplied(input: &Option<String>) -> Option<&str> {
    input.as_deref().filter(|s| !s.is_empty())
}

/// Apply every requested edit to the named container.
///
/// Edits run in a fixed order: image, environment, tags, log driver, log
/// options. The first failure is returned and the partially edited document
/// is dropped with it.
pub fn apply_edits(mut task: TaskDefinition, request: &EditRequest) -> Result<TaskDefinition> {
    let container = task.container_mut(&request.container_name)?;

    set_image(container, &request.image);

    if let Some(block) = supplied(&request.environment_variables) {
        merge_environment(container, block)?;
    }

    if let Some(block) = supplied(&request.tags) {
        merge_tags(container, block)?;
    }

    if let Some(driver) = supplied(&request.log_driver) {
        set_log_driver(container, driver.parse()?);
    }

    if let Some(block) = supplied(&request.log_options) {
        merge_log_options(container, block)?;
    }

    Ok(task)
}

pub fn set_image(container: &mut ContainerDefinition, image: &str) {
    debug!(image, "Setting container image");
    container.image = Some(Value::String(image.to_string()));
}

/// Merge `NAME=value` lines into the container environment.
///
/// Existing variables are updated where they stand, new ones are appended.
/// An environment that is not a list is replaced by an empty one first.
pub fn merge_environment(container: &mut ContainerDefinition, block: &str) -> Result<()> {
    let pairs = parse_pairs(block, PairKind::EnvironmentVariable)?;
    let environment = container.environment.typed_or_default();

    let mut added = 0;
    for pair in pairs {
        let existing = environment
            .iter_mut()
            .find(|e| e.name.as_ref().is_some_and(|n| loose_eq(n, &pair.key)));

        match existing {
            Some(variable) => variable.value = Some(Value::String(pair.value)),
            None => {
                environment.push(EnvironmentVariable {
                    name: Some(Value::String(pair.key)),
                    value: Some(Value::String(pair.value)),
                    extra: Default::default(),
                });
                added += 1;
            }
        }
    }

    debug!(total = environment.len(), added, "Merged environment variables");
    Ok(())
}

/// Merge `KEY=value` lines into the container tags, keyed by `key`.
pub fn merge_tags(container: &mut ContainerDefinition, block: &str) -> Result<()> {
    let pairs = parse_pairs(block, PairKind::Tag)?;
    let tags = container.tags.typed_or_default();

    let mut added = 0;
    for pair in pairs {
        let existing = tags
            .iter_mut()
            .find(|t| t.key.as_ref().is_some_and(|k| loose_eq(k, &pair.key)));

        match existing {
            Some(tag) => tag.value = Some(Value::String(pair.value)),
            None => {
                tags.push(Tag {
                    key: Some(Value::String(pair.key)),
                    value: Some(Value::String(pair.value)),
                    extra: Default::default(),
                });
                added += 1;
            }
        }
    }

    debug!(total = tags.len(), added, "Merged tags");
    Ok(())
}

/// Set `logConfiguration.logDriver`, leaving the options alone.
pub fn set_log_driver(container: &mut ContainerDefinition, driver: LogDriver) {
    debug!(%driver, "Setting log driver");
    let config = container.log_configuration.typed_or_default();
    config.log_driver = Some(Value::String(driver.to_string()));
}

/// Merge `key=value` lines into `logConfiguration.options`.
///
/// Existing options are kept; a repeated key takes the last value given.
pub fn merge_log_options(container: &mut ContainerDefinition, block: &str) -> Result<()> {
    let pairs = parse_pairs(block, PairKind::LogOption)?;
    let options = container
        .log_configuration
        .typed_or_default()
        .options
        .typed_or_default();

    for pair in pairs {
        options.insert(pair.key, Value::String(pair.value));
    }

    debug!(total = options.len(), "Merged log options");
    Ok(())
}
