//! Output of a run: the rendered file and what is reported back

pub mod json;
pub mod runner;

pub use json::write_task_definition;
pub use runner::{report_failure, set_output};
