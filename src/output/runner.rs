//! Reporting outputs and failures to the CI runner

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::Result;

/// Publish an output value.
///
/// The `name=value` line is printed on stdout and, when the runner provides
/// an output file, appended to it.
pub fn set_output(name: &str, value: &str, output_file: Option<&Path>) -> Result<()> {
    let line = format!("{}={}", name, value);

    if let Some(path) = output_file {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{}", line)?;
    }

    println!("{}", line);
    Ok(())
}

/// Report a failed run.
///
/// The message always goes to stderr. Under a CI runner it is also emitted as
/// an `::error::` workflow command so the step is annotated.
pub fn report_failure(message: &str) {
    eprintln!("Error: {}", message);

    if running_in_ci() {
        println!("::error::{}", escape_command_data(message));
    }
}

fn running_in_ci() -> bool {
    std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true")
}

// Workflow command data cannot contain raw newlines or `%`.
fn escape_command_data(data: &str) -> String {
    data.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
