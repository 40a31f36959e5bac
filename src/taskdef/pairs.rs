//! Parsing of newline separated `key=value` blocks

use crate::error::{RenderError, Result};

/// What a block of pairs describes. Only affects error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairKind {
    EnvironmentVariable,
    Tag,
    LogOption,
}

impl PairKind {
    fn parse_error(&self, line: &str) -> RenderError {
        RenderError::Parse(match self {
            PairKind::EnvironmentVariable => format!(
                "Cannot parse the environment variable '{}'. Environment variable pairs must be of the form NAME=value.",
                line
            ),
            PairKind::Tag => format!(
                "Cannot parse the tag '{}'. Tag key-value pairs must be of the form KEY=value.",
                line
            ),
            PairKind::LogOption => format!(
                "Can't parse logConfiguration option {}. Must be in key=value format, one per line",
                line
            ),
        })
    }
}

/// A single parsed `key=value` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub key: String,
    pub value: String,
}

/// Parse a block of `key=value` lines.
///
/// Lines are trimmed and blank lines skipped. Each remaining line is split
/// on its first `=`, so the value may itself contain `=` and may be empty.
/// The first line without a separator fails the whole block.
pub fn parse_pairs(block: &str, kind: PairKind) -> Result<Vec<Pair>> {
    let mut pairs = Vec::new();

    for line in block.split('\n') {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (key, value) = line
            .split_once('=')
            .ok_or_else(|| kind.parse_error(line))?;

        pairs.push(Pair {
            key: key.to_string(),
            value: value.to_string(),
        });
    }

    Ok(pairs)
}
