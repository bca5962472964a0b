//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::CommandError;

/// Map errors to a single stderr line.
pub fn map_error(e: &CommandError) -> String {
    format!("error: {}", e)
}
