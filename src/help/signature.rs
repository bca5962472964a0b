//! Positional-argument signature: `[a] [b] [c]`.

use crate::command::CommandDescriptor;

/// Bracketed argument names in declaration order, space separated. Empty when
/// the command declares no arguments.
pub fn signature(command: &CommandDescriptor) -> String {
    command
        .args
        .keys()
        .map(|key| format!("[{}]", key))
        .collect::<Vec<_>>()
        .join(" ")
}
