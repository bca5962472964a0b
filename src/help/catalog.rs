//! Column-aligned command catalog.

use super::signature::signature;
use crate::command::CommandDescriptor;
use crate::output::Sink;
use crate::runner::Runner;
use crate::style::{right_pad, visible_width};

/// `"<name> <signature>"`, the left column of a catalog row.
pub fn head(command: &CommandDescriptor) -> String {
    format!("{} {}", command.name, signature(command))
}

/// Widest visible head among `commands`; zero for an empty slice.
pub fn column_width(commands: &[CommandDescriptor]) -> usize {
    commands
        .iter()
        .map(|command| visible_width(&head(command)))
        .max()
        .unwrap_or(0)
}

/// Write the `Commands:` header and one row per command, in registration order.
pub fn list_commands(runner: &Runner, out: &mut dyn Sink) {
    let palette = runner.palette();
    let width = column_width(runner.commands());

    out.write_line(&palette.label("Commands:"));
    for command in runner.commands() {
        let head = right_pad(&head(command), width);
        out.write_line(&format!(
            "  {}  {}",
            palette.info(&head),
            command.description
        ));
    }
}
