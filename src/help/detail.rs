//! Detailed help for a single command.

use super::catalog::list_commands;
use super::signature::signature;
use crate::output::Sink;
use crate::runner::Runner;
use crate::style::indent;
use tracing::debug;

/// Render description, usage, options, and extended help for `name`.
///
/// Options and Help sections are omitted entirely when the command has none.
/// An unknown name prints a notice followed by the full catalog.
pub fn describe_command(name: &str, runner: &Runner, out: &mut dyn Sink) {
    let palette = runner.palette();

    let Some(command) = runner.find(name) else {
        debug!(name = %name, "help requested for unknown command");
        out.write_line(&format!("  I do not know a command named: {}", name));
        out.blank();
        list_commands(runner, out);
        return;
    };

    out.write_line(&palette.label("Description:"));
    out.write_line(&format!("  {}", command.description));
    out.blank();

    let usage = format!("{} {} {}", runner.name(), command.name, signature(command));
    out.write_line(&palette.label("Usage:"));
    out.write_line(&format!("  {}", palette.info(usage.trim_end())));
    out.blank();

    if command.has_options() {
        out.write_line(&palette.label("Options:"));
        for key in command.opts.keys() {
            out.write_line(&format!("  {}", palette.info(&format!("--{}", key))));
        }
        out.blank();
    }

    if let Some(help) = command.help_text(runner) {
        out.write_line(&palette.label("Help:"));
        for line in indent(&help, "  ") {
            out.write_line(&line);
        }
    }
}
