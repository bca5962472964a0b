//! Shared fixtures: the `tool` runner used across scenarios.

use cmdkit::command::{handler_fn, CommandDescriptor, Schema};
use cmdkit::help;
use cmdkit::runner::Runner;
use cmdkit::style::Palette;

pub fn build_command() -> CommandDescriptor {
    CommandDescriptor::new(
        "build",
        "Build it",
        handler_fn(|argv, _, out| {
            out.write_line(&format!("building {}", argv.get("target").unwrap_or("all")));
            Ok(())
        }),
    )
    .arg("target", Schema::string())
}

/// `tool` with `build` and `help`, no default command.
pub fn tool_runner(palette: Palette) -> Runner {
    Runner::new("tool")
        .with_palette(palette)
        .command(build_command())
        .command(help::command())
}

pub fn args(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}
