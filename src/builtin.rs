//! Built-in commands shipped with the `cmdkit` binary.

use crate::command::{handler_fn, CommandDescriptor};
use crate::help;
use crate::runner::Runner;
use crate::style::Palette;

/// `version`: print the tool name and crate version.
pub fn version() -> CommandDescriptor {
    CommandDescriptor::new(
        "version",
        "Print the version",
        handler_fn(|_, runner, out| {
            out.write_line(&format!("{} {}", runner.name(), env!("CARGO_PKG_VERSION")));
            Ok(())
        }),
    )
}

/// Runner with `help` and `version` registered and `help` as the default command.
pub fn runner(name: impl Into<String>, palette: Palette) -> Runner {
    Runner::new(name)
        .with_palette(palette)
        .command(help::command())
        .command(version())
        .with_default(help::command())
}
