//! Help renderer: introspects the runner to print the command catalog or one
//! command's detail. Registered like any other command under the name `help`.

mod catalog;
mod detail;
mod signature;

pub use catalog::{column_width, head, list_commands};
pub use detail::describe_command;
pub use signature::signature;

use crate::command::{Argv, CommandDescriptor, CommandHandler, Schema};
use crate::error::CommandError;
use crate::output::Sink;
use crate::runner::Runner;
use crate::style::indent;
use async_trait::async_trait;
use std::sync::Arc;

/// Name the help command registers under.
pub const HELP_COMMAND: &str = "help";

/// What to render: one command when `name` is set, otherwise the overview.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderRequest {
    pub name: Option<String>,
}

impl RenderRequest {
    pub fn from_argv(argv: &Argv) -> Self {
        Self {
            name: argv.get("name").map(str::to_string),
        }
    }
}

/// Render help for the request against `runner`.
pub fn render(request: &RenderRequest, runner: &Runner, out: &mut dyn Sink) {
    if let Some(name) = request.name.as_deref().filter(|name| !name.is_empty()) {
        describe_command(name, runner, out);
        return;
    }

    usage(runner, out);
    default_command(runner, out);
    list_commands(runner, out);
    out.blank();

    out.write_line(&runner.palette().label("Help:"));
    for line in indent(&embedded_help(runner), "  ") {
        out.write_line(&line);
    }
}

/// Generic usage block.
pub fn usage(runner: &Runner, out: &mut dyn Sink) {
    out.write_line(&runner.palette().label("Usage:"));
    out.write_line("  command [arguments] [options]");
    out.blank();
}

/// One-line summary of the default command, if any.
pub fn default_command(runner: &Runner, out: &mut dyn Sink) {
    let Some(command) = runner.default_command() else {
        return;
    };
    let palette = runner.palette();
    out.write_line(&palette.label("Default command:"));
    out.write_line(&format!(
        "  {}  {}",
        palette.info(&signature(command)),
        command.description
    ));
    out.blank();
}

/// Extended help text of the help command itself.
pub fn embedded_help(runner: &Runner) -> String {
    let palette = runner.palette();
    [
        format!(
            "The {} command displays help for a given command.",
            palette.info(HELP_COMMAND)
        ),
        String::new(),
        palette.info(&format!("  {} help help", runner.name())),
    ]
    .join("\n")
}

struct HelpHandler;

#[async_trait]
impl CommandHandler for HelpHandler {
    async fn execute(
        &self,
        argv: &Argv,
        runner: &Runner,
        out: &mut (dyn Sink + Send),
    ) -> Result<(), CommandError> {
        render(&RenderRequest::from_argv(argv), runner, out);
        Ok(())
    }
}

/// The `help` command descriptor: one optional `name` argument, no options.
pub fn command() -> CommandDescriptor {
    CommandDescriptor::new(HELP_COMMAND, "Display help for a command", Arc::new(HelpHandler))
        .arg("name", Schema::optional(Schema::string()))
        .help(embedded_help)
}
