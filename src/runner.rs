//! Runner: the registry of commands and the dispatch entry point.

use crate::command::{Argv, CommandDescriptor, Schema};
use crate::error::CommandError;
use crate::help::{self, RenderRequest};
use crate::output::Sink;
use crate::style::Palette;
use tracing::{debug, warn};

/// Ordered command collection with an optional default command.
///
/// Built once by the application and shared read-only with every command
/// invocation, including the help renderer.
#[derive(Debug, Clone)]
pub struct Runner {
    name: String,
    commands: Vec<CommandDescriptor>,
    default_command: Option<CommandDescriptor>,
    palette: Palette,
}

impl Runner {
    /// Create an empty runner. `name` is the tool name shown in usage examples.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            commands: Vec::new(),
            default_command: None,
            palette: Palette::plain(),
        }
    }

    /// Register a command. Registration order is listing order.
    pub fn command(mut self, command: CommandDescriptor) -> Self {
        self.commands.push(command);
        self
    }

    /// Command to run when no subcommand is named. It need not also be registered.
    pub fn with_default(mut self, command: CommandDescriptor) -> Self {
        self.default_command = Some(command);
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn commands(&self) -> &[CommandDescriptor] {
        &self.commands
    }

    pub fn default_command(&self) -> Option<&CommandDescriptor> {
        self.default_command.as_ref()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// First registered command with exactly this name.
    pub fn find(&self, name: &str) -> Option<&CommandDescriptor> {
        self.commands.iter().find(|command| command.name == name)
    }

    /// Reject commands with empty names. Duplicate names are allowed; lookup takes the first.
    pub fn validate(&self) -> Result<(), CommandError> {
        let all = self.commands.iter().chain(self.default_command.iter());
        for command in all {
            if command.name.is_empty() {
                return Err(CommandError::InvalidCommand(format!(
                    "command with description '{}' has an empty name",
                    command.description
                )));
            }
        }
        for (i, command) in self.commands.iter().enumerate() {
            if self.commands[..i].iter().any(|c| c.name == command.name) {
                warn!(command = %command.name, "duplicate command name; first registration wins");
            }
        }
        Ok(())
    }

    /// Dispatch raw arguments (without the program name) to a command.
    ///
    /// An unrecognised first argument falls through to the default command when
    /// one is configured, otherwise to help for that name.
    pub async fn run(
        &self,
        args: &[String],
        out: &mut (dyn Sink + Send),
    ) -> Result<(), CommandError> {
        if let Some((first, rest)) = args.split_first() {
            if !first.starts_with("--") {
                if let Some(command) = self.find(first) {
                    debug!(command = %command.name, "dispatching command");
                    let argv = bind_arguments(command, rest);
                    return command.execute(&argv, self, out).await;
                }
                if self.default_command.is_none() {
                    debug!(name = %first, "no command matched; showing help");
                    return self.help_for(Some(first.as_str()), out).await;
                }
            }
        }

        match &self.default_command {
            Some(command) => {
                debug!(command = %command.name, "dispatching default command");
                let argv = bind_arguments(command, args);
                command.execute(&argv, self, out).await
            }
            None => self.help_for(None, out).await,
        }
    }

    async fn help_for(
        &self,
        name: Option<&str>,
        out: &mut (dyn Sink + Send),
    ) -> Result<(), CommandError> {
        match self.find(help::HELP_COMMAND) {
            Some(command) => {
                let mut argv = Argv::new();
                if let Some(name) = name {
                    argv.insert("name", name);
                }
                command.execute(&argv, self, out).await
            }
            None => {
                let request = RenderRequest {
                    name: name.map(str::to_string),
                };
                help::render(&request, self, out);
                Ok(())
            }
        }
    }
}

/// Bind raw tokens to a command's declared arguments and options.
///
/// Positional tokens fill `args` keys in declaration order. `--key=value` and
/// `--key value` bind options; a bare `--key` binds `"true"` when the option is
/// a flag or no value follows. Nothing is validated.
pub fn bind_arguments(command: &CommandDescriptor, tokens: &[String]) -> Argv {
    let mut argv = Argv::new();
    let mut positional = command.args.keys();
    let mut tokens = tokens.iter().peekable();

    while let Some(token) = tokens.next() {
        if let Some(option) = token.strip_prefix("--") {
            if let Some((key, value)) = option.split_once('=') {
                argv.insert(key, value);
                continue;
            }
            let is_flag = command.opts.get(option).is_some_and(Schema::is_flag);
            match tokens.next_if(|next| !is_flag && !next.starts_with("--")) {
                Some(value) => argv.insert(option, value.as_str()),
                None => argv.insert(option, "true"),
            }
        } else if let Some(key) = positional.next() {
            argv.insert(key.as_str(), token.as_str());
        } else {
            debug!(command = %command.name, token = %token, "ignoring extra positional argument");
        }
    }

    argv
}
