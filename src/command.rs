//! Command descriptors: name, description, argument/option shape, and behavior.
//!
//! A descriptor is a plain record. "Has options" and "has extended help" are
//! presence checks on its fields, not separate types.

use crate::error::CommandError;
use crate::output::Sink;
use crate::runner::Runner;
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::Arc;

/// Value schema for an argument or option.
///
/// The help renderer only reads key sets; the runner consults [`Schema::is_flag`]
/// when mapping bare `--key` tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Schema {
    String,
    Boolean,
    Number,
    Optional(Box<Schema>),
}

impl Schema {
    pub fn string() -> Self {
        Schema::String
    }

    pub fn boolean() -> Self {
        Schema::Boolean
    }

    pub fn number() -> Self {
        Schema::Number
    }

    pub fn optional(inner: Schema) -> Self {
        Schema::Optional(Box::new(inner))
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, Schema::Optional(_))
    }

    /// True for boolean schemas, optional or not.
    pub fn is_flag(&self) -> bool {
        match self {
            Schema::Boolean => true,
            Schema::Optional(inner) => inner.is_flag(),
            _ => false,
        }
    }
}

/// Declaration-ordered map from argument or option name to schema.
pub type SchemaMap = IndexMap<String, Schema>;

/// Parsed arguments handed to a command, in binding order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Argv {
    values: IndexMap<String, String>,
}

impl Argv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Argv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut argv = Argv::new();
        for (key, value) in iter {
            argv.insert(key, value);
        }
        argv
    }
}

/// Deferred producer of a command's extended help text.
pub type HelpFn = Arc<dyn Fn(&Runner) -> String + Send + Sync>;

/// Behavior of a command. Async to match the runner's dispatch loop.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn execute(
        &self,
        argv: &Argv,
        runner: &Runner,
        out: &mut (dyn Sink + Send),
    ) -> Result<(), CommandError>;
}

/// Adapts a synchronous closure into a [`CommandHandler`].
pub struct FnHandler<F>(F);

#[async_trait]
impl<F> CommandHandler for FnHandler<F>
where
    F: Fn(&Argv, &Runner, &mut (dyn Sink + Send)) -> Result<(), CommandError> + Send + Sync,
{
    async fn execute(
        &self,
        argv: &Argv,
        runner: &Runner,
        out: &mut (dyn Sink + Send),
    ) -> Result<(), CommandError> {
        (self.0)(argv, runner, out)
    }
}

/// Wrap a closure as a shareable handler.
pub fn handler_fn<F>(f: F) -> Arc<dyn CommandHandler>
where
    F: Fn(&Argv, &Runner, &mut (dyn Sink + Send)) -> Result<(), CommandError>
        + Send
        + Sync
        + 'static,
{
    Arc::new(FnHandler(f))
}

/// One invocable subcommand.
#[derive(Clone)]
pub struct CommandDescriptor {
    pub name: String,
    pub description: String,
    pub args: SchemaMap,
    pub opts: SchemaMap,
    pub help: Option<HelpFn>,
    handler: Arc<dyn CommandHandler>,
}

impl CommandDescriptor {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        handler: Arc<dyn CommandHandler>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            args: SchemaMap::new(),
            opts: SchemaMap::new(),
            help: None,
            handler,
        }
    }

    /// Declare a positional argument. Declaration order is binding order.
    pub fn arg(mut self, key: impl Into<String>, schema: Schema) -> Self {
        self.args.insert(key.into(), schema);
        self
    }

    pub fn opt(mut self, key: impl Into<String>, schema: Schema) -> Self {
        self.opts.insert(key.into(), schema);
        self
    }

    pub fn help<F>(mut self, help: F) -> Self
    where
        F: Fn(&Runner) -> String + Send + Sync + 'static,
    {
        self.help = Some(Arc::new(help));
        self
    }

    pub fn has_options(&self) -> bool {
        !self.opts.is_empty()
    }

    /// Extended help, if the command provides any.
    pub fn help_text(&self, runner: &Runner) -> Option<String> {
        self.help.as_ref().map(|help| help(runner))
    }

    pub async fn execute(
        &self,
        argv: &Argv,
        runner: &Runner,
        out: &mut (dyn Sink + Send),
    ) -> Result<(), CommandError> {
        self.handler.execute(argv, runner, out).await
    }
}

impl std::fmt::Debug for CommandDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandDescriptor")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("args", &self.args)
            .field("opts", &self.opts)
            .field("help", &self.help.is_some())
            .finish()
    }
}
