//! CLI domain: parse, route, and error output only.

mod output;
mod parse;
mod route;

pub use output::map_error;
pub use parse::Cli;
pub use route::RunContext;
