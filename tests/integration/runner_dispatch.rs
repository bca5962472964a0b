//! Runner dispatch through the help command.

use super::test_utils::{args, build_command, tool_runner};
use cmdkit::builtin;
use cmdkit::output::BufferSink;
use cmdkit::style::Palette;

#[tokio::test]
async fn test_named_command_receives_positional() {
    let runner = tool_runner(Palette::plain());
    let mut out = BufferSink::new();
    runner.run(&args(&["build", "app"]), &mut out).await.unwrap();
    assert_eq!(out.lines(), &["building app"]);
}

#[tokio::test]
async fn test_help_with_name_routes_to_detail() {
    let runner = tool_runner(Palette::plain());
    let mut out = BufferSink::new();
    runner.run(&args(&["help", "build"]), &mut out).await.unwrap();
    assert_eq!(out.lines()[0], "Description:");
    assert_eq!(out.lines()[4], "  tool build [target]");
}

#[tokio::test]
async fn test_unknown_command_is_not_an_error() {
    let runner = tool_runner(Palette::plain());
    let mut out = BufferSink::new();
    runner.run(&args(&["deploy"]), &mut out).await.unwrap();
    assert_eq!(out.lines()[0], "  I do not know a command named: deploy");
    assert_eq!(out.lines().len(), 5);
}

#[tokio::test]
async fn test_no_arguments_without_default_shows_overview() {
    let runner = tool_runner(Palette::plain());
    let mut out = BufferSink::new();
    runner.run(&[], &mut out).await.unwrap();
    assert_eq!(out.lines()[0], "Usage:");
    assert_eq!(out.lines().last().unwrap(), "    tool help help");
}

#[tokio::test]
async fn test_default_command_takes_leading_option() {
    let runner = tool_runner(Palette::plain()).with_default(build_command());
    let mut out = BufferSink::new();
    runner.run(&args(&["--fast"]), &mut out).await.unwrap();
    assert_eq!(out.lines(), &["building all"]);
}

#[tokio::test]
async fn test_builtin_help_lists_itself_and_version() {
    let runner = builtin::runner("cmdkit", Palette::plain());
    let mut out = BufferSink::new();
    runner.run(&args(&["help", "help"]), &mut out).await.unwrap();
    assert!(out.text().contains("  cmdkit help [name]"));
    assert!(out.text().contains("    cmdkit help help"));
}
