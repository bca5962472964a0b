//! End-to-end help rendering against a small registry.

use super::test_utils::{build_command, tool_runner};
use cmdkit::command::{handler_fn, CommandDescriptor, Schema};
use cmdkit::help::{self, RenderRequest};
use cmdkit::output::BufferSink;
use cmdkit::runner::Runner;
use cmdkit::style::Palette;

const CATALOG: [&str; 3] = [
    "Commands:",
    "  build [target]  Build it",
    "  help [name]     Display help for a command",
];

fn render(runner: &Runner, name: Option<&str>) -> BufferSink {
    let mut out = BufferSink::new();
    let request = RenderRequest {
        name: name.map(str::to_string),
    };
    help::render(&request, runner, &mut out);
    out
}

#[test]
fn test_overview_lists_catalog_and_embedded_help() {
    let out = render(&tool_runner(Palette::plain()), None);

    let mut expected = vec!["Usage:", "  command [arguments] [options]", ""];
    expected.extend(CATALOG);
    expected.extend([
        "",
        "Help:",
        "  The help command displays help for a given command.",
        "",
        "    tool help help",
    ]);
    assert_eq!(out.lines(), expected.as_slice());
}

#[test]
fn test_unknown_command_recovers_with_catalog() {
    let out = render(&tool_runner(Palette::plain()), Some("deploy"));

    let mut expected = vec!["  I do not know a command named: deploy", ""];
    expected.extend(CATALOG);
    assert_eq!(out.lines(), expected.as_slice());
}

#[test]
fn test_detail_sections_follow_fixed_order() {
    let deploy = CommandDescriptor::new("deploy", "Ship it", handler_fn(|_, _, _| Ok(())))
        .arg("env", Schema::string())
        .arg("version", Schema::optional(Schema::string()))
        .opt("dry-run", Schema::boolean())
        .opt("region", Schema::string())
        .help(|runner: &Runner| format!("Deploys a build.\n{} deploy prod", runner.name()));
    let runner = tool_runner(Palette::plain()).command(deploy);

    let out = render(&runner, Some("deploy"));
    assert_eq!(
        out.lines(),
        &[
            "Description:",
            "  Ship it",
            "",
            "Usage:",
            "  tool deploy [env] [version]",
            "",
            "Options:",
            "  --dry-run",
            "  --region",
            "",
            "Help:",
            "  Deploys a build.",
            "  tool deploy prod",
        ]
    );
}

#[test]
fn test_detail_without_options_or_help() {
    let out = render(&tool_runner(Palette::plain()), Some("build"));
    assert_eq!(
        out.lines(),
        &["Description:", "  Build it", "", "Usage:", "  tool build [target]", ""]
    );
}

#[test]
fn test_default_command_summary_precedes_catalog() {
    let runner = tool_runner(Palette::plain()).with_default(build_command());
    let out = render(&runner, None);
    assert_eq!(
        &out.lines()[3..9],
        &[
            "Default command:",
            "  [target]  Build it",
            "",
            CATALOG[0],
            CATALOG[1],
            CATALOG[2],
        ]
    );
}

#[test]
fn test_styled_catalog_matches_plain_layout() {
    let plain = render(&tool_runner(Palette::plain()), Some("deploy"));
    let styled = render(&tool_runner(Palette::ansi()), Some("deploy"));

    assert!(styled.text().contains('\u{1b}'));
    let stripped: Vec<String> = styled
        .lines()
        .iter()
        .map(|line| strip_ansi_escapes::strip_str(line))
        .collect();
    assert_eq!(plain.lines(), stripped.as_slice());
}
