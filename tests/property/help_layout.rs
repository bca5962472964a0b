//! Property-based tests for signature and catalog layout

use cmdkit::command::{handler_fn, CommandDescriptor, Schema};
use cmdkit::help::{column_width, head, list_commands, signature};
use cmdkit::output::BufferSink;
use cmdkit::runner::Runner;
use cmdkit::style::{visible_width, Palette};
use proptest::prelude::*;

fn descriptor(name: &str, args: &[String]) -> CommandDescriptor {
    args.iter().fold(
        CommandDescriptor::new(name, "desc", handler_fn(|_, _, _| Ok(()))),
        |command, arg| command.arg(arg.as_str(), Schema::string()),
    )
}

fn unique(keys: Vec<String>) -> Vec<String> {
    let mut seen = Vec::new();
    for key in keys {
        if !seen.contains(&key) {
            seen.push(key);
        }
    }
    seen
}

/// Signature is the bracketed key sequence, in declaration order
#[test]
fn test_signature_brackets_every_key_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&prop::collection::vec("[a-z]{1,8}", 0..6), |keys| {
            let keys = unique(keys);
            let command = descriptor("cmd", &keys);
            let expected = keys
                .iter()
                .map(|k| format!("[{}]", k))
                .collect::<Vec<_>>()
                .join(" ");
            prop_assert_eq!(signature(&command), expected);
            Ok(())
        })
        .unwrap();
}

/// Column width is the widest plain head, whatever the palette
#[test]
fn test_column_width_ignores_styling_property() {
    let mut runner = proptest::test_runner::TestRunner::default();
    let commands = prop::collection::vec(
        ("[a-z]{1,10}", prop::collection::vec("[a-z]{1,6}", 0..4)),
        1..6,
    );

    runner
        .run(&commands, |specs| {
            let descriptors: Vec<CommandDescriptor> = specs
                .iter()
                .map(|(name, args)| descriptor(name, &unique(args.clone())))
                .collect();
            let widest = descriptors.iter().map(|d| head(d).len()).max().unwrap_or(0);
            prop_assert_eq!(column_width(&descriptors), widest);

            let styled = descriptors
                .iter()
                .cloned()
                .fold(Runner::new("tool").with_palette(Palette::ansi()), Runner::command);
            let mut out = BufferSink::new();
            list_commands(&styled, &mut out);

            prop_assert_eq!(out.lines().len(), descriptors.len() + 1);
            for (line, command) in out.lines()[1..].iter().zip(&descriptors) {
                let plain = strip_ansi_escapes::strip_str(line);
                prop_assert_eq!(visible_width(line), 2 + widest + 2 + command.description.len());
                let prefix = format!("  {}", command.name);
                prop_assert!(plain.starts_with(&prefix));
            }
            Ok(())
        })
        .unwrap();
}
