use crate::args::{CliArgs, ColorChoice};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn parses_input_and_flags() {
    let args = CliArgs::parse_from([
        "irlink",
        "graph.json",
        "--accumulate",
        "--verify",
        "-o",
        "merged.json",
        "--config",
        "irlink.json",
    ]);
    assert_eq!(args.input, PathBuf::from("graph.json"));
    assert_eq!(args.out, Some(PathBuf::from("merged.json")));
    assert_eq!(args.config, Some(PathBuf::from("irlink.json")));
    assert!(args.accumulate);
    assert!(args.verify);
    assert!(!args.pretty);
    assert_eq!(args.color, ColorChoice::Auto);
}

#[test]
fn input_is_required() {
    assert!(CliArgs::try_parse_from(["irlink"]).is_err());
}

#[test]
fn color_choice_parses_and_resolves() {
    let args = CliArgs::parse_from(["irlink", "g.json", "--color", "never"]);
    assert_eq!(args.color, ColorChoice::Never);
    assert!(!ColorChoice::Never.enabled(true));
    assert!(ColorChoice::Always.enabled(false));
    assert!(ColorChoice::Auto.enabled(true));
    assert!(!ColorChoice::Auto.enabled(false));
}
