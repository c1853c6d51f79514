//! Runs the `irlink` binary against graphs written to temporary files.

use irlink_cli::driver::{ModuleGraph, to_json};
use irlink_ir::{ClassKind, IrBuilder, IrModule, IrType};
use std::path::Path;
use std::process::{Command, Output};

fn graph(with_actual: bool) -> ModuleGraph {
    let mut b = IrBuilder::new();
    let mut main = IrModule::new("platform");
    let mut common = IrModule::new("common");
    let platform = b.file(&mut main, "platform.kt", "app");
    let shared = b.file(&mut common, "common.kt", "app");
    let int = b.builtin_class("Int");
    let unit = b.builtin_class("Unit");
    let expect = b.function(shared, "bar", &[("x", IrType::simple(int))], IrType::simple(unit));
    b.expect(expect);
    let base = b.class(shared, "Base", ClassKind::Interface);
    b.expect(base);
    let derived = b.class(shared, "Derived", ClassKind::Class);
    b.super_type(derived, IrType::simple(base));
    if with_actual {
        b.function(platform, "bar", &[("x", IrType::simple(int))], IrType::simple(unit));
        let actual_base = b.class(platform, "Base", ClassKind::Interface);
        b.function(actual_base, "close", &[], IrType::simple(unit));
    }
    ModuleGraph {
        arena: b.into_arena(),
        main,
        dependents: vec![common],
    }
}

fn write_graph(dir: &Path, graph: &ModuleGraph) -> std::path::PathBuf {
    let path = dir.join("graph.json");
    std::fs::write(&path, to_json(graph, true).unwrap()).unwrap();
    path
}

fn irlink(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_irlink"))
        .args(args)
        .env_remove("IRLINK_LOG")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn merged_graph_is_written_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_graph(dir.path(), &graph(true));

    let output = irlink(&[input.to_str().unwrap(), "--verify"]);
    assert_eq!(output.status.code(), Some(0), "{}", String::from_utf8_lossy(&output.stderr));

    let merged: ModuleGraph = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(merged.main.files.len(), 2);
    assert!(merged.dependents[0].files.is_empty());
}

#[test]
fn out_and_outcome_files_are_written() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_graph(dir.path(), &graph(true));
    let out = dir.path().join("merged.json");
    let outcome = dir.path().join("outcome.json");

    let output = irlink(&[
        input.to_str().unwrap(),
        "--out",
        out.to_str().unwrap(),
        "--outcome",
        outcome.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());

    let merged: ModuleGraph =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(merged.main.files.len(), 2);

    let summary: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&outcome).unwrap()).unwrap();
    assert_eq!(summary["synthesized"].as_array().unwrap().len(), 1);
    assert_eq!(summary["movedFiles"], 1);
    assert_eq!(summary["remapping"].as_object().unwrap().len(), 2);
}

#[test]
fn diagnostics_exit_with_one() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_graph(dir.path(), &graph(false));

    let output = irlink(&[input.to_str().unwrap(), "--color", "never"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    // Classifiers are linked before callables, so the interface is reported first.
    assert!(stderr.contains("error IRL1001: Missing actual for expect INTERFACE app.Base"));
    assert!(!stderr.contains("app.bar"));
    assert!(stderr.contains("Found 1 error."));
}

#[test]
fn accumulate_flag_reports_everything() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_graph(dir.path(), &graph(false));

    let output = irlink(&[input.to_str().unwrap(), "--accumulate", "--color", "never"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Missing actual for expect FUN app.bar(x: Int): Unit"));
    assert!(stderr.contains("Missing actual for expect INTERFACE app.Base"));
    assert!(stderr.contains("Found 2 errors."));
}

#[test]
fn config_file_selects_accumulate_mode() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_graph(dir.path(), &graph(false));
    let config = dir.path().join("irlink.json");
    std::fs::write(&config, r#"{ "diagnosticMode": "accumulate" }"#).unwrap();

    let output = irlink(&[
        input.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
        "--color",
        "never",
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Found 2 errors."));
}

#[test]
fn unreadable_input_exits_with_two() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");

    let output = irlink(&[missing.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read module graph"));
}

#[test]
fn malformed_input_exits_with_two() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("graph.json");
    std::fs::write(&input, "not json").unwrap();

    let output = irlink(&[input.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid module graph"));
}
