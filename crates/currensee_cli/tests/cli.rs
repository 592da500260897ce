//! End-to-end tests for the `currensee` binary

use std::path::Path;
use std::process::{Command, Output};

fn currensee(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_currensee"))
        .current_dir(dir)
        .env("RUST_LOG", "warn")
        .args(args)
        .output()
        .expect("failed to run currensee")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn hsl_converts_each_argument() {
    let dir = tempfile::tempdir().unwrap();
    let output = currensee(dir.path(), &["hsl", "#FFFFFF", "rgba(0, 0, 0, 0.5)", "nope"]);

    assert!(output.status.success());
    pretty_assertions::assert_eq!(
        stdout(&output),
        "#FFFFFF: 0 0% 100%\nrgba(0, 0, 0, 0.5): 0 0% 0%\nnope: 0 0% 50%\n"
    );
}

#[test]
fn css_without_config_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let output = currensee(dir.path(), &["css", "--scheme", "dark"]);

    assert!(output.status.success());
    let css = stdout(&output);
    assert!(css.starts_with(":root {\n"));
    assert!(css.contains("  --theme-bg: #0F0F12;\n"));
    assert!(css.contains("  --background: 240 9% 6%;\n"));
}

#[test]
fn init_then_toggle_persists_preference() {
    let dir = tempfile::tempdir().unwrap();
    assert!(currensee(dir.path(), &["init"]).status.success());

    let first = currensee(dir.path(), &["toggle"]);
    assert!(first.status.success());
    assert_eq!(stdout(&first).trim(), "dark");

    let second = currensee(dir.path(), &["toggle"]);
    assert_eq!(stdout(&second).trim(), "light");

    let stored = std::fs::read_to_string(dir.path().join(".currensee/theme.toml")).unwrap();
    assert!(stored.contains("theme = \"light\""));
}

#[test]
fn check_fails_on_unparseable_override() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("currensee.toml"),
        "[theme.overrides]\ntint = \"purple-ish\"\n",
    )
    .unwrap();

    let output = currensee(dir.path(), &["check"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--primary"));
}

#[test]
fn toggle_requires_preference_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = currensee(dir.path(), &["toggle"]);
    assert!(!output.status.success());
}
