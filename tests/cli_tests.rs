//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const START: &str = "<!-- Output table (auto generated do not modify) -->";
const END: &str = "<!-- END -->";

const PACKAGE_JSON: &str = r#"{
  "name": "tiny-lib",
  "nameFull": "TinyLib",
  "version": "1.4.0",
  "homepage": "https://example.com/tiny",
  "author": "Jane Doe",
  "license": "MIT",
  "main": "dist/tiny.cjs.js",
  "module": "dist/tiny.esm.js",
  "unpkg": "dist/tiny.umd.js",
  "globalVar": "Tiny"
}"#;

const EXPECTED_TABLE: &str = "| File | Module Type | Transpiled | Source Maps |\n\
| ---- | ----------- | ---------- | ----------- |\n\
| dist/tiny.cjs.js | cjs | Yes | Yes |\n\
| dist/tiny.esm.js | esm | Yes | Yes |\n\
| dist/tiny.umd.js | umd | Yes | Yes |";

fn cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("readme-outputs"));
    cmd.env_remove("ROLLUP_WATCH").env_remove("RUST_LOG");
    cmd
}

fn project(readme: &str) -> TempDir {
    let tmp = TempDir::new().expect("temp project");
    fs::write(tmp.path().join("package.json"), PACKAGE_JSON).expect("write package.json");
    fs::write(tmp.path().join("README.md"), readme).expect("write README");
    tmp
}

fn root_arg(dir: &Path) -> &str {
    dir.to_str().expect("utf8 path")
}

fn stale_readme() -> String {
    format!("# TinyLib\n\n{START}\nold table\n{END}\n\n## Usage\n")
}

#[test]
fn test_cli_version() {
    let mut cmd = cmd();
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("readme-outputs"));
}

#[test]
fn test_cli_help() {
    let mut cmd = cmd();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("README output table"))
        .stdout(predicate::str::contains("update"))
        .stdout(predicate::str::contains("table"))
        .stdout(predicate::str::contains("banner"));
}

#[test]
fn test_update_rewrites_readme_region() {
    let tmp = project(&stale_readme());

    let mut cmd = cmd();
    cmd.args(["update", "--root", root_arg(tmp.path())]);
    cmd.assert().success().stdout(predicate::str::contains("Updated output table"));

    let readme = fs::read_to_string(tmp.path().join("README.md")).expect("read README");
    similar_asserts::assert_eq!(
        readme,
        format!("# TinyLib\n\n{START}\n\n{EXPECTED_TABLE}\n\n{END}\n\n## Usage\n")
    );

    let mut again = self::cmd();
    again.args(["update", "--root", root_arg(tmp.path())]);
    again.assert().success().stdout(predicate::str::contains("is up to date"));
}

#[test]
fn test_check_fails_on_stale_readme_without_writing() {
    let tmp = project(&stale_readme());

    let mut cmd = cmd();
    cmd.args(["update", "--check", "--root", root_arg(tmp.path())]);
    cmd.assert().failure().stderr(predicate::str::contains("out of date"));

    let readme = fs::read_to_string(tmp.path().join("README.md")).expect("read README");
    assert_eq!(readme, stale_readme());
}

#[test]
fn test_check_passes_on_fresh_readme() {
    let tmp = project(&format!("{START}\n\n{EXPECTED_TABLE}\n\n{END}"));

    let mut cmd = cmd();
    cmd.args(["update", "--check", "--root", root_arg(tmp.path())]);
    cmd.assert().success().stdout(predicate::str::contains("is up to date"));
}

#[test]
fn test_update_without_markers_leaves_readme_alone() {
    let tmp = project("# TinyLib\n\nNo generated section.\n");

    let mut cmd = cmd();
    cmd.args(["update", "--root", root_arg(tmp.path())]);
    cmd.assert().success().stdout(predicate::str::contains("Markers not found"));

    let readme = fs::read_to_string(tmp.path().join("README.md")).expect("read README");
    assert_eq!(readme, "# TinyLib\n\nNo generated section.\n");
}

#[test]
fn test_update_missing_readme_fails() {
    let tmp = project("");
    fs::remove_file(tmp.path().join("README.md")).expect("remove README");

    let mut cmd = cmd();
    cmd.args(["update", "--root", root_arg(tmp.path())]);
    cmd.assert().failure().stderr(predicate::str::contains("Failed reading document"));
}

#[test]
fn test_table_prints_to_stdout() {
    let tmp = project("");

    let mut cmd = cmd();
    cmd.args(["table", "--root", root_arg(tmp.path())]);
    cmd.assert().success().stdout(format!("{EXPECTED_TABLE}\n"));
}

#[test]
fn test_table_in_watch_mode_reports_inline_maps_as_absent() {
    let tmp = project("");

    let mut cmd = cmd();
    cmd.args(["table", "--watch", "--root", root_arg(tmp.path())]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("| dist/tiny.cjs.js | cjs | Yes | No |"))
        .stdout(predicate::str::contains("| Yes | Yes |").not());
}

#[test]
fn test_watch_env_var_selects_watch_mode() {
    let tmp = project("");

    let mut cmd = cmd();
    cmd.env("ROLLUP_WATCH", "true");
    cmd.args(["table", "--root", root_arg(tmp.path())]);
    cmd.assert().success().stdout(predicate::str::contains("| dist/tiny.umd.js | umd | Yes | No |"));
}

#[test]
fn test_numeric_watch_env_var_selects_watch_mode() {
    let tmp = project("");

    let mut cmd = cmd();
    cmd.env("ROLLUP_WATCH", "1");
    cmd.args(["table", "--root", root_arg(tmp.path())]);
    cmd.assert().success().stdout(predicate::str::contains("| dist/tiny.umd.js | umd | Yes | No |"));
}

#[test]
fn test_falsey_watch_env_var_keeps_production_mode() {
    let tmp = project("");

    for value in ["", "0", "false", "no", "off"] {
        let mut cmd = cmd();
        cmd.env("ROLLUP_WATCH", value);
        cmd.args(["table", "--root", root_arg(tmp.path())]);
        cmd.assert().success().stdout(format!("{EXPECTED_TABLE}\n"));
    }
}

#[test]
fn test_header_with_wrong_column_count_fails() {
    let tmp = project(&stale_readme());

    for header in [",", "Path,Kind"] {
        let mut cmd = cmd();
        cmd.args(["update", "--header", header, "--root", root_arg(tmp.path())]);
        cmd.assert().failure().stderr(predicate::str::contains("must have 4 columns"));
    }

    let readme = fs::read_to_string(tmp.path().join("README.md")).expect("read README");
    assert_eq!(readme, stale_readme());
}

#[test]
fn test_check_without_markers_warns_on_stderr() {
    let tmp = project("# TinyLib\n");

    let mut cmd = cmd();
    cmd.args(["update", "--check", "--root", root_arg(tmp.path())]);
    cmd.assert().success().stderr(predicate::str::contains("Markers not found"));
}

#[test]
fn test_table_header_override() {
    let tmp = project("");

    let mut cmd = cmd();
    cmd.args(["table", "--header", "Path,Kind,Babel,Maps", "--root", root_arg(tmp.path())]);
    cmd.assert().success().stdout(predicate::str::starts_with("| Path | Kind | Babel | Maps |"));
}

#[test]
fn test_explicit_targets_from_config() {
    let tmp = project("");
    fs::write(
        tmp.path().join("readme-outputs.toml"),
        r#"
[[targets]]
name = "browser"
steps = ["resolve"]

[[targets.outputs]]
file = "dist/tiny.iife.js"
format = "iife"
sourcemap = "hidden"
"#,
    )
    .expect("write config");

    let mut cmd = cmd();
    cmd.args(["table", "--root", root_arg(tmp.path())]);
    cmd.assert().success().stdout(predicate::str::contains("| dist/tiny.iife.js | iife | No | No |"));
}

#[test]
fn test_banner_prints_license_comment() {
    let tmp = project("");

    let mut cmd = cmd();
    cmd.args(["banner", "--root", root_arg(tmp.path())]);
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("/*!\n"))
        .stdout(predicate::str::contains(" * TinyLib v1.4.0 (https://example.com/tiny)"))
        .stdout(predicate::str::contains(" * @license MIT"));
}

#[test]
fn test_missing_package_json_is_reported() {
    let tmp = TempDir::new().expect("temp project");

    let mut cmd = cmd();
    cmd.args(["table", "--root", root_arg(tmp.path())]);
    cmd.assert().failure().stderr(predicate::str::contains("package metadata"));
}
