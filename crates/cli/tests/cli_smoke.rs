//! CLI smoke tests for modlayout.
//!
//! These tests run the binary against throwaway source trees and check exit
//! codes and the reported paths and errors.

use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serial_test::serial;
use tempfile::TempDir;

/// Get a Command for the modlayout binary, isolated from the caller's environment.
fn modlayout_cmd() -> Command {
  let mut cmd = cargo_bin_cmd!("modlayout");
  cmd
    .env_remove("MODLAYOUT_SOURCE_ROOT")
    .env_remove("MODLAYOUT_INTERMEDIATES_ROOT");
  cmd
}

/// Create a source tree holding `dirs` and a manifest describing one module.
fn source_tree(dirs: &[&str], manifest: &str) -> TempDir {
  let temp = TempDir::new().unwrap();
  for dir in dirs {
    std::fs::create_dir_all(temp.path().join(dir)).unwrap();
  }
  std::fs::write(temp.path().join("modules.json"), manifest).unwrap();
  temp
}

const MANIFEST: &str = r#"{
  "modules": [
    {
      "dir": "frameworks/base",
      "name": "libfoo",
      "sub_dir": "android_arm64",
      "module_src_dirs": { "local_include_dirs": ["a", "missing", "b"] },
      "src_dirs": { "include_dirs": ["external/zlib"] }
    },
    {
      "dir": "tools",
      "name": "host-tool",
      "module_src_dirs": { "srcs": ["src"] }
    }
  ]
}"#;

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_works() {
  modlayout_cmd()
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("Usage"));
}

#[test]
fn version_flag_works() {
  modlayout_cmd()
    .arg("--version")
    .assert()
    .success()
    .stdout(predicate::str::contains("modlayout"));
}

#[test]
fn subcommand_help_works() {
  for cmd in &["layout", "check", "rel-path", "info"] {
    modlayout_cmd()
      .arg(cmd)
      .arg("--help")
      .assert()
      .success()
      .stdout(predicate::str::contains("Usage"));
  }
}

// =============================================================================
// layout
// =============================================================================

#[test]
fn layout_json_lists_every_output_dir() {
  let output = modlayout_cmd()
    .args(["--output", "json", "--source-root", "/src", "--intermediates-root", "/out/.intermediates"])
    .args(["layout", "--dir", "frameworks/base", "--name", "libfoo", "--sub-dir", "android_arm64"])
    .output()
    .unwrap();
  assert!(output.status.success());

  let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  let out = Path::new(json["out"].as_str().unwrap()).to_path_buf();
  assert!(out.ends_with("frameworks/base/libfoo/android_arm64"));

  for (key, suffix) in [
    ("bin", "bin"),
    ("lib", "lib"),
    ("gen", "gen"),
    ("obj", "obj"),
    ("go_package", "pkg"),
    ("include", "include"),
    ("proto", "proto"),
    ("js_compiled", "js"),
  ] {
    assert_eq!(Path::new(json[key].as_str().unwrap()), out.join(suffix), "{}", key);
  }
  assert!(Path::new(json["src"].as_str().unwrap()).ends_with("src/frameworks/base"));
}

#[test]
fn layout_text_shows_stats() {
  modlayout_cmd()
    .args(["--source-root", "/src", "layout", "--dir", "a", "--name", "b"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Module b"))
    .stdout(predicate::str::contains("include"));
}

// =============================================================================
// check
// =============================================================================

#[test]
fn check_reports_missing_dirs_and_fails() {
  let temp = source_tree(&["frameworks/base/a", "frameworks/base/b", "external/zlib"], MANIFEST);

  modlayout_cmd()
    .arg("--source-root")
    .arg(temp.path())
    .arg("check")
    .arg(temp.path().join("modules.json"))
    .assert()
    .failure()
    .stderr(predicate::str::contains(
      "libfoo: local_include_dirs: module source directory \"missing\" does not exist",
    ))
    .stderr(predicate::str::contains("host-tool: srcs: module source directory \"src\" does not exist"))
    .stderr(predicate::str::contains("2 source directory error(s) in 2 module(s)"));
}

#[test]
fn check_passes_when_everything_exists() {
  let temp = source_tree(
    &[
      "frameworks/base/a",
      "frameworks/base/b",
      "frameworks/base/missing",
      "external/zlib",
      "tools/src",
    ],
    MANIFEST,
  );

  modlayout_cmd()
    .arg("--source-root")
    .arg(temp.path())
    .arg("check")
    .arg(temp.path().join("modules.json"))
    .assert()
    .success()
    .stdout(predicate::str::contains("All source directories exist (2 module(s) checked)"));
}

#[test]
fn check_single_module() {
  let temp = source_tree(&["tools/src"], MANIFEST);

  modlayout_cmd()
    .arg("--source-root")
    .arg(temp.path())
    .args(["--verbose", "check", "--module", "host-tool"])
    .arg(temp.path().join("modules.json"))
    .assert()
    .success()
    .stdout(predicate::str::contains("host-tool: ok"));
}

#[test]
fn check_unknown_module_fails() {
  let temp = source_tree(&[], MANIFEST);

  modlayout_cmd()
    .arg("--source-root")
    .arg(temp.path())
    .args(["check", "--module", "nope"])
    .arg(temp.path().join("modules.json"))
    .assert()
    .failure()
    .stderr(predicate::str::contains("Module not found in manifest: nope"));
}

#[test]
fn check_json_reports_every_error() {
  let temp = source_tree(&["frameworks/base/a"], MANIFEST);

  let output = modlayout_cmd()
    .arg("--source-root")
    .arg(temp.path())
    .args(["--output", "json", "check"])
    .arg(temp.path().join("modules.json"))
    .output()
    .unwrap();
  assert!(!output.status.success());

  let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(json["modules_checked"], 2);
  assert_eq!(json["errors"], 4);

  let libfoo = &json["reports"][0];
  assert_eq!(libfoo["module"], "libfoo");
  let dirs: Vec<_> = libfoo["errors"]
    .as_array()
    .unwrap()
    .iter()
    .map(|e| e["error"]["dir"].as_str().unwrap())
    .collect();
  assert_eq!(dirs, vec!["missing", "b", "external/zlib"]);
  assert_eq!(libfoo["errors"][2]["error"]["kind"], "top_level_dir_missing");
}

#[test]
fn check_nonexistent_manifest_fails() {
  modlayout_cmd()
    .args(["check", "/nonexistent/path/modules.json"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Failed to load module manifest"));
}

// =============================================================================
// rel-path
// =============================================================================

#[test]
#[cfg(unix)]
fn rel_path_inside_source_root() {
  modlayout_cmd()
    .args(["--source-root", "/src", "rel-path", "/src/frameworks/base/foo"])
    .assert()
    .success()
    .stdout(predicate::str::diff("frameworks/base/foo\n"));
}

#[test]
#[cfg(unix)]
fn rel_path_outside_source_root_fails() {
  modlayout_cmd()
    .args(["--source-root", "/src", "rel-path", "/elsewhere/foo"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("is not inside"));
}

// =============================================================================
// info
// =============================================================================

#[test]
#[serial]
#[cfg(unix)]
fn info_uses_environment_roots() {
  modlayout_cmd()
    .env("MODLAYOUT_SOURCE_ROOT", "/env/src")
    .arg("info")
    .assert()
    .success()
    .stdout(predicate::str::contains("/env/src"))
    .stdout(predicate::str::contains("/env/src/out/.intermediates"));
}

#[test]
#[serial]
#[cfg(unix)]
fn flags_override_environment() {
  let output = modlayout_cmd()
    .env("MODLAYOUT_SOURCE_ROOT", "/env/src")
    .env("MODLAYOUT_INTERMEDIATES_ROOT", "/env/out")
    .args(["--output", "json", "--intermediates-root", "/flag/out", "info"])
    .output()
    .unwrap();
  assert!(output.status.success());

  let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(json["source_root"], "/env/src");
  assert_eq!(json["intermediates_root"], "/flag/out");
}
