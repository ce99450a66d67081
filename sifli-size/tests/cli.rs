#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const REFERENCE_REPORT: &str = "Memory region    Used Size    Region Size    %age Used\n\
                                RAM:             250 B    20.0 KB    1.22%\n\
                                FLASH:           1200 B    128.0 KB    0.92%\n";

/// Writes an executable shell script standing in for binutils `size`.
fn mock_tool(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("mock-size");
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}

/// A mock that prints Berkeley output for its argument and leaves a marker
/// file behind so tests can tell whether it ran.
fn berkeley_tool(dir: &TempDir) -> PathBuf {
    let marker = dir.path().join("invoked");
    mock_tool(
        dir,
        &format!(
            "touch '{}'\n\
             printf '   text\\t   data\\t    bss\\t    dec\\t    hex\\tfilename\\n'\n\
             printf '  1000   200    50  1250  4E2 %s\\n' \"$1\"",
            marker.display()
        ),
    )
}

fn invoked(dir: &TempDir) -> bool {
    dir.path().join("invoked").exists()
}

fn sifli_size(tool: &Path) -> Command {
    let mut cmd = Command::cargo_bin("sifli-size").unwrap();
    cmd.arg("--tool").arg(tool);
    cmd
}

#[test]
fn prints_reference_report() {
    let dir = TempDir::new().unwrap();
    let tool = berkeley_tool(&dir);

    sifli_size(&tool)
        .arg("fw.elf")
        .assert()
        .success()
        .stdout(REFERENCE_REPORT);
    assert!(invoked(&dir));
}

#[test]
fn missing_argument_prints_usage_and_exits_1() {
    let dir = TempDir::new().unwrap();
    let tool = berkeley_tool(&dir);

    sifli_size(&tool)
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Usage"));
    assert!(!invoked(&dir));
}

#[test]
fn extra_argument_prints_usage_and_exits_1() {
    let dir = TempDir::new().unwrap();
    let tool = berkeley_tool(&dir);

    sifli_size(&tool)
        .args(["fw.elf", "other.elf"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Usage"));
    assert!(!invoked(&dir));
}

#[test]
fn help_exits_successfully() {
    Command::cargo_bin("sifli-size")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("<EXECUTABLE>"));
}

#[test]
fn missing_tool_fails_with_execution_error() {
    let dir = TempDir::new().unwrap();

    sifli_size(&dir.path().join("no-such-size"))
        .arg("fw.elf")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("execution error"));
}

#[test]
fn failing_tool_fails_with_execution_error() {
    let dir = TempDir::new().unwrap();
    let tool = mock_tool(&dir, "echo \"size: '$1': No such file\" >&2\nexit 1");

    sifli_size(&tool)
        .arg("fw.elf")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("No such file"))
        .stderr(predicate::str::contains("exited with"));
}

#[test]
fn malformed_output_fails_with_format_error() {
    let dir = TempDir::new().unwrap();
    let tool = mock_tool(&dir, "echo '1000 200 50'");

    sifli_size(&tool)
        .arg("fw.elf")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("format error"));
}

#[test]
fn profile_file_overrides_region_sizes() {
    let dir = TempDir::new().unwrap();
    let tool = berkeley_tool(&dir);
    let profile = dir.path().join("profile.toml");
    fs::write(&profile, "ram_size_bytes = 1000\nflash_size_bytes = 2048\n").unwrap();

    sifli_size(&tool)
        .arg("--profile")
        .arg(&profile)
        .arg("fw.elf")
        .assert()
        .success()
        .stdout(
            "Memory region    Used Size    Region Size    %age Used\n\
             RAM:             250 B    0.9765625 KB    25.00%\n\
             FLASH:           1200 B    2.0 KB    58.59%\n",
        );
}

#[test]
fn invalid_profile_is_rejected_before_running_tool() {
    let dir = TempDir::new().unwrap();
    let tool = berkeley_tool(&dir);
    let profile = dir.path().join("profile.toml");
    fs::write(&profile, "flash_size_bytes = 0\n").unwrap();

    sifli_size(&tool)
        .arg("--profile")
        .arg(&profile)
        .arg("fw.elf")
        .assert()
        .failure()
        .stderr(predicate::str::contains("FLASH region size"));
    assert!(!invoked(&dir));
}

#[test]
fn verbose_logging_stays_off_stdout() {
    let dir = TempDir::new().unwrap();
    let tool = berkeley_tool(&dir);

    sifli_size(&tool)
        .args(["-vv", "fw.elf"])
        .assert()
        .success()
        .stdout(REFERENCE_REPORT)
        .stderr(predicate::str::contains("running size tool"));
}
