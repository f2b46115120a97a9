//! Integration tests for the exvar binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

/// Command isolated from the user's real settings and backups
fn exvar(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("exvar").unwrap();
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("EXVAR_FILE")
        .env_remove("EXVAR_LOG");
    cmd
}

#[test]
fn test_set_creates_declaration() {
    let dir = tempdir().unwrap();
    let rc_file = dir.path().join(".bashrc");
    fs::write(&rc_file, "alias ll='ls -la'\n").unwrap();

    exvar(dir.path())
        .args(["--file", rc_file.to_str().unwrap(), "set", "FOO", "bar"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FOO"));

    assert_eq!(
        fs::read_to_string(&rc_file).unwrap(),
        "alias ll='ls -la'\nexport FOO=\"bar\"\n"
    );
}

#[test]
fn test_get_prints_unquoted_value() {
    let dir = tempdir().unwrap();
    let rc_file = dir.path().join(".bashrc");
    fs::write(&rc_file, "export PATH=\"/usr/bin\"\nexport FOO=\"1\"\n").unwrap();

    exvar(dir.path())
        .args(["--file", rc_file.to_str().unwrap(), "get", "PATH"])
        .assert()
        .success()
        .stdout("/usr/bin\n");
}

#[test]
fn test_get_missing_fails() {
    let dir = tempdir().unwrap();
    let rc_file = dir.path().join(".bashrc");
    fs::write(&rc_file, "export FOOBAR=1\n").unwrap();

    exvar(dir.path())
        .args(["--file", rc_file.to_str().unwrap(), "get", "FOO"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("FOO not found"));
}

#[test]
fn test_unset_removes_only_target() {
    let dir = tempdir().unwrap();
    let rc_file = dir.path().join(".bashrc");
    fs::write(&rc_file, "export PATH=\"/usr/bin\"\nexport FOO=\"1\"\n").unwrap();

    exvar(dir.path())
        .args(["--file", rc_file.to_str().unwrap(), "--yes", "unset", "FOO"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed FOO"));

    assert_eq!(
        fs::read_to_string(&rc_file).unwrap(),
        "export PATH=\"/usr/bin\"\n"
    );
}

#[test]
fn test_unset_missing_is_informational() {
    let dir = tempdir().unwrap();
    let rc_file = dir.path().join(".bashrc");
    fs::write(&rc_file, "# nothing here\n").unwrap();

    exvar(dir.path())
        .args(["--file", rc_file.to_str().unwrap(), "rm", "FOO"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FOO not found"));
}

#[test]
fn test_set_rejects_invalid_name() {
    let dir = tempdir().unwrap();
    let rc_file = dir.path().join(".bashrc");
    fs::write(&rc_file, "").unwrap();

    exvar(dir.path())
        .args(["--file", rc_file.to_str().unwrap(), "set", "1BAD", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid variable name"));

    assert_eq!(fs::read_to_string(&rc_file).unwrap(), "");
}

#[test]
fn test_list_shows_variables() {
    let dir = tempdir().unwrap();
    let rc_file = dir.path().join(".bashrc");
    fs::write(
        &rc_file,
        "alias gs='git status'\nexport EDITOR=nvim\nexport PAGER=\"less\"\n",
    )
    .unwrap();

    exvar(dir.path())
        .args(["--file", rc_file.to_str().unwrap(), "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("EDITOR"))
        .stdout(predicate::str::contains("less"))
        .stdout(predicate::str::contains("git status").not());
}

#[test]
fn test_file_from_environment_is_created() {
    let dir = tempdir().unwrap();
    let rc_file = dir.path().join("profile.d").join("env.sh");

    exvar(dir.path())
        .env("EXVAR_FILE", &rc_file)
        .args(["set", "BAR", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    assert_eq!(fs::read_to_string(&rc_file).unwrap(), "export BAR=\"2\"\n");
}

#[test]
fn test_default_target_is_bashrc() {
    let dir = tempdir().unwrap();

    exvar(dir.path())
        .args(["set", "EDITOR", "vim"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dir.path().join(".bashrc")).unwrap(),
        "export EDITOR=\"vim\"\n"
    );
}

#[test]
fn test_set_twice_then_backup_list() {
    let dir = tempdir().unwrap();
    let rc_file = dir.path().join(".bashrc");
    fs::write(&rc_file, "export A=\"0\"\n").unwrap();

    for value in ["1", "1"] {
        exvar(dir.path())
            .args(["--file", rc_file.to_str().unwrap(), "set", "A", value])
            .assert()
            .success();
    }
    assert_eq!(fs::read_to_string(&rc_file).unwrap(), "export A=\"1\"\n");

    exvar(dir.path())
        .args(["--file", rc_file.to_str().unwrap(), "backup", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".bashrc"))
        .stdout(predicate::str::contains("Total: 2 backup(s)"));
}

#[test]
fn test_no_backup_flag() {
    let dir = tempdir().unwrap();
    let rc_file = dir.path().join(".bashrc");
    fs::write(&rc_file, "export A=\"0\"\n").unwrap();

    exvar(dir.path())
        .args(["--file", rc_file.to_str().unwrap(), "--no-backup", "set", "A", "1"])
        .assert()
        .success();

    exvar(dir.path())
        .args(["--file", rc_file.to_str().unwrap(), "backup", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No backups found."));
}

#[test]
fn test_backups_kept_per_file() {
    let dir = tempdir().unwrap();
    let bashrc = dir.path().join(".bashrc");
    let zshrc = dir.path().join(".zshrc");
    fs::write(&bashrc, "export B=\"0\"\n").unwrap();
    fs::write(&zshrc, "export Z=\"0\"\n").unwrap();

    exvar(dir.path())
        .args(["--file", bashrc.to_str().unwrap(), "set", "B", "1"])
        .assert()
        .success();

    exvar(dir.path())
        .args(["--file", zshrc.to_str().unwrap(), "backup", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No backups found."));

    // A .bashrc backup id is unknown to .zshrc
    exvar(dir.path())
        .args(["--file", zshrc.to_str().unwrap(), "--yes", "backup", "restore", "bashrc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Backup not found: bashrc"));
    assert_eq!(fs::read_to_string(&zshrc).unwrap(), "export Z=\"0\"\n");
}

#[test]
fn test_backup_restore_and_clean() {
    let dir = tempdir().unwrap();
    let rc_file = dir.path().join(".bashrc");
    fs::write(&rc_file, "export A=\"0\"\n").unwrap();

    exvar(dir.path())
        .args(["--file", rc_file.to_str().unwrap(), "set", "A", "1"])
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&rc_file).unwrap(), "export A=\"1\"\n");

    exvar(dir.path())
        .args(["--file", rc_file.to_str().unwrap(), "--yes", "backup", "restore", ".bashrc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Restoring backup:"));
    assert_eq!(fs::read_to_string(&rc_file).unwrap(), "export A=\"0\"\n");

    // Two backups now, so a bare file-name fragment is ambiguous
    exvar(dir.path())
        .args(["--file", rc_file.to_str().unwrap(), "--yes", "backup", "restore", ".bashrc"])
        .assert()
        .failure();

    exvar(dir.path())
        .args(["--file", rc_file.to_str().unwrap(), "backup", "clean", "--keep", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No old backups to clean."));
}

#[test]
fn test_language_setting() {
    let dir = tempdir().unwrap();
    let settings = dir.path().join(".config").join("exvar");
    fs::create_dir_all(&settings).unwrap();
    fs::write(settings.join("config.toml"), "[ui]\nlanguage = \"zh-TW\"\n").unwrap();
    let rc_file = dir.path().join(".bashrc");
    fs::write(&rc_file, "").unwrap();

    exvar(dir.path())
        .args(["--file", rc_file.to_str().unwrap(), "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("找不到任何變數"));
}
