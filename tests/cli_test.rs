use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_installer(project_root: &Path, extra_args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hook-installer"))
        .current_dir(project_root)
        .args(extra_args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stage_hook(root: &Path) {
    fs::create_dir_all(root.join(".hooks")).unwrap();
    fs::write(root.join(".hooks/pre-commit_LH"), "#!/bin/sh\necho hook").unwrap();
}

#[test]
fn test_no_arguments_installs_and_prints_two_lines() {
    let temp_dir = TempDir::new().unwrap();
    stage_hook(temp_dir.path());

    let output = run_installer(temp_dir.path(), &[]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Setting up git hooks...\nGit hooks installed successfully!\n"
    );
    assert_eq!(
        fs::read(temp_dir.path().join(".git/hooks/pre-commit_LH")).unwrap(),
        b"#!/bin/sh\necho hook"
    );
}

#[test]
fn test_missing_source_exits_non_zero_without_success_line() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_installer(temp_dir.path(), &[]);

    assert!(!output.status.success());
    assert_ne!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("installed successfully"));
    assert!(!String::from_utf8_lossy(&output.stderr).is_empty());
    assert!(!temp_dir.path().join(".git").exists());
}

#[test]
fn test_dry_run_touches_nothing() {
    let temp_dir = TempDir::new().unwrap();
    stage_hook(temp_dir.path());

    let output = run_installer(temp_dir.path(), &["--dry-run"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Would install"));
    assert!(!temp_dir.path().join(".git").exists());
}

#[test]
fn test_invalid_config_exits_with_config_code() {
    let temp_dir = TempDir::new().unwrap();
    stage_hook(temp_dir.path());
    fs::write(
        temp_dir.path().join("hooks.toml"),
        "[hook]\nname = \"../escape\"\n",
    )
    .unwrap();

    let output = run_installer(temp_dir.path(), &["--config", "hooks.toml"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(!temp_dir.path().join(".git").exists());
}

#[test]
fn test_project_root_flag() {
    let temp_dir = TempDir::new().unwrap();
    let project = temp_dir.path().join("project");
    stage_hook(&project);

    let output = run_installer(temp_dir.path(), &["--project-root", "project"]);

    assert!(output.status.success());
    assert!(project.join(".git/hooks/pre-commit_LH").exists());
}

#[cfg(unix)]
#[test]
fn test_unwritable_hooks_dir_exits_with_permission_code() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    stage_hook(temp_dir.path());
    let hooks_dir = temp_dir.path().join(".git/hooks");
    fs::create_dir_all(&hooks_dir).unwrap();
    fs::set_permissions(&hooks_dir, fs::Permissions::from_mode(0o555)).unwrap();

    // Permission bits are not enforced for root.
    let writable_check = hooks_dir.join(".write-check");
    if fs::write(&writable_check, "").is_ok() {
        fs::remove_file(&writable_check).unwrap();
        fs::set_permissions(&hooks_dir, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let output = run_installer(temp_dir.path(), &[]);
    fs::set_permissions(&hooks_dir, fs::Permissions::from_mode(0o755)).unwrap();

    assert_eq!(output.status.code(), Some(3));
    assert!(!String::from_utf8_lossy(&output.stdout).contains("installed successfully"));
    assert!(!hooks_dir.join("pre-commit_LH").exists());
}
