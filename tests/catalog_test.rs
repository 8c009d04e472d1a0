//! Integration tests for the built-in catalogs against a recording runner.

use std::fs;
use std::sync::Arc;

use dotstrap::config::Settings;
use dotstrap::environment::FakeEnvironment;
use dotstrap::platform::{resolve, OsKind};
use dotstrap::shell::RecordingRunner;
use dotstrap::steps::{Catalog, DefaultCatalog};
use tempfile::TempDir;

fn dotfiles_tree() -> TempDir {
    let temp = TempDir::new().unwrap();
    for script in ["setup-lazyvim.sh", "setup-zsh.sh", "setup-nvm.sh", "install"] {
        fs::write(temp.path().join(script), "#!/bin/sh\n").unwrap();
    }
    fs::create_dir_all(temp.path().join("nvim").join(".config").join("nvim")).unwrap();
    temp
}

#[test]
fn linux_apt_run_issues_expected_commands() {
    let tree = dotfiles_tree();
    let runner = Arc::new(RecordingRunner::new());
    let catalog = DefaultCatalog::new(&Settings::new(tree.path()), runner.clone());
    let env = FakeEnvironment::new("/home/dev").with_executable("apt");
    let profile = resolve(OsKind::Linux, &env).unwrap();

    for step in catalog.steps(&profile) {
        step.run().unwrap();
    }

    let lines = runner.command_lines();
    assert_eq!(lines[0], "sudo -n apt update");
    assert!(lines.contains(&"sudo -n apt install zsh -y".to_string()));
    assert!(lines.contains(&"sudo -n apt install lazygit -y".to_string()));
    assert!(lines.iter().any(|l| l.starts_with("bash -c") && l.contains("fc-cache")));
    assert!(lines.last().unwrap().ends_with("install"));
}

#[test]
fn linux_privileged_commands_never_prompt_for_a_password() {
    let tree = dotfiles_tree();
    let runner = Arc::new(RecordingRunner::new());
    let catalog = DefaultCatalog::new(&Settings::new(tree.path()), runner.clone());
    let env = FakeEnvironment::new("/home/dev").with_executable("yum");
    let profile = resolve(OsKind::Linux, &env).unwrap();

    for step in catalog.steps(&profile) {
        step.run().unwrap();
    }

    let commands = runner.commands();
    assert!(commands.iter().any(|c| c.program == "sudo"));
    for command in &commands {
        assert_ne!(command.program, "yum", "unprivileged: {}", command);
        if command.program == "sudo" {
            assert_eq!(command.args[0], "-n", "may prompt: {}", command);
        }
        if command.program == "bash" && command.args.first().map(String::as_str) == Some("-c") {
            let script = &command.args[1];
            assert!(
                !script.contains("sudo ") || script.contains("sudo -n "),
                "script may prompt: {}",
                script
            );
        }
    }
}

#[test]
fn linux_as_root_never_uses_sudo() {
    let tree = dotfiles_tree();
    let runner = Arc::new(RecordingRunner::new());
    let catalog = DefaultCatalog::new(&Settings::new(tree.path()), runner.clone());
    let env = FakeEnvironment::new("/root").with_executable("pacman").elevated();
    let profile = resolve(OsKind::Linux, &env).unwrap();

    for step in catalog.steps(&profile) {
        step.run().unwrap();
    }
    assert!(runner.command_lines().iter().all(|l| !l.starts_with("sudo")));
}

#[test]
fn macos_run_skips_homebrew_install_when_present() {
    let tree = dotfiles_tree();
    let runner = Arc::new(RecordingRunner::new());
    let catalog = DefaultCatalog::new(&Settings::new(tree.path()), runner.clone());
    let env = FakeEnvironment::new("/Users/dev").with_executable("brew");
    let profile = resolve(OsKind::MacOs, &env).unwrap();

    let steps = catalog.steps(&profile);
    assert_eq!(steps.len(), 5);
    for step in &steps {
        step.run().unwrap();
    }
    assert!(runner
        .command_lines()
        .iter()
        .all(|l| !l.contains("Homebrew/install")));
}

#[test]
fn windows_run_writes_profile_and_links_config() {
    let tree = dotfiles_tree();
    let home = TempDir::new().unwrap();
    let runner = Arc::new(RecordingRunner::new());
    let catalog = DefaultCatalog::new(&Settings::new(tree.path()), runner.clone());
    let env = FakeEnvironment::new(home.path()).with_executable("scoop");
    let profile = resolve(OsKind::Windows, &env).unwrap();

    let steps = catalog.steps(&profile);
    assert_eq!(steps.len(), 8);
    for step in &steps {
        step.run().unwrap();
    }

    assert!(profile.shell_profile_path.is_file());
    let lines = runner.command_lines();
    assert!(lines.contains(&"scoop install neovim".to_string()));
    assert!(lines.iter().any(|l| l.starts_with("cmd /c mklink /J")));
    assert!(lines.iter().any(|l| l.contains("Install-Module")));
}

#[test]
fn missing_scripts_fail_the_step() {
    let empty = TempDir::new().unwrap();
    let runner = Arc::new(RecordingRunner::new());
    let catalog = DefaultCatalog::new(&Settings::new(empty.path()), runner);
    let env = FakeEnvironment::new("/Users/dev").with_executable("brew");
    let profile = resolve(OsKind::MacOs, &env).unwrap();

    let steps = catalog.steps(&profile);
    assert!(steps[0].run().is_ok());
    let err = steps[1].run().unwrap_err();
    assert!(err.to_string().contains("setup-lazyvim.sh"));
}
