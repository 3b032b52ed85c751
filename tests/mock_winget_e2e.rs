#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn pkgdeck() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pkgdeck"))
}

/// Temp config dir plus a scripted `winget` that logs every invocation.
struct TestEnv {
    tmp: TempDir,
    config_dir: PathBuf,
    mock_bin: PathBuf,
    log_file: PathBuf,
}

impl TestEnv {
    fn new() -> Self {
        let tmp = tempfile::tempdir().expect("tempdir");
        let root = tmp.path().to_path_buf();

        let config_dir = root.join("config");
        let mock_bin_dir = root.join("bin");
        fs::create_dir_all(&config_dir).expect("mkdir config");
        fs::create_dir_all(&mock_bin_dir).expect("mkdir bin dir");

        fs::write(config_dir.join("settings.kdl"), "progress \"off\"\n").expect("write settings");

        let log_file = root.join("winget.log");
        let mock_bin = mock_bin_dir.join("winget");
        let script = r#"#!/usr/bin/env bash
set -uo pipefail
echo "$*" >> "$MOCK_WINGET_LOG"
sub="${1:-}"
case "$sub" in
  search)
    echo "Name                 Id                           Version  Source"
    echo "----------------------------------------------------------------"
    echo "Visual Studio Code   Microsoft.VisualStudioCode   1.95.0   winget"
    echo "Contoso Tool         Contoso.Tool                 0.1.0    winget"
    ;;
  list)
    if [ "${2:-}" = "--id" ]; then
      if [ "${3:-}" = "Git.Git" ]; then
        echo "Git   Git.Git   2.47.0"
      else
        echo "No installed package found matching input criteria."
      fi
    else
      echo "Git                  Git.Git                      2.47.0"
      echo "Mozilla Firefox      Mozilla.Firefox              131.0"
    fi
    ;;
  install|upgrade|uninstall)
    if [ "${3:-}" = "Broken.Pkg" ]; then
      echo "Installer failed"
      exit 1
    fi
    echo "Successfully completed $sub"
    ;;
esac
exit 0
"#;
        fs::write(&mock_bin, script).expect("write mock binary");

        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&mock_bin).expect("metadata").permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&mock_bin, perms).expect("chmod");
        }

        Self {
            tmp,
            config_dir,
            mock_bin,
            log_file,
        }
    }

    fn command(&self) -> Command {
        let mut cmd = pkgdeck();
        cmd.current_dir(self.tmp.path())
            .env("PKGDECK_CONFIG_DIR", &self.config_dir)
            .env("MOCK_WINGET_LOG", &self.log_file)
            .env("NO_COLOR", "1")
            .arg("--binary")
            .arg(&self.mock_bin);
        cmd
    }

    fn invocations(&self) -> Vec<String> {
        fs::read_to_string(&self.log_file)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

#[test]
fn e2e_search_lists_parsed_rows() {
    let env = TestEnv::new();

    env.command()
        .args(["search", "code"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Microsoft.VisualStudioCode"))
        .stdout(predicate::str::contains("Contoso Tool"));

    assert_eq!(env.invocations(), vec!["search code"]);
}

#[test]
fn e2e_search_json_contract() {
    let env = TestEnv::new();

    let output = env
        .command()
        .args(["search", "code", "--json"])
        .output()
        .expect("run search");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(json["command"], "search");
    let ids: Vec<&str> = json["data"]
        .as_array()
        .expect("data array")
        .iter()
        .filter_map(|r| r["Id"].as_str())
        .collect();
    assert!(ids.contains(&"Microsoft.VisualStudioCode"));
    assert!(ids.contains(&"Contoso.Tool"));
    assert!(json["data"][0]["Category"] == "Winget");
}

#[test]
fn e2e_search_query_is_not_interpreted_by_shell() {
    let env = TestEnv::new();

    env.command()
        .args(["search", "code; touch pwned $(touch pwned2)"])
        .assert()
        .success();

    assert!(!env.tmp.path().join("pwned").exists());
    assert!(!env.tmp.path().join("pwned2").exists());
    assert_eq!(
        env.invocations(),
        vec!["search code; touch pwned $(touch pwned2)"]
    );
}

#[test]
fn e2e_installed_filter() {
    let env = TestEnv::new();

    env.command()
        .args(["installed", "--filter", "firefox"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mozilla.Firefox"))
        .stdout(predicate::str::contains("Git.Git").not());
}

#[test]
fn e2e_catalog_with_search_injects_results() {
    let env = TestEnv::new();

    env.command()
        .args(["catalog", "--with-search", "code", "--category", "Search Results"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contoso.Tool"))
        .stdout(predicate::str::contains("Valve.Steam").not());
}

#[test]
fn e2e_install_upgrades_installed_and_installs_missing() {
    let env = TestEnv::new();

    env.command()
        .args(["install", "Git.Git", "Valve.Steam"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[  0%] Installing/Updating Git.Git..."))
        .stdout(predicate::str::contains("[ 60%] Installing/Updating done for Valve.Steam"))
        .stdout(predicate::str::contains("[100%] Installing/Updating Completed"))
        .stdout(predicate::str::contains("Finished: Done"));

    let calls = env.invocations();
    let flags = "--exact --silent --accept-package-agreements --accept-source-agreements";
    assert_eq!(
        calls,
        vec![
            "list --id Git.Git --exact".to_string(),
            format!("upgrade --id Git.Git {}", flags),
            "list --id Valve.Steam --exact".to_string(),
            format!("install --id Valve.Steam {}", flags),
        ]
    );
}

#[test]
fn e2e_uninstall_batch() {
    let env = TestEnv::new();

    env.command()
        .args(["uninstall", "Discord.Discord"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Uninstalling done for Discord.Discord"))
        .stdout(predicate::str::contains("[100%] Uninstalling Completed"));

    assert_eq!(
        env.invocations(),
        vec!["uninstall --id Discord.Discord --exact --silent"]
    );
}

#[test]
fn e2e_non_zero_exit_does_not_abort_batch() {
    let env = TestEnv::new();

    env.command()
        .args(["install", "Broken.Pkg", "Valve.Steam"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Installing/Updating done for Broken.Pkg"))
        .stdout(predicate::str::contains("Installing/Updating done for Valve.Steam"));
}

#[test]
fn e2e_invalid_identifier_reported_and_skipped() {
    let env = TestEnv::new();

    env.command()
        .args(["uninstall", "  ", "Discord.Discord"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Error for   : Package identifier cannot be empty"))
        .stdout(predicate::str::contains("Uninstalling done for Discord.Discord"));

    assert_eq!(
        env.invocations(),
        vec!["uninstall --id Discord.Discord --exact --silent"]
    );
}

#[test]
fn e2e_install_json_events() {
    let env = TestEnv::new();

    let output = env
        .command()
        .args(["install", "Valve.Steam", "--json"])
        .output()
        .expect("run install");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf8");
    let events: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("json line"))
        .collect();

    assert_eq!(events.len(), 4);
    assert_eq!(events[0]["event"], "progress");
    assert_eq!(events[0]["data"]["message"], "Installing/Updating Valve.Steam...");
    assert_eq!(events[2]["data"]["percent"], 100);
    assert_eq!(events[3]["event"], "finished");
    assert_eq!(events[3]["data"], "Done");
}
