// ABOUTME: Integration tests for the envssh CLI commands.
// ABOUTME: Validates --help, init, and ssh dry runs against a temporary config.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const CONFIG: &str = r#"
ssh_user: alice
setup_path: /src/dp-setup
ci_path: /src/dp-ci
environments:
  - name: sandbox
    profile: dp-sandbox
    user: ec2-user
    instances:
      - name: sandbox-web-1
        ip: 10.30.1.10
        id: i-0aaa
        groups: [web]
  - name: develop
    profile: development
    instances:
      - name: develop-web-1
        ip: 10.20.1.10
        id: i-0ddd
        groups: [web]
"#;

fn envssh_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("envssh"))
}

fn config_dir(config: &str) -> tempfile::TempDir {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("envssh.yml"), config).unwrap();
    temp_dir
}

#[test]
fn help_shows_commands() {
    envssh_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ssh"))
        .stdout(predicate::str::contains("environments"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn init_creates_config_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("envssh.yml");

    envssh_cmd()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .success();

    assert!(config_path.exists(), "envssh.yml should be created");
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("environments:"));
}

#[test]
fn init_refuses_to_overwrite_existing_config() {
    let temp_dir = config_dir("existing: config");

    envssh_cmd()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn dry_run_direct_ip_prints_command() {
    let temp_dir = config_dir(CONFIG);

    envssh_cmd()
        .current_dir(temp_dir.path())
        .args(["ssh", "develop", "--dry-run", "-p", "8080", "-p", "9000:db:5432", "-vv"])
        .args(["--", "-t", "uptime"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Launching SSH connection to develop"))
        .stdout(predicate::str::contains(
            "ssh -F ssh.cfg -L 8080:localhost:8080 -L 9000:db:5432 -v -v alice@10.20.1.10 -t uptime",
        ))
        .stdout(predicate::str::contains("/src/dp-setup/ansible"));
}

#[test]
fn dry_run_instance_id_sets_profile() {
    let temp_dir = config_dir(CONFIG);

    envssh_cmd()
        .current_dir(temp_dir.path())
        .args(["ssh", "sandbox", "web", "--dry-run", "-p", "8080"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "AWS_PROFILE=dp-sandbox ssh -F ssh.cfg ec2-user@i-0aaa",
        ))
        .stdout(predicate::str::contains("-L").not());
}

#[test]
fn user_flag_overrides_config() {
    let temp_dir = config_dir(CONFIG);

    envssh_cmd()
        .current_dir(temp_dir.path())
        .args(["ssh", "develop", "--dry-run", "--user", "bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bob@10.20.1.10"));
}

#[test]
fn missing_user_fails_without_launching() {
    let config = CONFIG.replace("ssh_user: alice\n", "");
    let temp_dir = config_dir(&config);

    envssh_cmd()
        .current_dir(temp_dir.path())
        .args(["ssh", "develop", "--dry-run"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Launching").not())
        .stderr(predicate::str::contains("no ssh_user is defined"))
        .stderr(predicate::str::contains("missing `ssh_user`"))
        .stderr(predicate::str::contains("WARN").not());
}

#[test]
fn invalid_port_forward_names_spec() {
    let temp_dir = config_dir(CONFIG);

    envssh_cmd()
        .current_dir(temp_dir.path())
        .args(["ssh", "develop", "--dry-run", "-p", "8080", "-p", "80:"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("ssh -F").not())
        .stderr(predicate::str::contains(
            "\"80:\" is not a valid port forwarding argument",
        ));
}

#[test]
fn unknown_environment_fails() {
    let temp_dir = config_dir(CONFIG);

    envssh_cmd()
        .current_dir(temp_dir.path())
        .args(["ssh", "staging"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown environment: staging"));
}

#[test]
fn json_dry_run_emits_invocation() {
    let temp_dir = config_dir(CONFIG);

    let assert = envssh_cmd()
        .current_dir(temp_dir.path())
        .args(["--json", "ssh", "sandbox", "--dry-run"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(value["program"], "ssh");
    assert_eq!(value["args"][2], "ec2-user@i-0aaa");
    assert_eq!(value["env"][0][0], "AWS_PROFILE");
}

#[test]
fn environments_lists_instances() {
    let temp_dir = config_dir(CONFIG);

    envssh_cmd()
        .current_dir(temp_dir.path())
        .arg("environments")
        .assert()
        .success()
        .stdout(predicate::str::contains("sandbox (dp-sandbox, 1 instance(s))"))
        .stdout(predicate::str::contains("Name: develop-web-1"));
}

#[test]
fn explicit_config_path() {
    let temp_dir = config_dir(CONFIG);
    let other_dir = tempfile::tempdir().unwrap();

    envssh_cmd()
        .current_dir(other_dir.path())
        .arg("--config")
        .arg(temp_dir.path().join("envssh.yml"))
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("profile: dp-sandbox"));
}

const ENV_USER_CONFIG: &str = r#"
ssh_user: { env: ENVSSH_CLI_TEST_USER, default: alice }
setup_path: /src/dp-setup
ci_path: /src/dp-ci
environments:
  - name: develop
    profile: development
"#;

#[test]
fn config_shows_user_from_default() {
    let temp_dir = config_dir(ENV_USER_CONFIG);

    envssh_cmd()
        .current_dir(temp_dir.path())
        .env_remove("ENVSSH_CLI_TEST_USER")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("resolved ssh_user: alice"));
}

#[test]
fn config_shows_user_from_environment() {
    let temp_dir = config_dir(ENV_USER_CONFIG);

    envssh_cmd()
        .current_dir(temp_dir.path())
        .env("ENVSSH_CLI_TEST_USER", "carol")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("resolved ssh_user: carol"));
}

#[test]
fn config_user_flag_overrides() {
    let temp_dir = config_dir(ENV_USER_CONFIG);

    envssh_cmd()
        .current_dir(temp_dir.path())
        .env("ENVSSH_CLI_TEST_USER", "carol")
        .args(["config", "--user", "bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("resolved ssh_user: bob"));
}

#[test]
fn config_without_user_shows_none() {
    let temp_dir = config_dir(&CONFIG.replace("ssh_user: alice\n", ""));

    envssh_cmd()
        .current_dir(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("resolved ssh_user: (none)"));
}

#[test]
fn json_config_reports_resolved_user() {
    let temp_dir = config_dir(ENV_USER_CONFIG);

    let assert = envssh_cmd()
        .current_dir(temp_dir.path())
        .env("ENVSSH_CLI_TEST_USER", "carol")
        .args(["--json", "config"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(value["resolved_user"], "carol");
    assert_eq!(value["environments"][0]["name"], "develop");
}
