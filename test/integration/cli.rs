use std::{fs::File, io::Write, path::PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// when the TempDir is dropped, the temporal directory is removed, thus, the its
// ownership must remain on the parent function.
fn create_settings(dir: &TempDir, content: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let file_path = dir.path().join("settings.yaml");
    let mut file = File::create(&file_path)?;
    writeln!(file, "{}", content)?;
    Ok(file_path)
}

fn kube_agent() -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("kube-agent")?;
    for var in [
        "MW_AGENT_SETTINGS",
        "MW_API_KEY",
        "MW_TARGET",
        "MW_ENABLE_SYNTHETIC_MONITORING",
        "MW_CONFIG_CHECK_INTERVAL",
        "MW_API_URL_FOR_CONFIG_CHECK",
        "MW_DOCKER_ENDPOINT",
    ] {
        cmd.env_remove(var);
    }
    Ok(cmd)
}

#[test]
fn reports_reduced_config_without_docker() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = kube_agent()?;
    cmd.arg("--api-key")
        .arg("abc123")
        .arg("--docker-endpoint")
        .arg("unix:///non/existent/docker.sock");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "config: /app/otel-config-nodocker.yaml",
        ))
        .stdout(predicate::str::contains("exporters: logging, otlp, otlphttp"))
        .stdout(predicate::str::contains("Creating the global context"));
    Ok(())
}

#[test]
fn api_key_is_not_logged() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = kube_agent()?;
    cmd.arg("--api-key").arg("very-secret-key");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("very-secret-key").not());
    Ok(())
}

#[test]
fn invalid_interval_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = kube_agent()?;
    cmd.arg("--config-check-interval").arg("every minute");
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("invalid agent configuration"));
    Ok(())
}

#[test]
fn flags_override_settings_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let file_path = create_settings(&dir, "config_check_interval: every minute")?;

    let mut cmd = kube_agent()?;
    cmd.arg("--config")
        .arg(file_path)
        .arg("--config-check-interval")
        .arg("60s");
    cmd.assert().success();
    Ok(())
}

#[test]
fn settings_file_is_applied() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let file_path = create_settings(&dir, "target: not a url")?;

    let mut cmd = kube_agent()?;
    cmd.arg("--config").arg(file_path);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("invalid target url"));
    Ok(())
}

#[test]
fn missing_settings_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = kube_agent()?;
    cmd.arg("--config").arg("/non/existent/settings.yaml");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("/non/existent/settings.yaml"));
    Ok(())
}
