#![cfg(unix)]

use std::fs;

use anyhow::Result;
use tempfile::tempdir;

use crate::common::{run_launcher, stderr_of, write_config, write_script};

const MINIMAL_CONFIG: &str = r#"
api_token: "T"
host_url: "http://h"
model_instance_urls:
  - "u1"
"#;

#[test]
fn existing_artifact_receives_derived_args_and_exit_code() -> Result<()> {
    let temp = tempdir()?;
    let args_file = temp.path().join("args.txt");
    write_script(
        &temp.path().join("bin/src"),
        &format!(
            "for arg in \"$@\"; do echo \"$arg\" >> '{}'; done\nexit 3",
            args_file.display()
        ),
    )?;
    write_config(
        temp.path(),
        &format!("{MINIMAL_CONFIG}debug: true\nbuild:\n  toolchain: /nonexistent/go\n"),
    )?;

    let output = run_launcher(temp.path(), &[])?;

    assert_eq!(output.status.code(), Some(3), "stderr: {}", stderr_of(&output));
    let recorded = fs::read_to_string(&args_file)?;
    let recorded: Vec<&str> = recorded.lines().collect();
    assert_eq!(
        recorded,
        vec![
            "-token=T",
            "-host-url=http://h",
            "-listen-port=8080",
            "-cache-size=10000",
            "-log-file=logs/bot.log",
            "-log-level=info",
            "-model-instance-url=[u1]",
            "-debug",
        ]
    );
    Ok(())
}

#[test]
fn missing_artifact_is_built_then_launched() -> Result<()> {
    let temp = tempdir()?;
    let toolchain = temp.path().join("fake-go");
    // $3 is the -o output directory.
    write_script(
        &toolchain,
        "mkdir -p \"$3\" && printf '#!/bin/sh\\nexit 0\\n' > \"$3/src\" && chmod +x \"$3/src\"",
    )?;
    write_config(
        temp.path(),
        &format!("{MINIMAL_CONFIG}build:\n  toolchain: {}\n", toolchain.display()),
    )?;

    let output = run_launcher(temp.path(), &[])?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    assert!(temp.path().join("bin/src").exists());
    assert!(stderr_of(&output).contains("Compiling Go bot"));
    Ok(())
}

#[test]
fn failed_build_exits_with_status_one() -> Result<()> {
    let temp = tempdir()?;
    write_config(
        temp.path(),
        &format!("{MINIMAL_CONFIG}build:\n  toolchain: \"false\"\n"),
    )?;

    let output = run_launcher(temp.path(), &[])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr_of(&output).contains("Build failed"),
        "stderr: {}",
        stderr_of(&output)
    );
    assert!(!temp.path().join("bin/src").exists());
    Ok(())
}

#[test]
fn missing_token_fails_before_build() -> Result<()> {
    let temp = tempdir()?;
    let marker = temp.path().join("toolchain-ran");
    let toolchain = temp.path().join("fake-go");
    write_script(&toolchain, &format!("touch '{}'", marker.display()))?;
    write_config(
        temp.path(),
        &format!(
            "host_url: \"http://h\"\nmodel_instance_urls: []\nbuild:\n  toolchain: {}\n",
            toolchain.display()
        ),
    )?;

    let output = run_launcher(temp.path(), &[])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("api_token"));
    assert!(!marker.exists(), "toolchain must not run");
    Ok(())
}

#[test]
fn missing_config_file_is_fatal() -> Result<()> {
    let temp = tempdir()?;

    let output = run_launcher(temp.path(), &[])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("config.yml"));
    Ok(())
}
