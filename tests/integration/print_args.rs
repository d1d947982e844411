use anyhow::Result;
use serde_json::Value;
use tempfile::tempdir;

use crate::common::{run_launcher, stdout_of, write_config};

#[test]
fn print_args_outputs_redacted_json() -> Result<()> {
    let temp = tempdir()?;
    let config = write_config(
        temp.path(),
        "api_token: \"secret\"\nhost_url: \"http://h\"\nmodel_instance_urls: [\"a\", \"b\"]\nlisten_port: 9000\n",
    )?;

    let output = run_launcher(
        temp.path(),
        &["print-args", "--config", &config.display().to_string()],
    )?;

    assert!(output.status.success());
    let payload: Value = serde_json::from_str(&stdout_of(&output))?;
    assert_eq!(payload["args"][0], "-token=<redacted>");
    assert_eq!(payload["args"][2], "-listen-port=9000");
    assert_eq!(payload["args"][6], "-model-instance-url=[a,b]");
    assert_eq!(payload["artifact_path"], "./bin/src");
    assert!(!temp.path().join("bin").exists(), "print-args must not build");
    Ok(())
}
