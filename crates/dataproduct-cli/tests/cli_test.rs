//! End-to-end tests driving the dataproduct binary

use std::path::Path;
use std::process::{Command, Output};

use anyhow::{bail, Result};

fn dataproduct(args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_dataproduct"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()?;
    Ok(output)
}

fn run_ok(args: &[&str]) -> Result<String> {
    let output = dataproduct(args)?;
    if !output.status.success() {
        bail!(
            "dataproduct {:?} failed:\n{}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[test]
fn test_convert_and_bootstrap_html() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let out = path_arg(dir.path());

    run_ok(&[
        "convert",
        "--output-dir",
        &out,
        "--only",
        "AirQuality",
        "--server-url",
        "https://gateway.example.com",
    ])?;

    let document = dir.path().join("AirQuality/Current_v1.0.json");
    let doc: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&document)?)?;
    assert_eq!(doc["openapi"], "3.0.2");
    assert_eq!(doc["servers"][0]["url"], "https://gateway.example.com/");
    assert!(!dir.path().join("Energy").exists());

    run_ok(&["bootstrap-html", "--root", &out])?;
    let page = std::fs::read_to_string(dir.path().join("AirQuality/Current_v1.0.html"))?;
    assert!(page.contains("Current_v1.0.json"));
    Ok(())
}

#[test]
fn test_convert_with_config_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let out = dir.path().join("specs");
    let config = dir.path().join("dataproduct.toml");
    std::fs::write(
        &config,
        format!("output_dir = {:?}\nvalidate = true\n", path_arg(&out)),
    )?;

    run_ok(&["convert", "--config", &path_arg(&config), "--only", "draft/Key"])?;
    assert!(out.join("draft/Key/CreateAssignment.json").is_file());
    assert!(out.join("draft/Key/DeleteAssignment.json").is_file());
    Ok(())
}

#[test]
fn test_unknown_prefix_fails() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let output = dataproduct(&[
        "convert",
        "--output-dir",
        &path_arg(dir.path()),
        "--only",
        "NoSuchDomain",
    ])?;
    assert!(!output.status.success());
    Ok(())
}

#[test]
fn test_validate_reports_violations() -> Result<()> {
    run_ok(&["validate"])?;

    let dir = tempfile::tempdir()?;
    std::fs::write(
        dir.path().join("Broken.yaml"),
        r#"
request:
  name: BrokenRequest
  fields:
    - name: count
      type: { kind: integer }
      example: many
response:
  name: BrokenResponse
"#,
    )?;
    let output = dataproduct(&["validate", "--definitions-dir", &path_arg(dir.path())])?;
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Broken: request.count"), "stdout: {stdout}");
    Ok(())
}

#[test]
fn test_list_shows_flags() -> Result<()> {
    let stdout = run_ok(&["list"])?;
    assert!(stdout.contains("AirQuality/Current_v1.0 (1.0.0)"));
    assert!(stdout
        .contains("NSG/Agent/LegalEntity/NonListedCompany/BeneficialOwners_v1.0 (1.0.0) [auth, consent]"));
    assert!(stdout.contains("draft/Company/Shareholders (0.0.1) [deprecated]"));
    Ok(())
}
