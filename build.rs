use anyhow::Result;
use chrono::TimeZone;
use std::env;
use std::fs;
use std::process::Command;
use vergen_gitcl::{Emitter, GitclBuilder};

const LIB_NAME: &str = "tta";
const LIB_MANIFEST: &str = "tta/Cargo.toml";

fn main() -> Result<()> {
    // Generate git information
    let gitcl = GitclBuilder::default()
        .describe(true, true, Some("[0-9]*"))
        .build()?;

    let gitcl_res = Emitter::default()
        .idempotent()
        .fail_on_error()
        .add_instructions(&gitcl)
        .and_then(|emitter| emitter.emit());

    if let Err(e) = gitcl_res {
        eprintln!("error occurred while generating instructions: {e:?}");
        Emitter::default().idempotent().fail_on_error().emit()?;
    }

    // Reproducible builds pin the timestamp through SOURCE_DATE_EPOCH
    let now = env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|val| val.parse::<i64>().ok())
        .and_then(|secs| chrono::Utc.timestamp_opt(secs, 0).single())
        .unwrap_or_else(chrono::Utc::now);

    println!(
        "cargo:rustc-env=BUILD_TIMESTAMP={}",
        now.format("%Y-%m-%d %H:%M:%S UTC")
    );

    let lib_version = lib_version_from_metadata().unwrap_or_else(|_| {
        read_lib_version_fallback().unwrap_or_else(|_| "unknown".to_string())
    });
    println!("cargo:rustc-env=TTA_VERSION={lib_version}");

    println!("cargo:rerun-if-changed={LIB_MANIFEST}");
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");

    Ok(())
}

/// Version of the decoder library as resolved by cargo, for both path and
/// registry dependencies.
fn lib_version_from_metadata() -> Result<String> {
    let output = Command::new(env::var("CARGO").unwrap_or_else(|_| "cargo".to_string()))
        .args(["metadata", "--format-version", "1"])
        .output()?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed");
    }

    let metadata: serde_json::Value = serde_json::from_slice(&output.stdout)?;

    let version = metadata["packages"]
        .as_array()
        .into_iter()
        .flatten()
        .find(|package| package["name"].as_str() == Some(LIB_NAME))
        .and_then(|package| package["version"].as_str());

    match version {
        Some(version) => Ok(version.to_string()),
        None => anyhow::bail!("{LIB_NAME} package not found in metadata"),
    }
}

fn read_lib_version_fallback() -> Result<String> {
    let toml_content = fs::read_to_string(LIB_MANIFEST)?;

    toml_content
        .lines()
        .map(str::trim)
        .find(|line| line.starts_with("version") && line.contains('='))
        .and_then(|line| line.split_once('='))
        .map(|(_, value)| value.trim().trim_matches('"').trim_matches('\'').to_string())
        .ok_or_else(|| anyhow::anyhow!("Could not find version in {LIB_MANIFEST}"))
}
