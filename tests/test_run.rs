use anyhow::Result;
use clap::Parser;
use notehub::cli::args::Args;
use notehub::domain::DomainError;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Config without upload latency, so runs finish immediately
fn fast_config(dir: &Path) -> Result<PathBuf> {
    let path = dir.join("notehub.toml");
    std::fs::write(&path, "[upload]\nsimulated_delay_ms = 0\n")?;
    Ok(path)
}

fn run_with(config: &Path, args: &[&str]) -> Result<()> {
    let config = config.to_string_lossy().to_string();
    let mut argv = vec!["notehub", "-c", config.as_str()];
    argv.extend_from_slice(args);
    notehub::run(Args::try_parse_from(argv)?)
}

fn validation_messages(result: Result<()>) -> Vec<String> {
    let err = result.expect_err("Run should fail");
    match err.downcast_ref::<DomainError>() {
        Some(DomainError::Validation(errors)) => errors.messages().to_vec(),
        _ => panic!("Expected validation error, got {err:?}"),
    }
}

#[test]
fn given_no_credentials_when_listing_then_gate_reports_both_fields() -> Result<()> {
    // Arrange
    let temp_dir = TempDir::new()?;
    let config = fast_config(temp_dir.path())?;

    // Act
    let result = run_with(&config, &["list"]);

    // Assert
    assert_eq!(
        validation_messages(result),
        vec!["Username is required", "Password is required"]
    );
    Ok(())
}

#[test]
fn given_username_only_when_downloading_then_gate_requires_password() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = fast_config(temp_dir.path())?;

    let result = run_with(&config, &["-u", "ada", "download", "4"]);

    assert_eq!(validation_messages(result), vec!["Password is required"]);
    Ok(())
}

#[test]
fn given_no_credentials_when_viewing_then_nothing_is_written() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = fast_config(temp_dir.path())?;
    let output = temp_dir.path().join("notes.html");
    let output_arg = output.to_string_lossy().to_string();

    let result = run_with(&config, &["view", "-o", output_arg.as_str()]);

    assert_eq!(
        validation_messages(result),
        vec!["Username is required", "Password is required"]
    );
    assert!(!output.exists());
    Ok(())
}

#[test]
fn given_credentials_when_listing_json_then_succeeds() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = fast_config(temp_dir.path())?;

    run_with(
        &config,
        &["-u", "ada", "-p", "pw", "list", "java", "--sort", "popular", "--json"],
    )
}

#[test]
fn given_credentials_when_viewing_to_file_then_writes_card_page() -> Result<()> {
    // Arrange
    let temp_dir = TempDir::new()?;
    let config = fast_config(temp_dir.path())?;
    let output = temp_dir.path().join("notes.html");
    let output_arg = output.to_string_lossy().to_string();

    // Act
    run_with(
        &config,
        &["-u", "ada", "-p", "pw", "view", "--subject", "Computer Science", "-o", output_arg.as_str()],
    )?;

    // Assert
    let html = std::fs::read_to_string(&output)?;
    assert!(html.contains("2 notes available"));
    assert!(html.contains("Signed in as ada"));
    assert!(html.contains("Data Structures and Algorithms"));
    Ok(())
}

#[test]
fn given_unknown_note_when_downloading_then_not_found() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = fast_config(temp_dir.path())?;

    let err = run_with(&config, &["-u", "ada", "-p", "pw", "download", "42"])
        .expect_err("Download should fail");

    assert!(matches!(
        err.downcast_ref::<DomainError>(),
        Some(DomainError::NoteNotFound(42))
    ));
    Ok(())
}

#[test]
fn given_missing_file_and_empty_form_when_uploading_then_collects_every_message() -> Result<()> {
    // Arrange
    let temp_dir = TempDir::new()?;
    let config = fast_config(temp_dir.path())?;
    let missing = temp_dir.path().join("missing.pdf");
    let missing_arg = missing.to_string_lossy().to_string();

    // Act
    let result = run_with(&config, &["-u", "ada", "-p", "pw", "upload", missing_arg.as_str()]);

    // Assert
    assert_eq!(
        validation_messages(result),
        vec![
            "Title is required",
            "Subject is required",
            "Description is required",
            "Please select a file to upload",
        ]
    );
    Ok(())
}

#[test]
fn given_complete_upload_when_running_then_succeeds() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = fast_config(temp_dir.path())?;
    let file = temp_dir.path().join("thermo.txt");
    std::fs::write(&file, "first law")?;
    let file_arg = file.to_string_lossy().to_string();

    run_with(
        &config,
        &[
            "-u", "ada", "-p", "pw", "upload", file_arg.as_str(), "-t", "Thermodynamics", "-s",
            "Physics", "-d", "Laws one to three", "--tag", "heat",
        ],
    )
}
