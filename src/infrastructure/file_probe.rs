// src/infrastructure/file_probe.rs
use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io;
use std::path::Path;
use tracing::debug;

use crate::domain::FileCandidate;

/// MIME type for an upload, derived from the file extension.
pub fn mime_for_ext(ext: &str) -> &'static str {
    match ext.to_ascii_lowercase().as_str() {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}

/// Collect name, size, type and fingerprint of a local file.
pub fn probe(path: impl AsRef<Path>) -> Result<FileCandidate> {
    let path = path.as_ref();
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("Failed to read file metadata for {}", path.display()))?;
    if !metadata.is_file() {
        anyhow::bail!("Not a regular file: {}", path.display());
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .context("Upload path has no file name")?;
    let mime_type = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or("application/octet-stream", mime_for_ext);

    let fingerprint = fingerprint(path)?;

    debug!(?path, size = metadata.len(), mime_type, %fingerprint, "Probed upload file");
    Ok(FileCandidate::new(name, mime_type, metadata.len()).with_fingerprint(fingerprint))
}

/// SHA256 of a file's bytes as lowercase hex; the file is streamed, not loaded
pub fn fingerprint(path: impl AsRef<Path>) -> Result<String> {
    let mut file = File::open(path.as_ref()).context("Failed to open file for hashing")?;

    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher).context("Failed to read file for hashing")?;
    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fs;
    use tempfile::TempDir;

    #[rstest]
    #[case("pdf", "application/pdf")]
    #[case("DOCX", "application/vnd.openxmlformats-officedocument.wordprocessingml.document")]
    #[case("txt", "text/plain")]
    #[case("png", "application/octet-stream")]
    fn given_extension_when_mapping_then_returns_mime(#[case] ext: &str, #[case] expected: &str) {
        assert_eq!(mime_for_ext(ext), expected);
    }

    #[test]
    fn given_text_file_when_probing_then_reports_name_size_and_type() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.txt");
        fs::write(&path, "hello").unwrap();

        let candidate = probe(&path).unwrap();

        assert_eq!(
            candidate,
            FileCandidate::new("notes.txt", "text/plain", 5).with_fingerprint(
                "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
            )
        );
    }

    #[test]
    fn given_file_without_extension_when_probing_then_type_is_rejected_later() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("README");
        fs::write(&path, "x").unwrap();

        let candidate = probe(&path).unwrap();

        assert!(candidate.check().is_err());
    }

    #[test]
    fn given_missing_file_when_probing_then_returns_error() {
        assert!(probe("/nonexistent/notes.pdf").is_err());
    }

    #[test]
    fn given_directory_when_probing_then_returns_error() {
        let temp_dir = TempDir::new().unwrap();
        assert!(probe(temp_dir.path()).is_err());
    }

    #[test]
    fn given_known_content_when_fingerprinting_then_returns_sha256_hex() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("abc.txt");
        fs::write(&path, "abc").unwrap();

        assert_eq!(
            fingerprint(&path).unwrap(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
