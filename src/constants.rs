// src/constants.rs
//
// Application-wide limits and defaults.

/// Largest file accepted by the upload form (10 MiB).
///
/// Used in: `domain/upload.rs`
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// MIME types accepted by the upload form: PDF, DOC, DOCX and plain text.
///
/// Used in: `domain/upload.rs`, `infrastructure/file_probe.rs`
pub const ALLOWED_MIME_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "text/plain",
];

/// Upload form field limits.
///
/// Used in: `domain/upload.rs`
pub const MAX_TITLE_CHARS: usize = 100;
pub const MAX_DESCRIPTION_CHARS: usize = 500;
pub const MAX_TAGS: usize = 5;
pub const MAX_TAG_CHARS: usize = 20;

/// Minimum password length on sign up.
///
/// Used in: `application/auth_gate.rs`
pub const MIN_PASSWORD_CHARS: usize = 6;

/// Artificial latency of a simulated upload.
///
/// Used in: `infrastructure/config.rs`
pub const DEFAULT_UPLOAD_DELAY_MS: u64 = 2000;

/// Delay in milliseconds after spawning the browser before the temp dir may go away.
///
/// Used in: `infrastructure/renderer.rs`
pub const BROWSER_LAUNCH_DELAY_MS: u64 = 500;

/// Shown instead of an empty card grid.
///
/// Used in: `ports/terminal.rs`, `ports/html.rs`
pub const EMPTY_STATE_TITLE: &str = "No notes found";
pub const EMPTY_STATE_HINT: &str = "Try adjusting your search terms or filters";
