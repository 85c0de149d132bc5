// src/application/mod.rs
pub mod app;
pub mod auth_gate;
pub mod notes_browser;
pub mod uploader;

pub use app::{App, Screen};
pub use auth_gate::AuthGate;
pub use notes_browser::{DownloadAck, Listing, NoteRepository, NotesBrowser};
pub use uploader::{UploadReceipt, Uploader};
