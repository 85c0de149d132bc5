// src/infrastructure/mod.rs
pub mod config;
pub mod file_probe;
pub mod renderer;
pub mod seed;

pub use config::Config;
pub use renderer::PageRenderer;
pub use seed::SeededNoteRepository;
