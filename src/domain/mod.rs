// src/domain/mod.rs
pub mod credentials;
pub mod error;
pub mod note;
pub mod subject;
pub mod upload;
pub mod view_state;

pub use credentials::{Credentials, Session, SignupFields};
pub use error::{DomainError, ValidationErrors};
pub use note::Note;
pub use subject::{SubjectFilter, BROWSE_SUBJECTS, UPLOAD_SUBJECTS};
pub use upload::{FileCandidate, UploadFields};
pub use view_state::{SortKey, ViewState};
