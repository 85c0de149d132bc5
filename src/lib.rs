// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::application::{App, AuthGate, NotesBrowser, Screen, Uploader};
use crate::cli::args::{Args, BrowseArgs, Command};
use crate::domain::{
    Credentials, Session, SignupFields, UploadFields, ViewState, BROWSE_SUBJECTS, UPLOAD_SUBJECTS,
};
use crate::infrastructure::{file_probe, Config, PageRenderer, SeededNoteRepository};
use crate::ports::{HtmlPresenter, TextPresenter};

pub fn run(args: Args) -> Result<()> {
    debug!(command = ?args.command, "Starting notehub");

    let config = Config::resolve(args.config.as_deref())?;
    debug!(?config, "Resolved configuration");

    let mut app = App::new();
    let gate = AuthGate::new();
    let credentials = Credentials {
        username: args.username.clone().unwrap_or_default(),
        password: args.password.clone().unwrap_or_default(),
    };

    match args.command {
        Command::Login => {
            let session = gate.attempt_login(&credentials)?;
            println!("Welcome back, {}!", session.username);
            app.login(session);
        }
        Command::Signup {
            email,
            confirm_password,
        } => {
            let session = gate.attempt_signup(&SignupFields {
                username: credentials.username,
                email,
                password: credentials.password,
                confirm_password,
            })?;
            println!("Welcome to College Notes Hub, {}!", session.username);
            app.login(session);
        }
        Command::List { browse, json } => {
            app.login(gate.attempt_login(&credentials)?);
            let state = view_state(&browse, &config);
            let listing = NotesBrowser::new(SeededNoteRepository::new()).browse(&state)?;

            if json {
                let rendered = serde_json::to_string_pretty(&listing.notes)
                    .context("Failed to serialize notes to JSON")?;
                println!("{rendered}");
            } else {
                print!("{}", TextPresenter::new().render_listing(&listing));
            }
        }
        Command::View { browse, output } => {
            app.login(gate.attempt_login(&credentials)?);
            let state = view_state(&browse, &config);
            let listing = NotesBrowser::new(SeededNoteRepository::new()).browse(&state)?;

            let presenter = HtmlPresenter::with_username(current_user(&app)?.username.clone());
            let html = presenter.render(&listing, &state);

            let mut renderer = PageRenderer::new();
            match output {
                Some(path) => {
                    renderer.write_to(&path, &html)?;
                    println!("Wrote {} notes to {}", listing.len(), path.display());
                }
                None => {
                    let path = renderer.create_temp_file(&html)?;
                    renderer.open_in_browser(&path)?;
                }
            }
        }
        Command::Download { note_id } => {
            app.login(gate.attempt_login(&credentials)?);
            let ack = NotesBrowser::new(SeededNoteRepository::new()).download(note_id)?;
            println!("{}", ack.message);
        }
        Command::Upload {
            file,
            title,
            subject,
            description,
            tags,
        } => {
            app.login(gate.attempt_login(&credentials)?);
            app.navigate(Screen::Upload)?;

            let mut fields = UploadFields::new(title, subject, description);
            for tag in &tags {
                if !fields.add_tag(tag) {
                    info!(tag = %tag, "Ignoring tag");
                }
            }
            // An unreadable path counts as no file picked
            let candidate = match file_probe::probe(&file) {
                Ok(candidate) => Some(candidate),
                Err(e) => {
                    warn!(path = ?file, error = %e, "Cannot use upload file");
                    None
                }
            };

            let uploader = Uploader::new(config.upload.simulated_delay());
            println!("Uploading...");
            let receipt = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()
                .context("Failed to start runtime")?
                .block_on(uploader.submit_upload(
                    current_user(&app)?,
                    &fields,
                    candidate.as_ref(),
                ))?;

            print!("{}", TextPresenter::new().render_receipt(&receipt));
        }
        Command::Subjects => {
            println!("Browse filters: {}", BROWSE_SUBJECTS.join(", "));
            println!("Upload subjects: {}", UPLOAD_SUBJECTS.join(", "));
        }
    }

    Ok(())
}

/// Flags win over config defaults
pub fn view_state(browse: &BrowseArgs, config: &Config) -> ViewState {
    ViewState::new()
        .with_search(browse.search.clone().unwrap_or_default())
        .with_subject(
            browse
                .subject
                .clone()
                .unwrap_or_else(|| config.browse.default_subject.clone()),
        )
        .with_sort(browse.sort.unwrap_or(config.browse.default_sort))
}

fn current_user(app: &App) -> Result<&Session> {
    Ok(app.session().ok_or(domain::DomainError::NotLoggedIn)?)
}
