// src/application/app.rs
use tracing::debug;

use crate::domain::{DomainError, Session};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Login,
    Repository,
    Upload,
}

/// Top-level application state: current screen and signed-in user.
#[derive(Debug, Default)]
pub struct App {
    screen: Screen,
    session: Option<Session>,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn login(&mut self, session: Session) {
        debug!(username = %session.username, "Entering repository");
        self.session = Some(session);
        self.screen = Screen::Repository;
    }

    pub fn logout(&mut self) {
        self.session = None;
        self.screen = Screen::Login;
    }

    pub fn navigate(&mut self, screen: Screen) -> Result<(), DomainError> {
        if screen != Screen::Login && !self.is_logged_in() {
            return Err(DomainError::NotLoggedIn);
        }
        self.screen = screen;
        Ok(())
    }
}
