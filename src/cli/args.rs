// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::{SortKey, SubjectFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Username to sign in with
    #[arg(short, long, value_name = "USERNAME", global = true)]
    pub username: Option<String>,

    /// Password to sign in with
    #[arg(short, long, value_name = "PASSWORD", global = true)]
    pub password: Option<String>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Search, subject and sort options shared by `list` and `view`
#[derive(clap::Args, Debug, Clone, Default)]
pub struct BrowseArgs {
    /// Case-insensitive text matched against title, subject, author and tags
    #[arg(value_name = "SEARCH")]
    pub search: Option<String>,

    /// Subject filter (All, Mathematics, Computer Science, ...)
    #[arg(short, long, value_name = "SUBJECT")]
    pub subject: Option<SubjectFilter>,

    /// Sort order: recent, popular, rating or title
    #[arg(long, value_name = "KEY")]
    pub sort: Option<SortKey>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Sign in with --username and --password
    Login,

    /// Create an account with --username and --password
    Signup {
        /// Email address
        #[arg(long, value_name = "EMAIL")]
        email: String,

        /// Repeat the password
        #[arg(long, value_name = "PASSWORD")]
        confirm_password: String,
    },

    /// List notes as text cards
    List {
        #[command(flatten)]
        browse: BrowseArgs,

        /// Output notes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render notes as an HTML page and open it in the browser
    View {
        #[command(flatten)]
        browse: BrowseArgs,

        /// Write the page to this file instead of opening the browser
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Download a note
    Download {
        /// Note ID to download
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,
    },

    /// Share a PDF, DOC, DOCX or TXT file
    Upload {
        /// File to upload
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[arg(short, long, default_value = "")]
        title: String,

        #[arg(short, long, default_value = "")]
        subject: String,

        #[arg(short, long, default_value = "")]
        description: String,

        /// Tag, repeatable (up to 5)
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,
    },

    /// List browse filters and upload subjects
    Subjects,
}
