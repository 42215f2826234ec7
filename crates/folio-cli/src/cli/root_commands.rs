use clap::{Args, Subcommand, ValueEnum};

use crate::cli::subcommands::MediaCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Fetch the content document (store, then local cache, then default).
    Fetch(FetchArgs),
    /// Publish a document file, replacing the stored one.
    Push(PushArgs),
    /// Edit the media library.
    Media {
        #[command(subcommand)]
        action: MediaCommands,
    },
    /// Check admin credentials against the current document.
    Login(LoginArgs),
    /// List the resolved store endpoints in the order they are tried.
    Endpoints,
    /// Run the content store over HTTP.
    Serve(ServeArgs),
    /// Print the JSON schema of the document or the store envelope.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct FetchArgs {
    /// Print only the document, without its source.
    #[arg(long)]
    pub document_only: bool,
}

#[derive(Clone, Debug, Args)]
pub struct PushArgs {
    /// Document JSON file (`-` reads stdin).
    pub file: String,
}

#[derive(Clone, Debug, Args)]
pub struct LoginArgs {
    /// Admin username.
    #[arg(long, default_value = "admin")]
    pub username: String,
    /// Admin password.
    #[arg(long)]
    pub password: String,
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Address to listen on (overrides `server.bind`).
    #[arg(long)]
    pub bind: Option<String>,
    /// libSQL database file (overrides `server.database_path`).
    #[arg(long)]
    pub db: Option<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaTarget {
    Document,
    Envelope,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Which type to describe.
    #[arg(default_value = "document")]
    pub target: SchemaTarget,
}
