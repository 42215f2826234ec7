use clap::Subcommand;

/// Media library edits. Each edit fetches the document, changes it and
/// publishes the whole document again.
#[derive(Clone, Debug, Subcommand)]
pub enum MediaCommands {
    /// List media library entries.
    List,
    /// Add an asset URL at the front of the library.
    Add {
        /// Asset URL.
        url: String,
    },
    /// Remove every entry equal to an asset URL.
    Remove {
        /// Asset URL.
        url: String,
    },
}
