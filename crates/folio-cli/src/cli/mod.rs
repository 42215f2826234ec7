use clap::Parser;
use std::path::PathBuf;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `folio` binary.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Folio - portfolio content synchronizer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Extra TOML config file, layered over the user and project files
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Store endpoint to use instead of the configured list (repeatable)
    #[arg(short, long = "endpoint", global = true)]
    pub endpoints: Vec<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            config: self.config.clone(),
            endpoints: self.endpoints.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use std::path::Path;

    use super::{Cli, Commands, GlobalFlags, OutputFormat};
    use crate::cli::subcommands::MediaCommands;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["folio", "--format", "raw", "--verbose", "fetch"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Fetch(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["folio", "endpoints", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Endpoints));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["folio", "--format", "table", "fetch"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn endpoint_flag_is_repeatable() {
        let cli = Cli::try_parse_from([
            "folio",
            "-e",
            "http://a.test/api/portfolio",
            "--endpoint",
            "http://b.test/api/portfolio",
            "fetch",
        ])
        .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.endpoints.len(), 2);
    }

    #[test]
    fn push_takes_a_file() {
        let cli = Cli::try_parse_from(["folio", "push", "content.json", "--config", "/tmp/f.toml"])
            .expect("cli should parse");
        let Commands::Push(args) = &cli.command else {
            panic!("expected push");
        };
        assert_eq!(args.file, "content.json");
        assert_eq!(cli.global_flags().config.as_deref(), Some(Path::new("/tmp/f.toml")));
    }

    #[test]
    fn media_subcommands_parse() {
        let cli = Cli::try_parse_from(["folio", "media", "add", "https://cdn.example/a.png"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Media { action: MediaCommands::Add { ref url } } if url == "https://cdn.example/a.png"
        ));

        let cli = Cli::try_parse_from(["folio", "media", "list"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Media {
                action: MediaCommands::List
            }
        ));
    }

    #[test]
    fn serve_overrides_parse() {
        let cli = Cli::try_parse_from(["folio", "serve", "--bind", "0.0.0.0:9000", "--db", ":memory:"])
            .expect("cli should parse");
        let Commands::Serve(args) = &cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.bind.as_deref(), Some("0.0.0.0:9000"));
        assert_eq!(args.db.as_deref(), Some(":memory:"));
    }
}
