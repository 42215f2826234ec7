use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("folio error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(&flags)?;

    if let cli::Commands::Schema(args) = &cli.command {
        return commands::schema::handle(args, &flags);
    }

    let config = bootstrap::load_config(&flags)?;
    context::warn_unconfigured();

    let ctx = context::AppContext::new(config);
    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

/// Log level used when `FOLIO_LOG` is unset.
const fn default_level(flags: &cli::GlobalFlags) -> &'static str {
    if flags.quiet {
        "error"
    } else if flags.verbose {
        "debug"
    } else {
        "warn"
    }
}

fn init_tracing(flags: &cli::GlobalFlags) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("FOLIO_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level(flags)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn level_for(args: &[&str]) -> &'static str {
        let cli = cli::Cli::try_parse_from(args).unwrap();
        default_level(&cli.global_flags())
    }

    #[test]
    fn log_level_follows_global_flags() {
        assert_eq!(level_for(&["folio", "endpoints"]), "warn");
        assert_eq!(level_for(&["folio", "--verbose", "endpoints"]), "debug");
        assert_eq!(level_for(&["folio", "endpoints", "--quiet"]), "error");
    }
}
