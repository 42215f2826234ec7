use anyhow::Context;
use figment::providers::{Env, Format, Toml};
use folio_config::FolioConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, the layered config and the command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<FolioConfig> {
    load_dotenv()?;

    let mut figment = FolioConfig::figment();
    if let Some(path) = &flags.config {
        anyhow::ensure!(path.exists(), "config file '{}' does not exist", path.display());
        // Re-merge the environment so it keeps the highest priority.
        figment = figment
            .merge(Toml::file(path))
            .merge(Env::prefixed("FOLIO_").split("__"));
    }

    let mut config = FolioConfig::from_figment(&figment).context("failed to load configuration")?;
    apply_overrides(&mut config, flags);
    Ok(config)
}

/// `--endpoint` replaces the whole candidate list, generated ones included.
fn apply_overrides(config: &mut FolioConfig, flags: &GlobalFlags) {
    if !flags.endpoints.is_empty() {
        config.remote.endpoints.clone_from(&flags.endpoints);
        config.remote.origin.clear();
    }
}

fn load_dotenv() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let env_path = cwd.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}
