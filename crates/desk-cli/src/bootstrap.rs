use anyhow::Context;
use figment::providers::Serialized;

use crate::cli::GlobalFlags;

/// Load `.env`, the layered config, and apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<desk_config::DeskConfig> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let env_path = cwd.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }

    let mut figment = desk_config::DeskConfig::figment();
    if let Some(base_url) = &flags.base_url {
        figment = figment.merge(Serialized::default("server.base_url", base_url));
    }

    let config: desk_config::DeskConfig = figment
        .extract()
        .map_err(desk_config::ConfigError::from)
        .context("failed to load desk configuration")?;
    config.validate()?;
    tracing::debug!(base_url = %config.server.base_url, "configuration loaded");
    Ok(config)
}
