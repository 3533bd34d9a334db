use anyhow::Context;
use sig_config::Sig2MoqConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, then the layered configuration, honoring `--config`.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<Sig2MoqConfig> {
    dotenvy::dotenv().ok();

    let config = match &flags.config {
        Some(path) => Sig2MoqConfig::load_from(path)
            .with_context(|| format!("failed to load config file {}", path.display()))?,
        None => Sig2MoqConfig::load().context("failed to load configuration")?,
    };

    tracing::debug!(
        mock_name = %config.snippet.mock_name,
        delivery = %config.delivery.target,
        "configuration loaded"
    );
    Ok(config)
}
