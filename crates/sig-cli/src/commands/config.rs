use anyhow::Context;
use sig_config::Sig2MoqConfig;

/// Handle `sig2moq config`: the merged configuration, always as TOML.
pub fn handle(config: &Sig2MoqConfig) -> anyhow::Result<()> {
    let rendered = render(config)?;
    print!("{rendered}");
    Ok(())
}

fn render(config: &Sig2MoqConfig) -> anyhow::Result<String> {
    toml::to_string_pretty(config).context("failed to serialize configuration")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_renders_both_sections() {
        let text = render(&Sig2MoqConfig::default()).unwrap();
        assert!(text.contains("[snippet]"));
        assert!(text.contains("mock_name = \"mock\""));
        assert!(text.contains("line_ending = \"lf\""));
        assert!(text.contains("[delivery]"));
        assert!(text.contains("target = \"clipboard\""));
    }

    #[test]
    fn rendered_config_parses_back() {
        let text = render(&Sig2MoqConfig::default()).unwrap();
        let parsed: Sig2MoqConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, Sig2MoqConfig::default());
    }
}
