//! `[labels]` section configuration.
//!
//! User-facing strings written into the page by the renderer.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[labels]` section in vitae.toml.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct LabelsConfig {
    /// Shown on a copy control after a successful clipboard write.
    #[serde(default = "defaults::labels::copied")]
    #[educe(Default = defaults::labels::copied())]
    pub copied: String,

    /// Shown on a copy control when the clipboard refused the write.
    #[serde(default = "defaults::labels::copy_failed")]
    #[educe(Default = defaults::labels::copy_failed())]
    pub copy_failed: String,

    /// Replaces the summary text when a document fails to load.
    #[serde(default = "defaults::labels::load_failed")]
    #[educe(Default = defaults::labels::load_failed())]
    pub load_failed: String,

    /// Toggle label while the dark theme is active.
    #[serde(default = "defaults::labels::dark_icon")]
    #[educe(Default = defaults::labels::dark_icon())]
    pub dark_icon: String,

    /// Toggle label while the light theme is active.
    #[serde(default = "defaults::labels::light_icon")]
    #[educe(Default = defaults::labels::light_icon())]
    pub light_icon: String,

    /// Summary line of an expandable details block.
    #[serde(default = "defaults::labels::details")]
    #[educe(Default = defaults::labels::details())]
    pub details: String,

    /// Anchor text of a project's external link.
    #[serde(default = "defaults::labels::learn_more")]
    #[educe(Default = defaults::labels::learn_more())]
    pub learn_more: String,

    /// Text of the sentinel `all` option in the tag filter.
    #[serde(default = "defaults::labels::all_tags")]
    #[educe(Default = defaults::labels::all_tags())]
    pub all_tags: String,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_labels_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.labels.copied, "✓ Copied!");
        assert_eq!(config.labels.copy_failed, "✗ Copy failed");
        assert_eq!(
            config.labels.load_failed,
            "Failed to load resume data. Please refresh the page."
        );
        assert_eq!(config.labels.dark_icon, "☀️");
        assert_eq!(config.labels.light_icon, "🌙");
    }

    #[test]
    fn test_labels_override() {
        let config = r#"
            [labels]
            copied = "Copied"
            learn_more = "Source"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.labels.copied, "Copied");
        assert_eq!(config.labels.learn_more, "Source");
        assert_eq!(config.labels.details, "Details");
    }
}
