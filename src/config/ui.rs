//! `[ui]` section configuration.
//!
//! Timing and geometry constants of the interactive affordances.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[ui]` section in vitae.toml.
///
/// # Example
/// ```toml
/// [ui]
/// copy_revert_ms = 1500
/// nav_lookahead = 80.0
///
/// [ui.stagger]
/// projects = 0.1
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct UiConfig {
    /// How long a copy confirmation stays before the label reverts.
    #[serde(default = "defaults::ui::copy_revert_ms")]
    #[educe(Default = defaults::ui::copy_revert_ms())]
    pub copy_revert_ms: u64,

    /// Pixels ahead of a section's top at which it becomes the active one.
    #[serde(default = "defaults::ui::nav_lookahead")]
    #[educe(Default = defaults::ui::nav_lookahead())]
    pub nav_lookahead: f64,

    /// Visible fraction at which a `fade-in` element is revealed, in (0, 1].
    #[serde(default = "defaults::ui::reveal_threshold")]
    #[educe(Default = defaults::ui::reveal_threshold())]
    pub reveal_threshold: f64,

    /// Opacity of project cards hidden by the tag filter, in [0, 1].
    #[serde(default = "defaults::ui::dim_opacity")]
    #[educe(Default = defaults::ui::dim_opacity())]
    pub dim_opacity: f64,

    /// Per-item entrance animation delays.
    #[serde(default)]
    pub stagger: StaggerConfig,
}

/// `[ui.stagger]` section - seconds of `animation-delay` added per item index.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct StaggerConfig {
    #[serde(default = "defaults::ui::stagger::experience")]
    #[educe(Default = defaults::ui::stagger::experience())]
    pub experience: f64,

    #[serde(default = "defaults::ui::stagger::projects")]
    #[educe(Default = defaults::ui::stagger::projects())]
    pub projects: f64,

    #[serde(default = "defaults::ui::stagger::skills")]
    #[educe(Default = defaults::ui::stagger::skills())]
    pub skills: f64,

    #[serde(default = "defaults::ui::stagger::publications")]
    #[educe(Default = defaults::ui::stagger::publications())]
    pub publications: f64,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_ui_config_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.ui.copy_revert_ms, 2000);
        assert_eq!(config.ui.nav_lookahead, 100.);
        assert_eq!(config.ui.reveal_threshold, 0.1);
        assert_eq!(config.ui.dim_opacity, 0.3);
        assert_eq!(config.ui.stagger.projects, 0.08);
        assert_eq!(config.ui.stagger.skills, 0.03);
    }

    #[test]
    fn test_stagger_partial_override() {
        let config = r#"
            [ui.stagger]
            projects = 0.1
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.ui.stagger.projects, 0.1);
        assert_eq!(config.ui.stagger.experience, 0.05);
    }
}
