//! `[data]` section configuration.
//!
//! Locates the two JSON documents the page is built from.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[data]` section in vitae.toml - document locations.
///
/// # Example
/// ```toml
/// [data]
/// base = "site"                   # documents are fetched relative to this
/// resume = "data/resume.json"
/// projects = "data/projects.json"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct DataConfig {
    /// Directory the relative document paths resolve against (relative to root).
    #[serde(default = "defaults::data::base")]
    #[educe(Default = defaults::data::base())]
    pub base: PathBuf,

    /// Relative path of the résumé document.
    #[serde(default = "defaults::data::resume")]
    #[educe(Default = defaults::data::resume())]
    pub resume: String,

    /// Relative path of the project list.
    #[serde(default = "defaults::data::projects")]
    #[educe(Default = defaults::data::projects())]
    pub projects: String,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::path::PathBuf;

    #[test]
    fn test_data_config_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.data.base, PathBuf::from(""));
        assert_eq!(config.data.resume, "data/resume.json");
        assert_eq!(config.data.projects, "data/projects.json");
    }

    #[test]
    fn test_data_config_custom() {
        let config = r#"
            [data]
            base = "site"
            resume = "cv.json"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.data.base, PathBuf::from("site"));
        assert_eq!(config.data.resume, "cv.json");
        assert_eq!(config.data.projects, "data/projects.json");
    }
}
