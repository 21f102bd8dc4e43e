//! `[page]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[page]` section in vitae.toml - host page and rendered output.
///
/// # Example
/// ```toml
/// [page]
/// shell = "index.html"         # omit to use the built-in shell
/// output = "public/index.html"
/// indent = 2                   # pretty-print
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct PageConfig {
    /// Host page providing the mount points. Must be XHTML-compatible markup.
    #[serde(default = "defaults::page::shell")]
    #[educe(Default = defaults::page::shell())]
    pub shell: Option<PathBuf>,

    /// Where the rendered document is written.
    #[serde(default = "defaults::page::output")]
    #[educe(Default = defaults::page::output())]
    pub output: PathBuf,

    /// Pretty-print indentation width. `0` writes compact markup.
    #[serde(default = "defaults::page::indent")]
    #[educe(Default = defaults::page::indent())]
    pub indent: usize,
}
