//! `vitae theme`: inspect or flip the persisted theme flag.

use crate::{
    app::Theme,
    config::SiteConfig,
    log,
    platform::{FileStorage, Storage},
};
use anyhow::Result;

pub fn run_theme(config: &SiteConfig, toggle: bool) -> Result<Theme> {
    let mut storage = FileStorage::open(&config.theme.state_file)?;
    let key = &config.theme.storage_key;
    let stored = storage.get(key);
    let current = Theme::initial(stored.as_deref(), config.theme.system);

    if !toggle {
        let origin = if stored.is_some() { "stored" } else { "system" };
        log!("theme"; "{current} ({origin})");
        return Ok(current);
    }

    let next = current.toggled();
    storage.set(key, next.as_str())?;
    log!("theme"; "{current} -> {next}, saved to {}", storage.path().display());
    Ok(next)
}
