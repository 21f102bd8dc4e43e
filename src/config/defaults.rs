//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [data] Section Defaults
// ============================================================================

pub mod data {
    use std::path::PathBuf;

    pub fn base() -> PathBuf {
        "".into()
    }

    pub fn resume() -> String {
        "data/resume.json".into()
    }

    pub fn projects() -> String {
        "data/projects.json".into()
    }
}

// ============================================================================
// [page] Section Defaults
// ============================================================================

pub mod page {
    use std::path::PathBuf;

    pub fn shell() -> Option<PathBuf> {
        None
    }

    pub fn output() -> PathBuf {
        "public/index.html".into()
    }

    pub fn indent() -> usize {
        0
    }
}

// ============================================================================
// [labels] Section Defaults
// ============================================================================

pub mod labels {
    pub fn copied() -> String {
        "✓ Copied!".into()
    }

    pub fn copy_failed() -> String {
        "✗ Copy failed".into()
    }

    pub fn load_failed() -> String {
        "Failed to load resume data. Please refresh the page.".into()
    }

    pub fn dark_icon() -> String {
        "☀️".into()
    }

    pub fn light_icon() -> String {
        "🌙".into()
    }

    pub fn details() -> String {
        "Details".into()
    }

    pub fn learn_more() -> String {
        "Learn More →".into()
    }

    pub fn all_tags() -> String {
        "All".into()
    }
}

// ============================================================================
// [ui] Section Defaults
// ============================================================================

pub mod ui {
    pub fn copy_revert_ms() -> u64 {
        2000
    }

    pub fn nav_lookahead() -> f64 {
        100.
    }

    pub fn reveal_threshold() -> f64 {
        0.1
    }

    pub fn dim_opacity() -> f64 {
        0.3
    }

    pub mod stagger {
        pub fn experience() -> f64 {
            0.05
        }

        pub fn projects() -> f64 {
            0.08
        }

        pub fn skills() -> f64 {
            0.03
        }

        pub fn publications() -> f64 {
            0.05
        }
    }
}

// ============================================================================
// [theme] Section Defaults
// ============================================================================

pub mod theme {
    use crate::app::Theme;
    use std::path::PathBuf;

    pub fn storage_key() -> String {
        "theme".into()
    }

    pub fn state_file() -> PathBuf {
        ".vitae/state.json".into()
    }

    pub fn system() -> Theme {
        Theme::Light
    }
}
