//! Status lines on stderr, tagged with the phase that wrote them.
//!
//! ```ignore
//! log!("load"; "{path} ({} bytes)", bytes.len());
//! // [load] data/resume.json (812 bytes)
//! ```
//!
//! Standard output is left to command results such as `vitae tags`. On a
//! terminal the tag is coloured and the line is clipped to the window width.
//! Redirected output is written plain and whole.

use colored::{Color, Colorize};
use crossterm::terminal;
use std::{
    io::{self, IsTerminal, Write},
    sync::OnceLock,
};

const FALLBACK_WIDTH: usize = 120;

const PHASE_COLORS: &[(&str, Color)] = &[
    ("load", Color::BrightBlue),
    ("check", Color::BrightCyan),
    ("render", Color::BrightGreen),
    ("theme", Color::BrightMagenta),
    ("error", Color::BrightRed),
];

/// Phases missing from the table.
const OTHER_COLOR: Color = Color::BrightYellow;

static WIDTH: OnceLock<usize> = OnceLock::new();

/// Write `[phase] message` to stderr.
#[macro_export]
macro_rules! log {
    ($phase:expr; $($arg:tt)*) => {
        $crate::logger::log($phase, &format!($($arg)*))
    };
}

pub fn log(phase: &str, message: &str) {
    let stderr = io::stderr();
    let line = if stderr.is_terminal() {
        let tag = format!("[{phase}]").color(phase_color(phase)).bold();
        // "[" + phase + "] "
        let room = line_width().saturating_sub(phase.chars().count() + 3);
        format!("{tag} {}", clip(message, room))
    } else {
        format!("[{phase}] {message}")
    };
    writeln!(stderr.lock(), "{line}").ok();
}

fn phase_color(phase: &str) -> Color {
    PHASE_COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(phase))
        .map_or(OTHER_COLOR, |(_, color)| *color)
}

fn line_width() -> usize {
    *WIDTH.get_or_init(|| {
        terminal::size()
            .map(|(cols, _)| usize::from(cols))
            .unwrap_or(FALLBACK_WIDTH)
    })
}

/// The first `max_chars` characters of `text`.
fn clip(text: &str, max_chars: usize) -> &str {
    text.char_indices()
        .nth(max_chars)
        .map_or(text, |(end, _)| &text[..end])
}
