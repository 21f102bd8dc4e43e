//! Vitae renders a single-page résumé from JSON documents into a static
//! HTML shell.
//!
//! The page behaviour (theme, tag filter, copy buttons, scroll tracking) runs
//! headlessly against an arena [`dom::Document`] through [`app::App`], with
//! storage, clipboard and time supplied by [`platform`].

pub mod app;
pub mod check;
pub mod cli;
pub mod config;
pub mod data;
pub mod dom;
pub mod logger;
pub mod platform;
pub mod render;
pub mod theme;
