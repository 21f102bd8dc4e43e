//! Host capabilities the renderer depends on.
//!
//! The browser supplies local storage, the clipboard and a clock. Here each
//! is a small trait (or a plain queue for time) so the application context
//! can be driven by the CLI, by tests, or by any other host.

mod clipboard;
mod storage;
mod timer;

pub use clipboard::{Clipboard, ClipboardError, UnsupportedClipboard};
pub use storage::{FileStorage, Storage, StorageError};

#[cfg(test)]
pub use clipboard::MemoryClipboard;
#[cfg(test)]
pub use storage::MemoryStorage;
pub use timer::TimerQueue;
