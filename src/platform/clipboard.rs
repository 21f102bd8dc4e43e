//! System clipboard access.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard write was denied")]
    Denied,

    #[error("clipboard is not available on this host")]
    Unsupported,
}

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// In-process clipboard. Can be told to refuse writes.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
    deny: bool,
}

#[cfg(test)]
impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that rejects every write with [`ClipboardError::Denied`].
    pub fn denying() -> Self {
        Self {
            contents: None,
            deny: true,
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

#[cfg(test)]
impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.deny {
            return Err(ClipboardError::Denied);
        }
        self.contents = Some(text.to_owned());
        Ok(())
    }
}

/// Host without clipboard support.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedClipboard;

impl Clipboard for UnsupportedClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard() {
        let mut clipboard = MemoryClipboard::new();
        clipboard.write_text("a@b.c").unwrap();
        assert_eq!(clipboard.contents(), Some("a@b.c"));

        let mut denied = MemoryClipboard::denying();
        assert_eq!(denied.write_text("x"), Err(ClipboardError::Denied));
        assert_eq!(denied.contents(), None);
    }

    #[test]
    fn test_unsupported_clipboard() {
        assert_eq!(
            UnsupportedClipboard.write_text("x"),
            Err(ClipboardError::Unsupported)
        );
    }
}
