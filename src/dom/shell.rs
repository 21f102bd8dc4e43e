//! Host page loading.
//!
//! The shell is the static page that provides the mount points. It is read
//! with quick-xml, so it must be XHTML-compatible: void elements may be
//! self-closed or left open, every other element needs its end tag, and
//! inline script bodies must not contain markup characters.

use super::{Document, NodeData, NodeId, is_void};
use quick_xml::{Reader, escape::resolve_html5_entity, events::BytesStart, events::Event};
use std::{
    borrow::Cow,
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Built-in host page, used when `[page.shell]` is not set.
pub const BUILTIN_SHELL: &str = include_str!("../embed/shell.html");

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("shell markup error at byte {position}: {message}")]
    Xml { position: u64, message: String },

    #[error("shell markup is not valid UTF-8")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("failed to read shell `{0}`")]
    Io(PathBuf, #[source] io::Error),
}

/// The built-in shell as a fresh document.
pub fn builtin() -> Result<Document, ShellError> {
    parse(BUILTIN_SHELL)
}

/// Read and parse the host page at `path`.
pub fn from_path(path: &Path) -> Result<Document, ShellError> {
    let markup = fs::read_to_string(path).map_err(|err| ShellError::Io(path.to_path_buf(), err))?;
    parse(&markup)
}

/// Parse host page markup into a [`Document`].
///
/// Whitespace-only text between elements is dropped. The `<html>` element's
/// attributes land on the document root.
pub fn parse(markup: &str) -> Result<Document, ShellError> {
    let mut reader = Reader::from_str(markup);
    reader.config_mut().trim_text(false);
    reader.config_mut().enable_all_checks(false);
    reader.config_mut().check_end_names = false;

    let mut doc = Document::new();
    let mut open: Vec<NodeId> = Vec::new();
    let mut seen_html = false;

    loop {
        let event = reader.read_event().map_err(|e| ShellError::Xml {
            position: reader.error_position() as u64,
            message: e.to_string(),
        })?;
        let parent = open.last().copied().unwrap_or(doc.root());

        match event {
            Event::Start(elem) => {
                let id = open_element(&mut doc, parent, &elem, &mut seen_html, open.is_empty())?;
                if doc.tag(id).is_some_and(|tag| !is_void(tag)) {
                    open.push(id);
                }
            }
            Event::Empty(elem) => {
                open_element(&mut doc, parent, &elem, &mut seen_html, open.is_empty())?;
            }
            Event::End(elem) => {
                let name = std::str::from_utf8(elem.name().as_ref())?.to_ascii_lowercase();
                // Unbalanced end tags close up to the nearest matching element
                if let Some(pos) = open.iter().rposition(|id| doc.tag(*id) == Some(name.as_str())) {
                    open.truncate(pos);
                }
            }
            Event::Text(text) => {
                let raw = std::str::from_utf8(&text)?;
                // Keep whitespace only when it separates two pieces of text
                if !raw.trim().is_empty() || ends_with_text(&doc, parent) {
                    doc.append_text(parent, &decode_text(raw));
                }
            }
            Event::CData(data) => {
                doc.append_text(parent, std::str::from_utf8(&data)?);
            }
            Event::GeneralRef(entity) => {
                let raw = format!("&{};", std::str::from_utf8(&entity)?);
                doc.append_text(parent, &decode_text(&raw));
            }
            Event::Eof => break,
            // Declarations, doctype, comments, processing instructions
            _ => {}
        }
    }

    Ok(doc)
}

/// Create the element for a start tag and attach it under `parent`.
fn open_element(
    doc: &mut Document,
    parent: NodeId,
    elem: &BytesStart<'_>,
    seen_html: &mut bool,
    at_top: bool,
) -> Result<NodeId, ShellError> {
    let tag = std::str::from_utf8(elem.name().as_ref())?.to_ascii_lowercase();

    let id = if tag == "html" && at_top && !*seen_html {
        *seen_html = true;
        doc.root()
    } else {
        let id = doc.create_element(&tag);
        doc.append(parent, id);
        id
    };

    for attr in elem.html_attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref())?.to_ascii_lowercase();
        let value = std::str::from_utf8(&attr.value)?;
        doc.set_attr(id, &key, &decode_text(value));
    }

    Ok(id)
}

fn ends_with_text(doc: &Document, parent: NodeId) -> bool {
    doc.children(parent)
        .last()
        .is_some_and(|last| matches!(doc.data(*last), NodeData::Text(_)))
}

/// Resolve character and entity references, HTML5 names included.
///
/// References that resolve to nothing are kept verbatim.
fn decode_text(raw: &str) -> Cow<'_, str> {
    if !raw.contains('&') {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let resolved = tail
            .find(';')
            .and_then(|end| resolve_entity(&tail[1..end]).map(|value| (value, end)));
        match resolved {
            Some((value, end)) => {
                out.push_str(&value);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// `name` is the text between `&` and `;`.
fn resolve_entity(name: &str) -> Option<Cow<'static, str>> {
    let Some(code) = name.strip_prefix('#') else {
        return resolve_html5_entity(name).map(Cow::Borrowed);
    };
    let value = match code.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => code.parse().ok()?,
    };
    char::from_u32(value).map(|c| Cow::Owned(c.to_string()))
}
