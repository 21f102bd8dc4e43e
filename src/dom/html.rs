//! Serializing a [`Document`] back to HTML.

use super::{Document, NodeData, NodeId, is_void};
use anyhow::Result;
use quick_xml::{
    Writer,
    events::{BytesEnd, BytesStart, BytesText, Event},
};
use std::io::Cursor;

pub type HtmlWriter = Writer<Cursor<Vec<u8>>>;

const DOCTYPE: &str = "<!DOCTYPE html>\n";

/// Write the whole document, prefixed with the HTML5 doctype.
///
/// `indent` is the pretty-print width; `0` writes everything on one line.
pub fn to_html(doc: &Document, indent: usize) -> Result<String> {
    let buffer = Cursor::new(Vec::with_capacity(4096));
    let mut writer = if indent > 0 {
        Writer::new_with_indent(buffer, b' ', indent)
    } else {
        Writer::new(buffer)
    };

    write_node(&mut writer, doc, doc.root())?;

    let body = String::from_utf8(writer.into_inner().into_inner())?;
    Ok(format!("{DOCTYPE}{body}\n"))
}

fn write_node(writer: &mut HtmlWriter, doc: &Document, id: NodeId) -> Result<()> {
    let el = match doc.data(id) {
        NodeData::Text(text) => {
            writer.write_event(Event::Text(BytesText::new(text)))?;
            return Ok(());
        }
        NodeData::Element(el) => el,
    };

    let mut start = BytesStart::new(el.tag());
    for (key, value) in el.attrs() {
        start.push_attribute((key, value));
    }
    if let Some(class) = el.class_attr() {
        start.push_attribute(("class", class.as_str()));
    }
    if let Some(style) = el.style_attr() {
        start.push_attribute(("style", style.as_str()));
    }

    if is_void(el.tag()) {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    // Non-void elements always get an explicit end tag, even when empty
    writer.write_event(Event::Start(start))?;
    for child in doc.children(id) {
        write_node(writer, doc, *child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(el.tag())))?;
    Ok(())
}
