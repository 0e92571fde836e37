//! Build a [`Document`] from raw bytes with quick-xml.
//!
//! Whitespace is kept as text nodes so the tree has the same shape a
//! browser would produce. Whitespace outside the root element is dropped.

use super::node::{Document, Element, Node};
use crate::error::StatusError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Parse an XML document.
///
/// Fails on anything that is not well-formed: mismatched or unclosed tags,
/// bad attributes, unknown entities, text or a second element outside the
/// root. A body with no element at all is [`StatusError::NoRoot`].
pub fn parse(xml: &[u8]) -> Result<Document, StatusError> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(false);

    let mut top: Vec<Node> = Vec::new();
    let mut stack: Vec<Element> = Vec::new();
    let mut seen_root = false;
    let mut buf = Vec::new();

    loop {
        let position = reader.buffer_position();
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| StatusError::parse(position, e))?;

        match event {
            Event::Start(ref e) => {
                if stack.is_empty() && seen_root {
                    return Err(StatusError::parse(position, "content after root element"));
                }
                stack.push(start_element(e, position)?);
            }
            Event::Empty(ref e) => {
                let el = start_element(e, position)?;
                attach(&mut stack, &mut top, &mut seen_root, Node::Element(el), position)?;
            }
            Event::End(_) => {
                // end names are checked by the reader
                let Some(el) = stack.pop() else {
                    return Err(StatusError::parse(position, "unexpected end tag"));
                };
                attach(&mut stack, &mut top, &mut seen_root, Node::Element(el), position)?;
            }
            Event::Text(ref e) => {
                let text = e
                    .unescape()
                    .map_err(|err| StatusError::parse(position, err))?
                    .into_owned();
                if stack.is_empty() {
                    if !text.trim().is_empty() {
                        return Err(StatusError::parse(position, "text outside root element"));
                    }
                } else {
                    push_child(&mut stack, Node::Text(text));
                }
            }
            Event::CData(ref e) => {
                let text = String::from_utf8_lossy(e).into_owned();
                if stack.is_empty() {
                    return Err(StatusError::parse(position, "CDATA outside root element"));
                }
                push_child(&mut stack, Node::CData(text));
            }
            Event::Comment(ref e) => {
                let node = Node::Comment(String::from_utf8_lossy(e).into_owned());
                if stack.is_empty() {
                    top.push(node);
                } else {
                    push_child(&mut stack, node);
                }
            }
            Event::PI(ref e) => {
                let node = Node::ProcessingInstruction(String::from_utf8_lossy(e).into_owned());
                if stack.is_empty() {
                    top.push(node);
                } else {
                    push_child(&mut stack, node);
                }
            }
            Event::Eof => break,
            // declaration and doctype carry nothing the tree needs
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(StatusError::parse(
            reader.buffer_position(),
            format!("unclosed element <{}>", open.name()),
        ));
    }

    Document::from_nodes(top).ok_or(StatusError::NoRoot)
}

fn start_element(e: &BytesStart<'_>, position: u64) -> Result<Element, StatusError> {
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let mut el = Element::new(name);
    for attr in e.attributes() {
        let attr = attr.map_err(|err| StatusError::parse(position, err))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|err| StatusError::parse(position, err))?
            .into_owned();
        el.push_attribute(key, value);
    }
    Ok(el)
}

fn push_child(stack: &mut [Element], node: Node) {
    if let Some(parent) = stack.last_mut() {
        parent.push_child(node);
    }
}

/// Attach a closed element to its parent, or make it the document root.
fn attach(
    stack: &mut [Element],
    top: &mut Vec<Node>,
    seen_root: &mut bool,
    node: Node,
    position: u64,
) -> Result<(), StatusError> {
    if let Some(parent) = stack.last_mut() {
        parent.push_child(node);
        return Ok(());
    }
    if *seen_root {
        return Err(StatusError::parse(position, "content after root element"));
    }
    *seen_root = true;
    top.push(node);
    Ok(())
}
