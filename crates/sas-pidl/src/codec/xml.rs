//! XML text parsing and writing with quick-xml.
//!
//! Whitespace-only text between elements is dropped. Comments, processing
//! instructions, declarations and doctypes are skipped. Element nesting
//! is capped at `MAX_DEPTH_CEILING` in both directions.

use std::borrow::Cow;
use std::fmt::Display;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use sas_pidl_core::config::MAX_DEPTH_CEILING;
use sas_pidl_core::errors::CodecError;

use super::document::{is_xml_name, Document, Element, Node};

/// Parse XML text into a [`Document`].
pub fn parse(text: &str) -> Result<Document, CodecError> {
    let mut reader = Reader::from_str(text);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| CodecError::InvalidXml(format!("{e} at byte {}", reader.buffer_position())))?;
        match event {
            Event::Start(start) => {
                check_depth(stack.len() + 1)?;
                stack.push(open_element(&start)?);
            }
            Event::Empty(start) => {
                check_depth(stack.len() + 1)?;
                let element = open_element(&start)?;
                close_element(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| CodecError::InvalidXml("unexpected closing tag".to_string()))?;
                close_element(&mut stack, &mut root, element)?;
            }
            Event::Text(t) => {
                let text = t.unescape().map_err(xml_error)?;
                push_text(&mut stack, text)?;
            }
            Event::CData(c) => {
                let text = String::from_utf8(c.into_inner().into_owned())
                    .map_err(|e| CodecError::InvalidUtf8(e.to_string()))?;
                push_text(&mut stack, Cow::Owned(text))?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(CodecError::InvalidXml(format!("unclosed element <{}>", open.name)));
    }
    root.map(Document::new)
        .ok_or_else(|| CodecError::InvalidXml("document has no root element".to_string()))
}

/// Serialize a [`Document`] to XML text. Childless elements are written
/// in the self-closing form.
pub fn write(doc: &Document) -> Result<String, CodecError> {
    let mut writer = Writer::new(Vec::new());
    write_element(&mut writer, &doc.root, 1)?;
    String::from_utf8(writer.into_inner()).map_err(|e| CodecError::InvalidUtf8(e.to_string()))
}

fn open_element(start: &BytesStart<'_>) -> Result<Element, CodecError> {
    let mut element = Element::new(utf8(start.name().as_ref())?);
    for attr in start.attributes() {
        let attr = attr.map_err(xml_error)?;
        let key = utf8(attr.key.as_ref())?;
        let value = attr.unescape_value().map_err(xml_error)?;
        element.attributes.push((key, value.into_owned()));
    }
    Ok(element)
}

fn close_element(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), CodecError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(Node::Element(element)),
        None if root.is_none() => *root = Some(element),
        None => {
            return Err(CodecError::InvalidXml(format!(
                "second root element <{}>",
                element.name
            )))
        }
    }
    Ok(())
}

fn push_text(stack: &mut [Element], text: Cow<'_, str>) -> Result<(), CodecError> {
    if text.trim().is_empty() {
        return Ok(());
    }
    match stack.last_mut() {
        Some(parent) => {
            // Adjacent text and CDATA runs form one node.
            if let Some(Node::Text(prev)) = parent.children.last_mut() {
                prev.push_str(&text);
            } else {
                parent.children.push(Node::Text(text.into_owned()));
            }
            Ok(())
        }
        None => Err(CodecError::InvalidXml("text outside the root element".to_string())),
    }
}

fn write_element(
    writer: &mut Writer<Vec<u8>>,
    element: &Element,
    depth: usize,
) -> Result<(), CodecError> {
    check_depth(depth)?;
    check_name(&element.name)?;
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        check_name(key)?;
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.children.is_empty() {
        return writer.write_event(Event::Empty(start)).map_err(xml_error);
    }

    writer.write_event(Event::Start(start)).map_err(xml_error)?;
    for child in &element.children {
        match child {
            Node::Element(e) => write_element(writer, e, depth + 1)?,
            Node::Text(t) => writer
                .write_event(Event::Text(BytesText::new(t)))
                .map_err(xml_error)?,
        }
    }
    writer
        .write_event(Event::End(BytesEnd::new(element.name.as_str())))
        .map_err(xml_error)
}

fn check_depth(depth: usize) -> Result<(), CodecError> {
    if depth > MAX_DEPTH_CEILING {
        return Err(CodecError::DepthExceeded {
            max: MAX_DEPTH_CEILING,
        });
    }
    Ok(())
}

fn check_name(name: &str) -> Result<(), CodecError> {
    if is_xml_name(name) {
        Ok(())
    } else {
        Err(CodecError::InvalidXml(format!("invalid name \"{name}\"")))
    }
}

fn utf8(bytes: &[u8]) -> Result<String, CodecError> {
    std::str::from_utf8(bytes)
        .map(str::to_string)
        .map_err(|e| CodecError::InvalidUtf8(e.to_string()))
}

fn xml_error(e: impl Display) -> CodecError {
    CodecError::InvalidXml(e.to_string())
}
