//! Compact JSON mapping of the XML document model.
//!
//! A document travels as a single-entry object keyed by the root name.
//! Element content maps as follows:
//!
//! - no attributes and no child elements: the text as a string, or `null`
//!   when empty
//! - otherwise an object: `"@name"` entries for attributes, `"#text"` for
//!   direct text, one entry per child element name in first-appearance
//!   order, repeated names collected into an array
//!
//! Numbers and booleans decode as text. Nested arrays and non-scalar
//! attribute values are rejected. Documents the mapping cannot reproduce
//! in source order are rejected on encode: same-named siblings separated
//! by another element, and text that follows a child element.
//!
//! Container nesting is bounded by the codec's `max_depth` in both
//! directions. Payloads are measured before serde_json sees them.

use std::collections::HashSet;

use serde_json::{Map, Value};
use sas_pidl_core::config::{DEFAULT_MAX_DEPTH, MAX_DEPTH_CEILING};
use sas_pidl_core::errors::CodecError;
use sas_pidl_core::BinData;

use super::document::{is_xml_name, Document, Element, Node};

const TEXT_KEY: &str = "#text";
const ATTRIBUTE_PREFIX: char = '@';

/// Encoder/decoder between [`Document`] and compact JSON bytes.
#[derive(Debug, Clone, Copy)]
pub struct JsonCodec {
    max_depth: usize,
}

impl Default for JsonCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonCodec {
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the container nesting limit, clamped to `1..=MAX_DEPTH_CEILING`.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.clamp(1, MAX_DEPTH_CEILING);
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Encode a document as compact JSON.
    ///
    /// Fails on names that are not valid XML names, on content the mapping
    /// would reorder, and on nesting beyond `max_depth`.
    pub fn encode(&self, doc: &Document) -> Result<BinData, CodecError> {
        let mut top = Map::new();
        top.insert(doc.root.name.clone(), self.element_to_value(&doc.root, "", 1)?);
        serde_json::to_vec(&Value::Object(top))
            .map(BinData::from)
            .map_err(|e| CodecError::InvalidJson(e.to_string()))
    }

    /// Decode a compact JSON payload. Trailing NUL bytes are ignored.
    pub fn decode(&self, payload: &BinData) -> Result<Document, CodecError> {
        let bytes = payload.trimmed();
        if bytes.is_empty() {
            return Err(CodecError::EmptyPayload);
        }
        check_nesting(bytes, self.max_depth)?;
        let value: Value = serde_json::from_slice(bytes).map_err(json_error)?;
        value_to_document(value)
    }

    /// `level` is the nesting of the container that will hold the value.
    fn element_to_value(
        &self,
        element: &Element,
        parent: &str,
        level: usize,
    ) -> Result<Value, CodecError> {
        let path = format!("{parent}/{}", element.name);
        if !is_xml_name(&element.name) {
            return Err(unsupported(&path, "invalid element name"));
        }
        if element.attributes.is_empty() && !element.has_elements() {
            let text = element.text();
            return Ok(if text.is_empty() {
                Value::Null
            } else {
                Value::String(text)
            });
        }
        let own = level + 1;
        if own > self.max_depth {
            return Err(CodecError::DepthExceeded {
                max: self.max_depth,
            });
        }

        let mut map = Map::new();
        for (key, value) in &element.attributes {
            if !is_xml_name(key) {
                let attr_path = format!("{path}/{ATTRIBUTE_PREFIX}{key}");
                return Err(unsupported(&attr_path, "invalid attribute name"));
            }
            map.insert(format!("{ATTRIBUTE_PREFIX}{key}"), Value::String(value.clone()));
        }
        let text = element.text();
        if !text.is_empty() {
            map.insert(TEXT_KEY.to_string(), Value::String(text));
        }
        for (name, group) in sibling_groups(element, &path)? {
            let value = if let [single] = group.as_slice() {
                self.element_to_value(single, &path, own)?
            } else {
                let items = group
                    .iter()
                    .map(|child| self.element_to_value(child, &path, own + 1))
                    .collect::<Result<Vec<_>, _>>()?;
                Value::Array(items)
            };
            map.insert(name.to_string(), value);
        }
        Ok(Value::Object(map))
    }
}

/// Child elements grouped by name in first-appearance order. Each name must
/// form one contiguous run, and no text may follow the first child element.
fn sibling_groups<'a>(
    element: &'a Element,
    path: &str,
) -> Result<Vec<(&'a str, Vec<&'a Element>)>, CodecError> {
    let mut groups: Vec<(&str, Vec<&Element>)> = Vec::new();
    let mut closed: HashSet<&str> = HashSet::new();
    for node in &element.children {
        match node {
            Node::Text(text) if !text.is_empty() && !groups.is_empty() => {
                return Err(unsupported(path, "text after child elements"));
            }
            Node::Text(_) => {}
            Node::Element(child) => match groups.last_mut() {
                Some((name, run)) if *name == child.name => run.push(child),
                last => {
                    if let Some((name, _)) = last {
                        closed.insert(*name);
                    }
                    if closed.contains(child.name.as_str()) {
                        return Err(unsupported(
                            &format!("{path}/{}", child.name),
                            "same-named siblings separated by other elements",
                        ));
                    }
                    groups.push((child.name.as_str(), vec![child]));
                }
            },
        }
    }
    Ok(groups)
}

/// Reject payloads whose object/array nesting exceeds `max` without
/// recursing. Malformed input is left for serde_json to report.
fn check_nesting(bytes: &[u8], max: usize) -> Result<(), CodecError> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for &b in bytes {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' | b'[' => {
                depth += 1;
                if depth > max {
                    return Err(CodecError::DepthExceeded { max });
                }
            }
            b'}' | b']' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    Ok(())
}

fn value_to_document(value: Value) -> Result<Document, CodecError> {
    let map = match value {
        Value::Object(map) => map,
        other => {
            return Err(CodecError::InvalidRoot {
                found: kind(&other).to_string(),
            })
        }
    };
    let len = map.len();
    let mut entries = map.into_iter();
    match (entries.next(), entries.next()) {
        (Some((_, Value::Array(_))), None) => Err(CodecError::InvalidRoot {
            found: "array".to_string(),
        }),
        (Some((name, content)), None) => Ok(Document::new(value_to_element(name, content, "")?)),
        _ => Err(CodecError::InvalidRoot {
            found: format!("object with {len} entries"),
        }),
    }
}

fn value_to_element(name: String, value: Value, parent: &str) -> Result<Element, CodecError> {
    let path = format!("{parent}/{name}");
    if !is_xml_name(&name) {
        return Err(unsupported(&path, "invalid element name"));
    }
    let mut element = Element::new(name);

    match value {
        Value::Object(map) => {
            for (key, value) in map {
                if let Some(attr) = key.strip_prefix(ATTRIBUTE_PREFIX) {
                    let attr_path = format!("{path}/{key}");
                    if !is_xml_name(attr) {
                        return Err(unsupported(&attr_path, "invalid attribute name"));
                    }
                    let text = scalar_text(value)
                        .ok_or_else(|| unsupported(&attr_path, "attribute value must be a scalar"))?;
                    element.attributes.push((attr.to_string(), text));
                } else if key == TEXT_KEY {
                    let text = scalar_text(value)
                        .ok_or_else(|| unsupported(&format!("{path}/{key}"), "text must be a scalar"))?;
                    push_text(&mut element, text);
                } else if let Value::Array(items) = value {
                    for item in items {
                        if item.is_array() {
                            return Err(unsupported(&format!("{path}/{key}"), "nested array"));
                        }
                        let child = value_to_element(key.clone(), item, &path)?;
                        element.children.push(Node::Element(child));
                    }
                } else {
                    let child = value_to_element(key, value, &path)?;
                    element.children.push(Node::Element(child));
                }
            }
        }
        Value::Array(_) => return Err(unsupported(&path, "array outside an object entry")),
        scalar => {
            if let Some(text) = scalar_text(scalar) {
                push_text(&mut element, text);
            }
        }
    }
    Ok(element)
}

fn push_text(element: &mut Element, text: String) {
    if !text.is_empty() {
        element.children.push(Node::Text(text));
    }
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s),
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn unsupported(path: &str, message: &str) -> CodecError {
    CodecError::UnsupportedConstruct {
        path: path.to_string(),
        message: message.to_string(),
    }
}

fn json_error(e: serde_json::Error) -> CodecError {
    CodecError::InvalidJson(e.to_string())
}
