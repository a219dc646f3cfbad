use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use super::error::FetchError;

/// Untyped XML element as returned by the BoardGameGeek API.
///
/// No schema is assumed: every lookup is optional and the path accessors fall
/// back to a default on any missing segment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawNode {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<RawNode>,
    pub text: String,
}

impl RawNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// First child element with the given tag
    pub fn child(&self, name: &str) -> Option<&RawNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All child elements with the given tag, in document order
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a RawNode> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    pub fn take_child(self, name: &str) -> Option<RawNode> {
        self.children.into_iter().find(|c| c.name == name)
    }

    /// Follow a path of first-match child tags
    pub fn descend(&self, path: &[&str]) -> Option<&RawNode> {
        path.iter().try_fold(self, |node, name| node.child(name))
    }

    pub fn attr_at(&self, path: &[&str], key: &str) -> Option<&str> {
        self.descend(path).and_then(|node| node.attr(key))
    }

    /// Numeric attribute at `path`, 0 when missing or unusable
    pub fn number_at(&self, path: &[&str], key: &str) -> f64 {
        coerce_number(self.attr_at(path, key))
    }

    pub fn text_at(&self, path: &[&str]) -> Option<&str> {
        self.descend(path).map(|node| node.text.as_str())
    }
}

#[cfg(test)]
impl RawNode {
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    pub fn with_child(mut self, child: RawNode) -> Self {
        self.children.push(child);
        self
    }
}

/// Coerce an attribute value into a non-negative finite number, defaulting to 0
pub fn coerce_number(value: Option<&str>) -> f64 {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|n| n.is_finite() && *n >= 0.0)
        .unwrap_or(0.0)
}

/// Truncating conversion for counts (players, minutes, ids)
pub fn coerce_count(value: Option<&str>) -> u32 {
    coerce_number(value) as u32
}

/// Parse an XML document into a tree rooted at an unnamed document node.
pub fn parse_document(xml: &str) -> Result<RawNode, FetchError> {
    let mut reader = Reader::from_str(xml);

    // stack[0] is the document node; open elements are pushed above it
    let mut stack = vec![RawNode::default()];

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => stack.push(node_from_start(e)?),
            Event::Empty(ref e) => {
                let node = node_from_start(e)?;
                attach(&mut stack, node)?;
            }
            Event::End(_) => {
                if stack.len() < 2 {
                    return Err(FetchError::malformed("closing tag without opening tag"));
                }
                let node = stack.pop().ok_or_else(|| FetchError::malformed("empty stack"))?;
                attach(&mut stack, node)?;
            }
            Event::Text(ref e) => {
                let text = match e.unescape() {
                    Ok(text) => text.into_owned(),
                    Err(err) => {
                        tracing::debug!("Keeping raw text after unescape failure: {}", err);
                        String::from_utf8_lossy(e).into_owned()
                    }
                };
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&text);
                }
            }
            Event::CData(e) => {
                let text = String::from_utf8_lossy(&e.into_inner()).into_owned();
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&text);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if stack.len() != 1 {
        return Err(FetchError::malformed(format!(
            "{} unclosed element(s) at end of document",
            stack.len() - 1
        )));
    }

    stack.pop().ok_or_else(|| FetchError::malformed("empty document"))
}

fn node_from_start(e: &BytesStart<'_>) -> Result<RawNode, FetchError> {
    let mut node = RawNode::new(String::from_utf8_lossy(e.name().as_ref()).into_owned());
    for attr in e.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = match attr.unescape_value() {
            Ok(value) => value.into_owned(),
            Err(_) => String::from_utf8_lossy(&attr.value).into_owned(),
        };
        node.attributes.push((key, value));
    }
    Ok(node)
}

fn attach(stack: &mut [RawNode], node: RawNode) -> Result<(), FetchError> {
    let parent = stack
        .last_mut()
        .ok_or_else(|| FetchError::malformed("element outside document"))?;
    parent.children.push(node);
    Ok(())
}
