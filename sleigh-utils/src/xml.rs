//! A small owned element tree.
//!
//! Elements keep their attributes and children in insertion order, and the
//! writer emits them in that order with no declaration and no indentation.
//! Reading goes through `roxmltree` and converts back into the same tree.

use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets `name`, replacing an existing value in place.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Appends a new child with `tag` and returns it for filling in.
    pub fn sub_element(&mut self, tag: impl Into<String>) -> &mut Element {
        self.children.push(Element::new(tag));
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    pub fn child(&self, tag: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.tag == tag)
    }

    pub fn child_text(&self, tag: &str) -> Option<&str> {
        self.child(tag).and_then(|c| c.text.as_deref())
    }

    pub fn children_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.tag == tag)
    }

    /// Pre-order walk, starting with `self`.
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(element) = stack.pop() {
            out.push(element);
            stack.extend(element.children.iter().rev());
        }
        out
    }

    /// Serializes the tree. Fails on characters XML 1.0 cannot carry, so a
    /// written document always parses back.
    pub fn to_xml_string(&self) -> Result<String, InvalidCharacter> {
        let mut out = String::new();
        self.write_into(&mut out)?;
        Ok(out)
    }

    fn write_into(&self, out: &mut String) -> Result<(), InvalidCharacter> {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attributes {
            check_chars(&self.tag, value)?;
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
        if self.text.is_none() && self.children.is_empty() {
            out.push_str(" />");
            return Ok(());
        }
        out.push('>');
        if let Some(text) = &self.text {
            check_chars(&self.tag, text)?;
            out.push_str(&escape_text(text));
        }
        for child in &self.children {
            child.write_into(out)?;
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidCharacter {
    pub tag: String,
    pub character: char,
}

impl std::fmt::Display for InvalidCharacter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<{}> holds U+{:04X}, which XML 1.0 does not allow",
            self.tag, self.character as u32
        )
    }
}

impl std::error::Error for InvalidCharacter {}

/// `Char` production of XML 1.0. Surrogates cannot occur in a Rust `char`.
pub fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}

fn check_chars(tag: &str, value: &str) -> Result<(), InvalidCharacter> {
    match value.chars().find(|c| !is_xml_char(*c)) {
        Some(character) => Err(InvalidCharacter {
            tag: tag.to_string(),
            character,
        }),
        None => Ok(()),
    }
}

/// Carriage returns are written as a character reference; parsers would
/// otherwise normalize them to line feeds.
pub fn escape_text(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '\r']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\r' => out.push_str("&#13;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

pub fn escape_attr(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\n', '\r', '\t']) {
        return Cow::Borrowed(value);
    }
    let mut out = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            '\t' => out.push_str("&#09;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Parses a document and returns its root element.
///
/// Whitespace-only text between elements is dropped; text of an element
/// is the concatenation of its direct text children.
pub fn parse(xml: &str) -> Result<Element, roxmltree::Error> {
    let doc = roxmltree::Document::parse(xml)?;
    Ok(convert(doc.root_element()))
}

fn convert(node: roxmltree::Node<'_, '_>) -> Element {
    let mut element = Element::new(node.tag_name().name());
    for attr in node.attributes() {
        element
            .attributes
            .push((attr.name().to_string(), attr.value().to_string()));
    }
    let mut text = String::new();
    for child in node.children() {
        if child.is_element() {
            element.children.push(convert(child));
        } else if let Some(t) = child.text().filter(|_| child.is_text()) {
            text.push_str(t);
        }
    }
    if !text.is_empty() && (element.children.is_empty() || !text.trim().is_empty()) {
        element.text = Some(text);
    }
    element
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_element_is_self_closing() {
        assert_eq!(Element::new("wear").to_xml_string().unwrap(), "<wear />");
        assert_eq!(
            Element::new("location")
                .with_attr("reference", "3")
                .to_xml_string()
                .unwrap(),
            "<location reference=\"3\" />"
        );
    }

    #[test]
    fn test_escaping() {
        assert_eq!(escape_text("a<b & c>d"), "a&lt;b &amp; c&gt;d");
        assert_eq!(escape_text("10.0\r"), "10.0&#13;");
        assert_eq!(escape_attr("say \"hi\"\n"), "say &quot;hi&quot;&#10;");
        assert!(matches!(escape_text("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_xml_chars() {
        assert!(is_xml_char('\t'));
        assert!(is_xml_char('é'));
        assert!(is_xml_char('\u{1F381}'));
        assert!(!is_xml_char('\u{1}'));
        assert!(!is_xml_char('\u{1F}'));
        assert!(!is_xml_char('\u{FFFE}'));
    }

    #[test]
    fn test_set_attr_replaces_in_place() {
        let mut e = Element::new("a").with_attr("id", "1").with_attr("x", "y");
        e.set_attr("id", "2");
        assert_eq!(
            e.attributes,
            vec![
                ("id".to_string(), "2".to_string()),
                ("x".to_string(), "y".to_string())
            ]
        );
    }
}
