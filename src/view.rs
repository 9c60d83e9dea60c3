//! Owned view trees produced by route views.
//!
//! A [`Node`] is plain data: routes build it, layouts leave an
//! [`outlet`](Node::outlet) where the child route is mounted, and renderers
//! walk or serialize the finished tree.

use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    Fragment(Vec<Node>),
    /// Insertion point for the child route's view.
    Outlet,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn element(tag: impl Into<String>) -> Self {
        Node::Element(Element {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        })
    }

    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn fragment(children: impl IntoIterator<Item = Node>) -> Self {
        Node::Fragment(children.into_iter().collect())
    }

    pub fn outlet() -> Self {
        Node::Outlet
    }

    pub fn empty() -> Self {
        Node::Empty
    }

    /// An anchor pointing at an in-app path.
    pub fn link(href: impl Into<String>, label: impl Into<String>) -> Self {
        Node::element("a").attr("href", href).child(Node::text(label))
    }

    /// Set an attribute. No-op on anything but an element.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Node::Element(el) = &mut self {
            let name = name.into();
            let value = value.into();
            match el.attributes.iter_mut().find(|(n, _)| *n == name) {
                Some((_, v)) => *v = value,
                None => el.attributes.push((name, value)),
            }
        }
        self
    }

    /// Append a child. On a fragment the child joins the fragment; on
    /// leaves it is ignored.
    pub fn child(mut self, child: Node) -> Self {
        match &mut self {
            Node::Element(el) => el.children.push(child),
            Node::Fragment(children) => children.push(child),
            _ => {}
        }
        self
    }

    pub fn children(self, children: impl IntoIterator<Item = Node>) -> Self {
        children.into_iter().fold(self, Node::child)
    }

    /// Replace the first outlet in this tree with `child`.
    ///
    /// A tree without an outlet is returned unchanged and `child` is dropped.
    pub fn mount(mut self, child: Node) -> Self {
        let mut child = Some(child);
        self.fill_outlet(&mut child);
        self
    }

    fn fill_outlet(&mut self, child: &mut Option<Node>) -> bool {
        match self {
            Node::Outlet => match child.take() {
                Some(node) => {
                    *self = node;
                    true
                }
                None => false,
            },
            Node::Element(el) => el.children.iter_mut().any(|c| c.fill_outlet(child)),
            Node::Fragment(children) => children.iter_mut().any(|c| c.fill_outlet(child)),
            _ => false,
        }
    }

    /// All elements with the given tag, depth first.
    pub fn find_all(&self, tag: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect(tag, &mut found);
        found
    }

    fn collect<'a>(&'a self, tag: &str, found: &mut Vec<&'a Element>) {
        match self {
            Node::Element(el) => {
                if el.tag == tag {
                    found.push(el);
                }
                el.children.iter().for_each(|c| c.collect(tag, found));
            }
            Node::Fragment(children) => children.iter().for_each(|c| c.collect(tag, found)),
            _ => {}
        }
    }

    /// Concatenated text content.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.push_text(&mut out);
        out
    }

    fn push_text(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(t),
            Node::Element(el) => el.children.iter().for_each(|c| c.push_text(out)),
            Node::Fragment(children) => children.iter().for_each(|c| c.push_text(out)),
            Node::Outlet | Node::Empty => {}
        }
    }

    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl Element {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

fn escape(s: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for c in s.chars() {
        match c {
            '&' => f.write_str("&amp;")?,
            '<' => f.write_str("&lt;")?,
            '>' => f.write_str("&gt;")?,
            '"' => f.write_str("&quot;")?,
            '\'' => f.write_str("&#39;")?,
            c => write!(f, "{c}")?,
        }
    }
    Ok(())
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Text(t) => escape(t, f),
            Node::Element(el) => {
                write!(f, "<{}", el.tag)?;
                for (name, value) in &el.attributes {
                    write!(f, " {name}=\"")?;
                    escape(value, f)?;
                    f.write_str("\"")?;
                }
                f.write_str(">")?;
                for child in &el.children {
                    child.fmt(f)?;
                }
                write!(f, "</{}>", el.tag)
            }
            Node::Fragment(children) => children.iter().try_for_each(|c| c.fmt(f)),
            Node::Outlet | Node::Empty => Ok(()),
        }
    }
}
