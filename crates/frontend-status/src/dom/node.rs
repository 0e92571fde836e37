//! Owned XML tree types.

/// Coarse classification of a node, mirroring the DOM node type check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Element,
    /// Character data, including CDATA sections.
    Text,
    /// Comments and processing instructions.
    Other,
}

/// A node in the parsed tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    CData(String),
    Comment(String),
    ProcessingInstruction(String),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Element(_) => NodeKind::Element,
            Node::Text(_) | Node::CData(_) => NodeKind::Text,
            Node::Comment(_) | Node::ProcessingInstruction(_) => NodeKind::Other,
        }
    }

    /// The element, if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }
}

/// An element with its attributes and children in document order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder-style attribute setter.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Builder-style child append.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Tag name exactly as written, prefix included.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up an attribute value by its exact name.
    ///
    /// Returns `None` when the attribute is absent. An attribute written as
    /// `name=""` is present and yields `Some("")`.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Immediate children that are elements, skipping text and comments.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Immediate element children whose name equals `name`.
    pub fn child_elements_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.child_elements().filter(move |el| el.name == name)
    }

    pub(crate) fn push_attribute(&mut self, name: String, value: String) {
        self.attributes.push((name, value));
    }

    pub(crate) fn push_child(&mut self, child: Node) {
        self.children.push(child);
    }
}

/// A parsed document: the top-level nodes and the index of its root element.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    nodes: Vec<Node>,
    root: usize,
}

impl Document {
    /// Build a document from top-level nodes. Returns `None` if none of them
    /// is an element.
    pub fn from_nodes(nodes: Vec<Node>) -> Option<Self> {
        let root = nodes.iter().position(|n| n.kind() == NodeKind::Element)?;
        Some(Self { nodes, root })
    }

    /// The document element.
    pub fn root(&self) -> &Element {
        match &self.nodes[self.root] {
            Node::Element(el) => el,
            // from_nodes only stores the index of an element
            _ => unreachable!("document root index does not point at an element"),
        }
    }

    /// All top-level nodes, including comments and processing instructions
    /// around the root.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn into_root(mut self) -> Element {
        match self.nodes.swap_remove(self.root) {
            Node::Element(el) => el,
            _ => unreachable!("document root index does not point at an element"),
        }
    }
}

impl From<Element> for Document {
    fn from(root: Element) -> Self {
        Self {
            nodes: vec![Node::Element(root)],
            root: 0,
        }
    }
}
