//! Node type definitions
//!
//! A [`Node`] is a tagged union keyed by [`NodeKind`], with an optional scalar
//! [`NodeValue`] and an ordered sequence of owned children. Trees are built
//! bottom-up and are not mutated once handed to a consumer.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::traits::AstNode;

/// Every kind of node, across both trees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    // Line structure
    Group,
    Message,
    Location,
    From,
    Include,
    Text,
    MessageBody,

    // Type expressions
    Name,
    Modifier,
    Qualified,
    Templated,
    Scope,
    TypeList,
    With,
    EqualityList,
    Equality,
    TextFragment,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Group => "Group",
            NodeKind::Message => "Message",
            NodeKind::Location => "Location",
            NodeKind::From => "From",
            NodeKind::Include => "Include",
            NodeKind::Text => "Text",
            NodeKind::MessageBody => "MessageBody",
            NodeKind::Name => "Name",
            NodeKind::Modifier => "Modifier",
            NodeKind::Qualified => "Qualified",
            NodeKind::Templated => "Templated",
            NodeKind::Scope => "Scope",
            NodeKind::TypeList => "TypeList",
            NodeKind::With => "With",
            NodeKind::EqualityList => "EqualityList",
            NodeKind::Equality => "Equality",
            NodeKind::TextFragment => "TextFragment",
        }
    }

    /// Kinds produced by the line classifier
    pub fn is_line_structure(&self) -> bool {
        matches!(
            self,
            NodeKind::Group
                | NodeKind::Message
                | NodeKind::Location
                | NodeKind::From
                | NodeKind::Include
                | NodeKind::Text
                | NodeKind::MessageBody
        )
    }

    /// Kinds that carry a [`Site`] value
    pub fn is_classified_line(&self) -> bool {
        matches!(
            self,
            NodeKind::Message | NodeKind::Location | NodeKind::From | NodeKind::Include
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The source position captured from a classified line prefix.
///
/// `matched` holds the exact prefix text the pattern consumed, so the line can
/// be rendered back byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    pub matched: String,
}

impl Site {
    pub fn new(file: impl Into<String>, matched: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line: None,
            column: None,
            level: None,
            matched: matched.into(),
        }
    }

    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.line = Some(line.into());
        self
    }

    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file)?;
        if let Some(line) = &self.line {
            write!(f, ":{}", line)?;
            if let Some(column) = &self.column {
                write!(f, ":{}", column)?;
            }
        }
        if let Some(level) = &self.level {
            write!(f, ": {}", level)?;
        }
        Ok(())
    }
}

/// Scalar payload of a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeValue {
    Text(String),
    Site(Site),
}

impl fmt::Display for NodeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeValue::Text(text) => f.write_str(text),
            NodeValue::Site(site) => write!(f, "{}", site),
        }
    }
}

/// A tree element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<NodeValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            value: None,
            children: Vec::new(),
        }
    }

    pub fn with_text(kind: NodeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            value: Some(NodeValue::Text(text.into())),
            children: Vec::new(),
        }
    }

    pub fn with_site(kind: NodeKind, site: Site) -> Self {
        Self {
            kind,
            value: Some(NodeValue::Site(site)),
            children: Vec::new(),
        }
    }

    pub fn group() -> Self {
        Self::new(NodeKind::Group)
    }

    pub fn text(line: impl Into<String>) -> Self {
        Self::with_text(NodeKind::Text, line)
    }

    pub fn message_body(text: impl Into<String>) -> Self {
        Self::with_text(NodeKind::MessageBody, text)
    }

    pub fn text_fragment(text: impl Into<String>) -> Self {
        Self::with_text(NodeKind::TextFragment, text)
    }

    pub fn name(name: impl Into<String>) -> Self {
        Self::with_text(NodeKind::Name, name)
    }

    pub fn modifier(modifier: impl Into<String>) -> Self {
        Self::with_text(NodeKind::Modifier, modifier)
    }

    /// `base<arg>` or `base<a, b, ...>`. A single argument is attached
    /// directly, several are wrapped in a `TypeList`.
    pub fn templated(base: Node, mut args: Vec<Node>) -> Self {
        let argument = if args.len() == 1 {
            args.remove(0)
        } else {
            Node::type_list(args)
        };
        Node::new(NodeKind::Templated)
            .with_child(base)
            .with_child(argument)
    }

    pub fn scope(left: Node, right: Node) -> Self {
        Node::new(NodeKind::Scope).with_child(left).with_child(right)
    }

    /// Wraps `ty` with its modifiers in source order. Without modifiers the
    /// type is returned unchanged.
    pub fn qualified(before: Vec<Node>, ty: Node, after: Vec<Node>) -> Self {
        if before.is_empty() && after.is_empty() {
            return ty;
        }
        let mut node = Node::new(NodeKind::Qualified);
        node.children.extend(before);
        node.append(ty);
        node.children.extend(after);
        node
    }

    pub fn type_list(items: Vec<Node>) -> Self {
        Self::list(NodeKind::TypeList, items)
    }

    pub fn equality(left: Node, right: Node) -> Self {
        Node::new(NodeKind::Equality)
            .with_child(left)
            .with_child(right)
    }

    pub fn equality_list(items: Vec<Node>) -> Self {
        Self::list(NodeKind::EqualityList, items)
    }

    pub fn with_clause(qualified: Node, equalities: Node) -> Self {
        Node::new(NodeKind::With)
            .with_child(qualified)
            .with_child(equalities)
    }

    fn list(kind: NodeKind, items: Vec<Node>) -> Self {
        let mut list = Node::new(kind);
        for item in items {
            list.append(item);
        }
        list
    }

    /// Moves `child` to the end of this node's children
    pub fn append(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.append(child);
        self
    }

    pub fn child(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    pub fn text_value(&self) -> Option<&str> {
        match &self.value {
            Some(NodeValue::Text(text)) => Some(text),
            _ => None,
        }
    }

    pub fn site(&self) -> Option<&Site> {
        match &self.value {
            Some(NodeValue::Site(site)) => Some(site),
            _ => None,
        }
    }

    pub fn is(&self, kind: NodeKind) -> bool {
        self.kind == kind
    }

    /// Pre-order traversal, iterative so deep trees don't grow the stack
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Leaf nodes in pre-order
    pub fn leaves(&self) -> impl Iterator<Item = &Node> {
        self.descendants().filter(|node| node.children.is_empty())
    }

    /// Values of the `Name` and `Modifier` leaves in pre-order
    pub fn leaf_words(&self) -> Vec<&str> {
        self.leaves()
            .filter(|node| matches!(node.kind, NodeKind::Name | NodeKind::Modifier))
            .filter_map(|node| node.text_value())
            .collect()
    }

    /// Depth of the deepest node; a leaf has height 1
    pub fn height(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 1usize)];
        while let Some((node, depth)) = stack.pop() {
            max = max.max(depth);
            stack.extend(node.children.iter().map(|child| (child, depth + 1)));
        }
        max
    }
}

impl AstNode for Node {
    fn node_type(&self) -> &'static str {
        self.kind.as_str()
    }

    fn display_label(&self) -> String {
        self.value
            .as_ref()
            .map(|value| value.to_string())
            .unwrap_or_default()
    }

    fn children(&self) -> &[Node] {
        &self.children
    }
}

/// Iterator returned by [`Node::descendants`]
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
