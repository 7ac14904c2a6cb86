//! Fluent assertion API for node trees

use super::testing_matchers::TextMatch;
use crate::diag::ast::{Node, NodeKind, Site};

/// Create an assertion builder for a node
pub fn assert_node(node: &Node) -> NodeAssertion<'_> {
    NodeAssertion {
        node,
        context: "root".to_string(),
    }
}

pub struct NodeAssertion<'a> {
    node: &'a Node,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    pub fn node(&self) -> &'a Node {
        self.node
    }

    pub fn kind(self, expected: NodeKind) -> Self {
        assert_eq!(
            self.node.kind,
            expected,
            "{}: Expected {}, found {} ({})",
            self.context,
            expected,
            self.node.kind,
            summarize(self.node)
        );
        self
    }

    /// Exact text value
    pub fn text(self, expected: &str) -> Self {
        self.text_matches(TextMatch::Exact(expected.to_string()))
    }

    pub fn text_starts_with(self, prefix: &str) -> Self {
        self.text_matches(TextMatch::Prefix(prefix.to_string()))
    }

    pub fn text_contains(self, needle: &str) -> Self {
        self.text_matches(TextMatch::Contains(needle.to_string()))
    }

    pub fn text_matches(self, matcher: TextMatch) -> Self {
        let actual = match self.node.text_value() {
            Some(text) => text,
            None => panic!(
                "{}: Expected a text value on {}, found {:?}",
                self.context, self.node.kind, self.node.value
            ),
        };
        matcher.assert(actual, &self.context);
        self
    }

    /// A `Name` leaf with the given value
    pub fn name(self, expected: &str) -> Self {
        self.kind(NodeKind::Name).text(expected).child_count(0)
    }

    pub fn file(self, expected: &str) -> Self {
        let site = self.site();
        assert_eq!(site.file, expected, "{}: file", self.context);
        self
    }

    pub fn line(self, expected: &str) -> Self {
        let site = self.site();
        assert_eq!(site.line.as_deref(), Some(expected), "{}: line", self.context);
        self
    }

    pub fn column(self, expected: &str) -> Self {
        let site = self.site();
        assert_eq!(
            site.column.as_deref(),
            Some(expected),
            "{}: column",
            self.context
        );
        self
    }

    pub fn level(self, expected: &str) -> Self {
        let site = self.site();
        assert_eq!(
            site.level.as_deref(),
            Some(expected),
            "{}: level",
            self.context
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.node.children.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} children, found {}: [{}]",
            self.context,
            expected,
            actual,
            self.node
                .children
                .iter()
                .map(summarize)
                .collect::<Vec<_>>()
                .join(", ")
        );
        self
    }

    /// Assert on a specific child by index
    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let child = match self.node.children.get(index) {
            Some(child) => child,
            None => panic!(
                "{}: Child index {} out of bounds ({} has {} children)",
                self.context,
                index,
                self.node.kind,
                self.node.children.len()
            ),
        };
        assertion(NodeAssertion {
            node: child,
            context: format!("{}.children[{}]", self.context, index),
        });
        self
    }

    /// `Name`/`Modifier` leaf values in pre-order
    pub fn leaf_words(self, expected: &[&str]) -> Self {
        assert_eq!(
            self.node.leaf_words(),
            expected,
            "{}: leaf words",
            self.context
        );
        self
    }

    fn site(&self) -> &'a Site {
        match self.node.site() {
            Some(site) => site,
            None => panic!(
                "{}: Expected a site on {}, found {:?}",
                self.context, self.node.kind, self.node.value
            ),
        }
    }
}

fn summarize(node: &Node) -> String {
    match &node.value {
        Some(value) => {
            let text = value.to_string();
            if text.chars().count() > 40 {
                format!("{}: {}...", node.kind, text.chars().take(40).collect::<String>())
            } else {
                format!("{}: {}", node.kind, text)
            }
        }
        None => node.kind.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passing_chain() {
        let node = Node::scope(Node::name("a"), Node::name("b"));
        assert_node(&node)
            .kind(NodeKind::Scope)
            .child_count(2)
            .leaf_words(&["a", "b"])
            .child(1, |b| {
                b.name("b");
            });
    }

    #[test]
    #[should_panic(expected = "root.children[0]: Expected Modifier, found Name")]
    fn test_failure_names_the_path() {
        let node = Node::scope(Node::name("a"), Node::name("b"));
        assert_node(&node).child(0, |a| {
            a.kind(NodeKind::Modifier);
        });
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_missing_child() {
        assert_node(&Node::name("a")).child(0, |_| {});
    }
}
