//! Arena view over a finished node tree
//!
//! Nodes own their children and hold no parent pointer. [`TreeView`] flattens a
//! tree into a contiguous store of entries indexed by [`NodeId`], each with a
//! non-owning parent index and its depth. The view borrows the tree; it never
//! owns or mutates a node.

use super::node::{Node, NodeKind};

/// Index of a node inside a [`TreeView`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug)]
struct Entry<'a> {
    node: &'a Node,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    depth: usize,
}

/// Pre-order arena of a node tree with parent back-references
#[derive(Debug)]
pub struct TreeView<'a> {
    entries: Vec<Entry<'a>>,
}

impl<'a> TreeView<'a> {
    /// Builds the view in pre-order; the root is `NodeId(0)`
    pub fn new(root: &'a Node) -> Self {
        let mut entries: Vec<Entry<'a>> = Vec::new();
        let mut stack: Vec<(&'a Node, Option<NodeId>, usize)> = vec![(root, None, 0)];

        while let Some((node, parent, depth)) = stack.pop() {
            let id = NodeId(entries.len());
            entries.push(Entry {
                node,
                parent,
                children: Vec::with_capacity(node.children.len()),
                depth,
            });
            if let Some(parent) = parent {
                entries[parent.0].children.push(id);
            }
            for child in node.children.iter().rev() {
                stack.push((child, Some(id), depth + 1));
            }
        }

        Self { entries }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &'a Node {
        self.entries[id.0].node
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.entries[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.entries[id.0].children
    }

    pub fn depth(&self, id: NodeId) -> usize {
        self.entries[id.0].depth
    }

    /// Ids in pre-order
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.entries.len()).map(NodeId)
    }

    /// Parent, grandparent, ... up to the root
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut current = self.parent(id);
        while let Some(parent) = current {
            result.push(parent);
            current = self.parent(parent);
        }
        result
    }

    /// Kinds from the root down to `id`, e.g. `Group/Message/MessageBody`
    pub fn path(&self, id: NodeId) -> String {
        let mut kinds: Vec<&str> = self
            .ancestors(id)
            .into_iter()
            .map(|ancestor| self.node(ancestor).kind.as_str())
            .collect();
        kinds.reverse();
        kinds.push(self.node(id).kind.as_str());
        kinds.join("/")
    }

    /// First node of `kind` in pre-order
    pub fn find(&self, kind: NodeKind) -> Option<NodeId> {
        self.ids().find(|id| self.node(*id).kind == kind)
    }
}
