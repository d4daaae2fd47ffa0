//! Shadow tree: the arena that owns every node built from one element tree.

use crate::capability::Capability;
use crate::node::{ShadowNode, ShadowNodeKind, Tag};
use crate::trait_cast::{node_implements, trait_cast};
use fabric_core::alloc::{HashMap, HashSet};
use fabric_core::profiling::profile_function;
use indexmap::IndexMap;
use static_assertions::assert_impl_all;

/// Node identifier in a shadow tree.
///
/// Ids are never reused within a tree, so an id whose node was detached
/// resolves to `None` instead of to another node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// A node in the shadow tree.
struct ShadowTreeNode {
    node: Box<dyn ShadowNode>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A tree of shadow nodes.
///
/// The tree owns every node; children are owned through their parent's
/// child list and parent links are plain ids, so ownership never cycles.
/// Nodes never change after the build. The only structural mutation is
/// [`detach`](ShadowTree::detach), which takes `&mut self`; shared
/// `&ShadowTree` borrows can be read concurrently from many threads.
pub struct ShadowTree {
    nodes: IndexMap<NodeId, ShadowTreeNode>,
    root: Option<NodeId>,
    references: HashMap<String, NodeId>,
    next_id: usize,
}

assert_impl_all!(ShadowTree: Send, Sync);

impl ShadowTree {
    pub(crate) fn new() -> Self {
        Self {
            nodes: IndexMap::new(),
            root: None,
            references: HashMap::new(),
            next_id: 0,
        }
    }

    /// Insert a node and attach it as the last child of `parent`.
    pub(crate) fn insert(&mut self, node: Box<dyn ShadowNode>, parent: Option<NodeId>) -> NodeId {
        let node_id = NodeId(self.next_id);
        self.next_id += 1;

        self.nodes.insert(
            node_id,
            ShadowTreeNode {
                node,
                parent,
                children: Vec::new(),
            },
        );

        match parent {
            Some(parent_id) => {
                if let Some(parent_node) = self.nodes.get_mut(&parent_id) {
                    parent_node.children.push(node_id);
                }
            }
            None => self.root = Some(node_id),
        }

        node_id
    }

    /// Record a capture key. Returns `false` if the key is already taken.
    pub(crate) fn insert_reference(&mut self, key: String, node_id: NodeId) -> bool {
        if self.references.contains_key(&key) {
            return false;
        }
        self.references.insert(key, node_id);
        true
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn root_node(&self) -> Option<&dyn ShadowNode> {
        self.root.and_then(|id| self.get(id))
    }

    pub fn get(&self, id: NodeId) -> Option<&dyn ShadowNode> {
        self.nodes.get(&id).map(|entry| &*entry.node)
    }

    /// Get a node as its concrete kind.
    pub fn get_as<T: ShadowNodeKind>(&self, id: NodeId) -> Option<&T> {
        self.get(id)?.downcast_ref::<T>()
    }

    /// Cast a node to capability `C`; `None` if the node is gone or lacks it.
    pub fn cast<C: Capability + ?Sized>(&self, id: NodeId) -> Option<&C> {
        trait_cast::<C>(self.get(id))
    }

    /// Children of a node in declared order. Empty for unknown ids.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(&id)
            .map(|entry| entry.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(&id)?.parent
    }

    /// Number of ancestors of a node; the root has depth 0.
    pub fn depth(&self, id: NodeId) -> Option<usize> {
        let mut entry = self.nodes.get(&id)?;
        let mut depth = 0;
        while let Some(parent) = entry.parent {
            entry = self.nodes.get(&parent)?;
            depth += 1;
        }
        Some(depth)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node captured under `key` during the build.
    pub fn reference(&self, key: &str) -> Option<NodeId> {
        self.references.get(key).copied()
    }

    pub fn reference_node(&self, key: &str) -> Option<&dyn ShadowNode> {
        self.get(self.reference(key)?)
    }

    /// Node captured under `key`, as its concrete kind.
    pub fn reference_as<T: ShadowNodeKind>(&self, key: &str) -> Option<&T> {
        self.get_as::<T>(self.reference(key)?)
    }

    /// Find a node by its tag.
    pub fn find_by_tag(&self, tag: Tag) -> Option<NodeId> {
        self.nodes
            .iter()
            .find(|(_, entry)| entry.node.tag() == tag)
            .map(|(id, _)| *id)
    }

    /// Depth-first, pre-order traversal from the root.
    pub fn traverse(&self) -> Traverse<'_> {
        Traverse {
            tree: self,
            stack: self.root.into_iter().collect(),
        }
    }

    /// Depth-first, pre-order traversal of the subtree rooted at `id`.
    pub fn traverse_from(&self, id: NodeId) -> Traverse<'_> {
        let stack = if self.contains(id) { vec![id] } else { Vec::new() };
        Traverse { tree: self, stack }
    }

    /// All nodes implementing capability `C`, in traversal order.
    pub fn nodes_with<C: Capability + ?Sized>(&self) -> Vec<NodeId> {
        profile_function!();

        self.traverse()
            .filter(|id| self.get(*id).is_some_and(node_implements::<C>))
            .collect()
    }

    /// Remove `id` and its whole subtree from the tree.
    ///
    /// Returns the number of nodes destroyed; 0 for an unknown id. Capture
    /// keys pointing into the removed subtree are dropped as well.
    pub fn detach(&mut self, id: NodeId) -> usize {
        profile_function!();

        let Some(entry) = self.nodes.get(&id) else {
            return 0;
        };

        if let Some(parent_id) = entry.parent {
            if let Some(parent) = self.nodes.get_mut(&parent_id) {
                parent.children.retain(|child| *child != id);
            }
        }

        let removed: HashSet<NodeId> = self.traverse_from(id).collect();
        self.nodes.retain(|node_id, _| !removed.contains(node_id));
        self.references.retain(|_, node_id| !removed.contains(node_id));
        if self.root == Some(id) {
            self.root = None;
        }

        tracing::debug!(node = id.0, removed = removed.len(), "detached subtree");
        removed.len()
    }
}

impl std::fmt::Debug for ShadowTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShadowTree")
            .field("root", &self.root)
            .field("len", &self.nodes.len())
            .field("references", &self.references.len())
            .finish()
    }
}

/// Pre-order iterator over node ids. See [`ShadowTree::traverse`].
pub struct Traverse<'a> {
    tree: &'a ShadowTree,
    stack: Vec<NodeId>,
}

impl Iterator for Traverse<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack.extend(self.tree.children(id).iter().rev().copied());
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{Layoutable, Scrollable};
    use crate::components::{
        RawTextProps, RawTextShadowNode, ScrollViewProps, ScrollViewShadowNode, TextShadowNode,
        ViewProps, ViewShadowNode,
    };

    // root(View) -> [a(ScrollView) -> [c(Text)], b(RawText)]
    fn sample_tree() -> (ShadowTree, [NodeId; 4]) {
        let mut tree = ShadowTree::new();
        let root = tree.insert(Box::new(ViewShadowNode::create(1, ViewProps::default())), None);
        let a = tree.insert(
            Box::new(ScrollViewShadowNode::create(2, ScrollViewProps::default())),
            Some(root),
        );
        let b = tree.insert(
            Box::new(RawTextShadowNode::create(3, RawTextProps::new("b"))),
            Some(root),
        );
        let c = tree.insert(
            Box::new(TextShadowNode::create(4, Default::default())),
            Some(a),
        );
        (tree, [root, a, b, c])
    }

    #[test]
    fn test_structure() {
        let (tree, [root, a, b, c]) = sample_tree();

        assert_eq!(tree.root(), Some(root));
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.children(root), &[a, b]);
        assert_eq!(tree.children(a), &[c]);
        assert!(tree.children(b).is_empty());
        assert_eq!(tree.parent(c), Some(a));
        assert_eq!(tree.parent(root), None);
        assert_eq!(tree.depth(c), Some(2));
        assert_eq!(tree.depth(root), Some(0));
    }

    #[test]
    fn test_traverse_pre_order() {
        let (tree, [root, a, b, c]) = sample_tree();

        let order: Vec<_> = tree.traverse().collect();
        assert_eq!(order, vec![root, a, c, b]);

        let subtree: Vec<_> = tree.traverse_from(a).collect();
        assert_eq!(subtree, vec![a, c]);
    }

    #[test]
    fn test_nodes_with_capability() {
        let (tree, [root, a, _, _]) = sample_tree();

        assert_eq!(tree.nodes_with::<dyn Layoutable>(), vec![root, a]);
        assert_eq!(tree.nodes_with::<dyn Scrollable>(), vec![a]);
    }

    #[test]
    fn test_typed_access() {
        let (tree, [root, a, b, _]) = sample_tree();

        assert!(tree.get_as::<ViewShadowNode>(root).is_some());
        assert!(tree.get_as::<ViewShadowNode>(a).is_none());
        assert_eq!(tree.get_as::<RawTextShadowNode>(b).map(|n| n.text()), Some("b"));
        assert!(tree.cast::<dyn Scrollable>(a).is_some());
        assert!(tree.cast::<dyn Scrollable>(root).is_none());
    }

    #[test]
    fn test_references() {
        let (mut tree, [_, a, b, _]) = sample_tree();

        assert!(tree.insert_reference("scroll".into(), a));
        assert!(!tree.insert_reference("scroll".into(), b));
        assert_eq!(tree.reference("scroll"), Some(a));
        assert!(tree.reference_as::<ScrollViewShadowNode>("scroll").is_some());
        assert!(tree.reference("missing").is_none());
    }

    #[test]
    fn test_find_by_tag() {
        let (tree, [_, _, b, _]) = sample_tree();

        assert_eq!(tree.find_by_tag(3), Some(b));
        assert_eq!(tree.find_by_tag(99), None);
    }

    #[test]
    fn test_detach_subtree() {
        let (mut tree, [root, a, b, c]) = sample_tree();
        tree.insert_reference("text".into(), c);

        assert_eq!(tree.detach(a), 2);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.children(root), &[b]);
        assert!(tree.get(a).is_none());
        assert!(tree.get(c).is_none());
        assert!(tree.reference("text").is_none());

        // Already gone.
        assert_eq!(tree.detach(a), 0);
        assert!(trait_cast::<dyn Layoutable>(tree.get(a)).is_none());
    }

    #[test]
    fn test_detach_wide_subtree() {
        let mut tree = ShadowTree::new();
        let root = tree.insert(Box::new(ViewShadowNode::create(1, ViewProps::default())), None);
        let list = tree.insert(
            Box::new(ScrollViewShadowNode::create(2, ScrollViewProps::default())),
            Some(root),
        );
        let footer = tree.insert(
            Box::new(ViewShadowNode::create(3, ViewProps::default())),
            Some(root),
        );
        for tag in 4..104 {
            let row = tree.insert(
                Box::new(RawTextShadowNode::create(tag, RawTextProps::new("row"))),
                Some(list),
            );
            tree.insert_reference(format!("row{tag}"), row);
        }
        tree.insert_reference("footer".into(), footer);

        assert_eq!(tree.detach(list), 101);
        assert_eq!(tree.traverse().collect::<Vec<_>>(), vec![root, footer]);
        assert_eq!(tree.reference("footer"), Some(footer));
        assert!(tree.reference("row50").is_none());
    }

    #[test]
    fn test_detach_root() {
        let (mut tree, [root, ..]) = sample_tree();

        assert_eq!(tree.detach(root), 4);
        assert!(tree.is_empty());
        assert!(tree.root().is_none());
        assert!(tree.root_node().is_none());
        assert_eq!(tree.traverse().count(), 0);
    }
}
