//! Arena element tree with parent links.
//!
//! Nodes are addressed by [`NodeId`]. Removed slots are never reused, so a
//! stale id simply stops resolving instead of aliasing a newer node.

use std::fmt;
use std::rc::Rc;

use crate::element::{Content, Element};
use crate::error::TreeError;
use crate::types::{Axis, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Tag attached to a node that should activate something when tapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TriggerId(pub u64);

/// Capability of a node whose cached size assumptions can be dropped.
///
/// The ancestor walk looks for this on each node rather than asking what kind
/// of widget owns it.
pub trait SizeInvalidatable {
    fn invalidate_size(&self, tree: &mut Tree);
}

pub struct Node {
    pub element: Element,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    pub(crate) bounds: Option<Rect>,
    triggers: Vec<TriggerId>,
    capability: Option<Rc<dyn SizeInvalidatable>>,
    page_root: bool,
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.element.id)
            .field("parent", &self.parent)
            .field("children", &self.children)
            .field("bounds", &self.bounds)
            .field("triggers", &self.triggers)
            .field("capability", &self.capability.is_some())
            .field("page_root", &self.page_root)
            .finish()
    }
}

impl Node {
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }
}

#[derive(Debug, Default)]
pub struct Tree {
    nodes: Vec<Option<Node>>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an element (and any nested children) as a detached subtree.
    pub fn insert(&mut self, mut element: Element) -> NodeId {
        let children = match std::mem::take(&mut element.content) {
            Content::Children(children) => children,
            other => {
                element.content = other;
                Vec::new()
            }
        };

        let id = NodeId(self.nodes.len());
        self.nodes.push(Some(Node {
            element,
            parent: None,
            children: Vec::with_capacity(children.len()),
            bounds: None,
            triggers: Vec::new(),
            capability: None,
            page_root: false,
        }));

        for child in children {
            let child_id = self.insert(child);
            if let Some(node) = self.node_mut(child_id) {
                node.parent = Some(id);
            }
            if let Some(node) = self.node_mut(id) {
                node.children.push(child_id);
            }
        }

        id
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0).and_then(Option::as_mut)
    }

    fn require_mut(&mut self, id: NodeId) -> Result<&mut Node, TreeError> {
        self.node_mut(id).ok_or(TreeError::MissingNode(id))
    }

    pub fn element(&self, id: NodeId) -> Option<&Element> {
        self.get(id).map(|node| &node.element)
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        self.node_mut(id).map(|node| &mut node.element)
    }

    /// Find a node by its element id.
    pub fn find(&self, element_id: &str) -> Option<NodeId> {
        self.nodes.iter().enumerate().find_map(|(index, node)| {
            node.as_ref()
                .filter(|node| node.element.id == element_id)
                .map(|_| NodeId(index))
        })
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|node| node.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[], |node| node.children.as_slice())
    }

    pub fn index_of(&self, parent: NodeId, child: NodeId) -> Option<usize> {
        self.children(parent).iter().position(|c| *c == child)
    }

    // -------------------------------------------------------------------------
    // Structure
    // -------------------------------------------------------------------------

    pub fn append(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        let index = self.children(parent).len();
        self.insert_child(parent, index, child)
    }

    /// Attach `child` under `parent` at `index` (clamped to the child count).
    /// A child that already has a parent is detached from it first.
    pub fn insert_child(
        &mut self,
        parent: NodeId,
        index: usize,
        child: NodeId,
    ) -> Result<(), TreeError> {
        if !self.contains(child) {
            return Err(TreeError::MissingNode(child));
        }
        if !self.contains(parent) {
            return Err(TreeError::MissingNode(parent));
        }
        if parent == child || self.ancestors_unbounded(parent).any(|a| a == child) {
            return Err(TreeError::CycleDetected { parent, child });
        }

        self.detach(child)?;

        let node = self.require_mut(parent)?;
        let index = index.min(node.children.len());
        node.children.insert(index, child);
        self.require_mut(child)?.parent = Some(parent);
        Ok(())
    }

    /// Detach `child` from its parent. Detaching a root is a no-op.
    pub fn detach(&mut self, child: NodeId) -> Result<(), TreeError> {
        let Some(parent) = self.get(child).ok_or(TreeError::MissingNode(child))?.parent else {
            return Ok(());
        };

        let node = self.require_mut(parent)?;
        let Some(position) = node.children.iter().position(|c| *c == child) else {
            return Err(TreeError::NotAChild { parent, child });
        };
        node.children.remove(position);
        self.require_mut(child)?.parent = None;
        Ok(())
    }

    /// Remove `id` and its whole subtree.
    pub fn remove(&mut self, id: NodeId) -> Result<(), TreeError> {
        self.detach(id)?;
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.get_mut(current.0).and_then(Option::take) {
                stack.extend(node.children);
            }
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Containment chain
    // -------------------------------------------------------------------------

    /// Mark a node as a page-level root. Ancestor walks stop before it.
    pub fn set_page_root(&mut self, id: NodeId, page_root: bool) {
        if let Some(node) = self.node_mut(id) {
            node.page_root = page_root;
        }
    }

    pub fn is_page_root(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(|node| node.page_root)
    }

    /// Walk the parent chain of `id` (exclusive), stopping before a page root.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.parent(id),
            stop_at_page: true,
        }
    }

    fn ancestors_unbounded(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.parent(id),
            stop_at_page: false,
        }
    }

    // -------------------------------------------------------------------------
    // Properties
    // -------------------------------------------------------------------------

    pub fn is_visible(&self, id: NodeId) -> bool {
        self.element(id).is_some_and(|element| element.visible)
    }

    pub fn set_visible(&mut self, id: NodeId, visible: bool) {
        if let Some(element) = self.element_mut(id) {
            element.visible = visible;
        }
    }

    pub fn request(&self, id: NodeId, axis: Axis) -> Option<f64> {
        self.element(id).and_then(|element| element.request(axis))
    }

    pub fn set_request(&mut self, id: NodeId, axis: Axis, value: Option<f64>) {
        if let Some(element) = self.element_mut(id) {
            element.set_request(axis, value);
        }
    }

    /// Bounds assigned by the last arrangement pass. `None` until the node has
    /// been laid out.
    pub fn bounds(&self, id: NodeId) -> Option<Rect> {
        self.get(id).and_then(|node| node.bounds)
    }

    // -------------------------------------------------------------------------
    // Triggers
    // -------------------------------------------------------------------------

    pub fn add_trigger(&mut self, id: NodeId, trigger: TriggerId) {
        if let Some(node) = self.node_mut(id)
            && !node.triggers.contains(&trigger)
        {
            node.triggers.push(trigger);
        }
    }

    pub fn remove_trigger(&mut self, id: NodeId, trigger: TriggerId) {
        if let Some(node) = self.node_mut(id) {
            node.triggers.retain(|t| *t != trigger);
        }
    }

    pub fn triggers(&self, id: NodeId) -> &[TriggerId] {
        self.get(id).map_or(&[], |node| node.triggers.as_slice())
    }

    /// Find the nearest tagged node starting at `id` and walking upward.
    pub fn find_trigger(&self, id: NodeId) -> Option<(NodeId, TriggerId)> {
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.get(node_id)?;
            if let Some(trigger) = node.triggers.last() {
                return Some((node_id, *trigger));
            }
            current = node.parent;
        }
        None
    }

    // -------------------------------------------------------------------------
    // Capabilities
    // -------------------------------------------------------------------------

    pub fn set_capability(&mut self, id: NodeId, capability: Option<Rc<dyn SizeInvalidatable>>) {
        if let Some(node) = self.node_mut(id) {
            node.capability = capability;
        }
    }

    pub fn capability(&self, id: NodeId) -> Option<Rc<dyn SizeInvalidatable>> {
        self.get(id).and_then(|node| node.capability.clone())
    }

    pub(crate) fn set_bounds(&mut self, id: NodeId, bounds: Option<Rect>) {
        if let Some(node) = self.node_mut(id) {
            node.bounds = bounds;
        }
    }
}

/// Iterator over a node's ancestors, nearest first.
pub struct Ancestors<'a> {
    tree: &'a Tree,
    next: Option<NodeId>,
    stop_at_page: bool,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        if self.stop_at_page && self.tree.is_page_root(current) {
            self.next = None;
            return None;
        }
        self.next = self.tree.parent(current);
        Some(current)
    }
}
