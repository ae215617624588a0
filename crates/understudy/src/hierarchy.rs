//! Read-only queries over the parent links of a [`Stage`].
//!
//! Nothing here is cached: every call walks the links as they are at the time
//! of the call.

use slotmap::SlotMap;

use crate::{
    error::{Error, Result},
    id::NodeId,
    node::{Shadow, Visibility},
    stage::Stage,
};

/// Iterator from a node up through its ancestors to the root, inclusive.
pub struct Lineage<'a> {
    /// Arena being walked.
    nodes: &'a SlotMap<NodeId, Shadow>,
    /// Next node to yield.
    next: Option<NodeId>,
}

impl<'a> Iterator for Lineage<'a> {
    type Item = (NodeId, &'a Shadow);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let node = self.nodes.get(id)?;
        self.next = node.parent;
        Some((id, node))
    }
}

/// Tree queries.
pub trait Hierarchy {
    /// Walk from `id` up to its root, inclusive of both.
    fn lineage(&self, id: NodeId) -> Result<Lineage<'_>>;

    /// The node's parent, if attached.
    fn parent(&self, id: NodeId) -> Result<Option<NodeId>>;

    /// The node's children, in attach order.
    fn children(&self, id: NodeId) -> Result<&[NodeId]>;

    /// Ancestors of `id`, nearest first, not including `id`.
    fn ancestors(&self, id: NodeId) -> Result<Vec<NodeId>>;

    /// The top of the tree containing `id`. A node with no parent is its own
    /// root.
    fn root_view(&self, id: NodeId) -> Result<NodeId>;

    /// True if the node and every ancestor up to the root are
    /// [`Visibility::Visible`].
    fn derived_is_visible(&self, id: NodeId) -> Result<bool>;

    /// True if the node itself or any ancestor is focused.
    fn any_parent_has_focus(&self, id: NodeId) -> Result<bool>;

    /// The subtree rooted at `root` in depth-first pre-order, `root` first.
    fn preorder(&self, root: NodeId) -> Result<Vec<NodeId>>;

    /// The first node in pre-order under `root` (inclusive) whose view id is
    /// `view_id`.
    fn find_view_by_id(&self, root: NodeId, view_id: i32) -> Result<Option<NodeId>>;
}

impl Hierarchy for Stage {
    fn lineage(&self, id: NodeId) -> Result<Lineage<'_>> {
        self.get(id)?;
        Ok(Lineage {
            nodes: &self.nodes,
            next: Some(id),
        })
    }

    fn parent(&self, id: NodeId) -> Result<Option<NodeId>> {
        Ok(self.get(id)?.parent)
    }

    fn children(&self, id: NodeId) -> Result<&[NodeId]> {
        Ok(&self.get(id)?.children)
    }

    fn ancestors(&self, id: NodeId) -> Result<Vec<NodeId>> {
        Ok(self.lineage(id)?.skip(1).map(|(id, _)| id).collect())
    }

    fn root_view(&self, id: NodeId) -> Result<NodeId> {
        self.lineage(id)?
            .last()
            .map(|(id, _)| id)
            .ok_or(Error::NodeNotFound(id))
    }

    fn derived_is_visible(&self, id: NodeId) -> Result<bool> {
        Ok(self
            .lineage(id)?
            .all(|(_, node)| node.visibility() == Visibility::Visible))
    }

    fn any_parent_has_focus(&self, id: NodeId) -> Result<bool> {
        Ok(self.lineage(id)?.any(|(_, node)| node.has_focus()))
    }

    fn preorder(&self, root: NodeId) -> Result<Vec<NodeId>> {
        self.get(root)?;
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let Some(node) = self.nodes.get(id) else {
                continue;
            };
            out.push(id);
            for child in node.children.iter().rev() {
                stack.push(*child);
            }
        }
        Ok(out)
    }

    fn find_view_by_id(&self, root: NodeId, view_id: i32) -> Result<Option<NodeId>> {
        Ok(self
            .preorder(root)?
            .into_iter()
            .find(|id| self.nodes[*id].id == view_id))
    }
}
