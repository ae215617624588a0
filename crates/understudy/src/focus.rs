use understudy_geom::Direction;

use crate::{
    config::FocusPolicy,
    error::Result,
    hierarchy::Hierarchy,
    id::NodeId,
    listener,
    stage::Stage,
};

/// Focus state and focus-change notification.
///
/// Focus is a per-node flag. Under [`FocusPolicy::Independent`] nothing stops
/// several nodes in one tree from being focused at once.
pub trait FocusManager {
    /// Focus a node, equivalent to `request_focus_in(id, Direction::Down)`.
    fn request_focus(&mut self, id: NodeId) -> Result<bool>;

    /// Focus a node. The direction is accepted for parity with the platform
    /// but has no effect. Always returns true.
    fn request_focus_in(&mut self, id: NodeId, direction: Direction) -> Result<bool>;

    /// Unfocus a node, notifying its focus-change listener.
    fn clear_focus(&mut self, id: NodeId) -> Result<()>;

    /// Set the focus flag and notify the node's focus-change listener, if
    /// any, with the new value. The listener runs even if the flag did not
    /// change.
    fn set_view_focus(&mut self, id: NodeId, has_focus: bool) -> Result<()>;

    /// Clear focus at the root of the tree containing `id`. Only the root is
    /// touched. Returns the root.
    fn check_focus_override(&mut self, id: NodeId) -> Result<NodeId>;

    /// Clear focus on every focused node in the tree containing `id`,
    /// depth-first from the root. Returns the number of nodes cleared.
    fn clear_tree_focus(&mut self, id: NodeId) -> Result<usize>;

    /// All focused nodes in the tree containing `id`, in pre-order.
    fn focused_in_tree(&self, id: NodeId) -> Result<Vec<NodeId>>;
}

impl FocusManager for Stage {
    fn request_focus(&mut self, id: NodeId) -> Result<bool> {
        self.request_focus_in(id, Direction::Down)
    }

    fn request_focus_in(&mut self, id: NodeId, direction: Direction) -> Result<bool> {
        self.get(id)?;
        if self.config.focus_policy == FocusPolicy::Single {
            for other in self.focused_in_tree(id)? {
                if other != id {
                    tracing::debug!(?other, "focus policy clears previous focus");
                    self.clear_focus(other)?;
                }
            }
        }
        tracing::trace!(?id, ?direction, "request focus");
        self.set_view_focus(id, true)?;
        Ok(true)
    }

    fn clear_focus(&mut self, id: NodeId) -> Result<()> {
        self.set_view_focus(id, false)
    }

    fn set_view_focus(&mut self, id: NodeId, has_focus: bool) -> Result<()> {
        self.get_mut(id)?.focused = has_focus;
        listener::invoke(self, id, listener::focus_change, |l, stage| {
            l(stage, id, has_focus)
        })?;
        Ok(())
    }

    fn check_focus_override(&mut self, id: NodeId) -> Result<NodeId> {
        let root = self.root_view(id)?;
        tracing::debug!(?id, ?root, "focus override clears root");
        self.clear_focus(root)?;
        Ok(root)
    }

    fn clear_tree_focus(&mut self, id: NodeId) -> Result<usize> {
        let mut cleared = 0;
        for node in self.focused_in_tree(id)? {
            // A listener may have removed or unfocused a later node already.
            if self.node(node).is_some_and(|n| n.is_focused()) {
                self.clear_focus(node)?;
                cleared += 1;
            }
        }
        Ok(cleared)
    }

    fn focused_in_tree(&self, id: NodeId) -> Result<Vec<NodeId>> {
        let root = self.root_view(id)?;
        Ok(self
            .preorder(root)?
            .into_iter()
            .filter(|n| self.nodes[*n].focused)
            .collect())
    }
}
