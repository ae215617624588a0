use slotmap::SlotMap;

use crate::{
    attrs::AttributeSet,
    config::StageConfig,
    error::{Error, Result},
    id::NodeId,
    node::{Lifecycle, Shadow},
    pipeline::AttributePipeline,
};

/// Arena holding every shadow in a test, plus the parent links between them.
///
/// The stage owns the nodes; links between them are plain [`NodeId`] keys, so
/// nodes can be detached and removed in any order. Tree queries live on the
/// [`Hierarchy`](crate::Hierarchy) trait, focus on
/// [`FocusManager`](crate::FocusManager), event delivery on
/// [`Dispatch`](crate::Dispatch) and attribute application on
/// [`AttributePipeline`].
pub struct Stage {
    /// Node storage arena.
    pub(crate) nodes: SlotMap<NodeId, Shadow>,
    /// Active configuration.
    pub(crate) config: StageConfig,
}

impl Stage {
    /// Create an empty stage with the default configuration.
    pub fn new() -> Self {
        Self::with_config(StageConfig::default())
    }

    /// Create an empty stage with the given configuration.
    pub fn with_config(config: StageConfig) -> Self {
        Self {
            nodes: SlotMap::with_key(),
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    /// Create a detached node simulating a widget of the given class.
    pub fn create(&mut self, class_name: impl Into<String>) -> NodeId {
        let shadow = Shadow::new(class_name);
        tracing::trace!(class = shadow.class_name(), "create");
        self.nodes.insert(shadow)
    }

    /// Create a detached node and apply its construction-time attributes.
    pub fn create_with_attributes(
        &mut self,
        class_name: impl Into<String>,
        attrs: &dyn AttributeSet,
    ) -> Result<NodeId> {
        let id = self.create(class_name);
        self.apply_attributes(id, attrs)?;
        Ok(id)
    }

    /// Return a node, or `None` if the handle is stale.
    pub fn node(&self, id: NodeId) -> Option<&Shadow> {
        self.nodes.get(id)
    }

    /// Return a node mutably, or `None` if the handle is stale.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Shadow> {
        self.nodes.get_mut(id)
    }

    /// Return a node, or [`Error::NodeNotFound`].
    pub fn get(&self, id: NodeId) -> Result<&Shadow> {
        self.nodes.get(id).ok_or(Error::NodeNotFound(id))
    }

    /// Return a node mutably, or [`Error::NodeNotFound`].
    pub fn get_mut(&mut self, id: NodeId) -> Result<&mut Shadow> {
        self.nodes.get_mut(id).ok_or(Error::NodeNotFound(id))
    }

    /// Is the handle live on this stage?
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the stage holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all live handles, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys()
    }

    /// Append `child` to `parent`'s children.
    ///
    /// The child must not already have a parent, and must not be `parent` or
    /// one of its ancestors.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.get(parent)?;
        if self.get(child)?.parent.is_some() {
            return Err(Error::AlreadyAttached(child));
        }
        let mut current = Some(parent);
        while let Some(id) = current {
            if id == child {
                return Err(Error::CircularParentage);
            }
            current = self.nodes[id].parent;
        }

        self.nodes[parent].children.push(child);
        let node = &mut self.nodes[child];
        node.parent = Some(parent);
        if node.lifecycle < Lifecycle::Attached {
            node.lifecycle = Lifecycle::Attached;
        }
        tracing::trace!(?parent, ?child, "attach");
        Ok(())
    }

    /// Attach each of `children` to `parent`, in order.
    pub fn attach_all(
        &mut self,
        parent: NodeId,
        children: impl IntoIterator<Item = NodeId>,
    ) -> Result<()> {
        for child in children {
            self.attach(parent, child)?;
        }
        Ok(())
    }

    /// Detach a node from its parent. Does nothing for a node with no parent.
    /// The node keeps its own children and its lifecycle state.
    pub fn detach(&mut self, child: NodeId) -> Result<()> {
        let Some(parent) = self.get_mut(child)?.parent.take() else {
            return Ok(());
        };
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.retain(|c| *c != child);
        }
        tracing::trace!(?parent, ?child, "detach");
        Ok(())
    }

    /// Remove a node from the stage and return its final state. The node is
    /// detached first, and its children become roots.
    pub fn remove(&mut self, id: NodeId) -> Result<Shadow> {
        self.detach(id)?;
        let mut shadow = self.nodes.remove(id).ok_or(Error::NodeNotFound(id))?;
        for child in shadow.children.drain(..) {
            if let Some(c) = self.nodes.get_mut(child) {
                c.parent = None;
            }
        }
        tracing::trace!(?id, "remove");
        Ok(shadow)
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new()
    }
}
