//! Two-phase attribute application.
//!
//! Phase one runs when a node is constructed from attributes, before it has a
//! parent: it sets the id and local visibility. Phase two runs when the node
//! is composed into a view tree, after parent links exist: it applies the
//! enabled flag and decides focus, which both depend on the final tree shape.

use std::fmt;

use crate::{
    attrs::{ANDROID_NS, AttributeSet, ViewNodeAttributes},
    error::{Error, Result},
    focus::FocusManager,
    hierarchy::Hierarchy,
    id::NodeId,
    node::{Lifecycle, Visibility},
    stage::Stage,
};

/// Pipeline phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Construction-time attributes.
    Attributes,
    /// Composition-time attributes.
    NodeAttributes,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attributes => f.write_str("construction attributes"),
            Self::NodeAttributes => f.write_str("view node attributes"),
        }
    }
}

/// Attribute application, one call per phase per node.
pub trait AttributePipeline {
    /// Phase one. Only valid for a node still in [`Lifecycle::Constructed`].
    ///
    /// The `id` attribute is applied only if the node's id is still zero. A
    /// `visibility` of "gone" or "invisible" is applied; anything else leaves
    /// the node visible.
    fn apply_attributes(&mut self, id: NodeId, attrs: &dyn AttributeSet) -> Result<()>;

    /// Phase two. Valid once, in any state before
    /// [`Lifecycle::NodeAttributesApplied`].
    ///
    /// Applies `android:enabled` if present. Then, if the element declares a
    /// focus override, clears focus at the tree root. Finally, unless the
    /// node or an ancestor already has focus, requests focus if
    /// `android:focus` is true or the node is focusable in touch mode.
    fn apply_view_node_attributes(
        &mut self,
        id: NodeId,
        attrs: &dyn ViewNodeAttributes,
    ) -> Result<()>;
}

impl AttributePipeline for Stage {
    fn apply_attributes(&mut self, id: NodeId, attrs: &dyn AttributeSet) -> Result<()> {
        let node = self.get_mut(id)?;
        if node.lifecycle != Lifecycle::Constructed {
            return Err(Error::PhaseOrder {
                node: id,
                phase: Phase::Attributes,
                state: node.lifecycle,
            });
        }
        node.lifecycle = Lifecycle::AttributesApplied;

        let view_id = attrs.attribute_resource_value(ANDROID_NS, "id", 0);
        if node.id() == 0 {
            node.set_id(view_id);
        }
        match attrs.attribute_value(ANDROID_NS, "visibility") {
            Some("gone") => node.set_visibility(Visibility::Gone),
            Some("invisible") => node.set_visibility(Visibility::Invisible),
            _ => {}
        }
        tracing::trace!(?id, view_id = node.id(), visibility = %node.visibility(), "applied attributes");
        Ok(())
    }

    fn apply_view_node_attributes(
        &mut self,
        id: NodeId,
        attrs: &dyn ViewNodeAttributes,
    ) -> Result<()> {
        let node = self.get_mut(id)?;
        if node.lifecycle == Lifecycle::NodeAttributesApplied {
            return Err(Error::PhaseOrder {
                node: id,
                phase: Phase::NodeAttributes,
                state: node.lifecycle,
            });
        }
        node.lifecycle = Lifecycle::NodeAttributesApplied;

        if let Some(enabled) = attrs.attribute_as_bool("android:enabled") {
            node.set_enabled(enabled);
        }

        if attrs.has_request_focus_override() {
            self.check_focus_override(id)?;
        }
        if !self.any_parent_has_focus(id)? {
            let requested = attrs.attribute_as_bool("android:focus") == Some(true);
            if requested || self.get(id)?.is_focusable_in_touch_mode() {
                self.request_focus(id)?;
            }
        }
        tracing::trace!(?id, "applied view node attributes");
        Ok(())
    }
}
