use crate::{
    error::{Error, Result},
    event::{KeyEvent, TouchEvent},
    hierarchy::Hierarchy,
    id::NodeId,
    listener,
    stage::Stage,
};

/// Delivery of clicks, touches and keys to a node's listeners.
pub trait Dispatch {
    /// Run the click listener. Returns true if one was registered. No
    /// visibility or enabled checks are made.
    fn perform_click(&mut self, id: NodeId) -> Result<bool>;

    /// Click the way a user could: fails with [`Error::NotVisible`] if the
    /// node or an ancestor is hidden, then with [`Error::NotEnabled`] if the
    /// node is disabled. Otherwise behaves like [`Dispatch::perform_click`].
    fn checked_perform_click(&mut self, id: NodeId) -> Result<bool>;

    /// Hand a touch event to the touch listener. Returns the listener's
    /// result, or false if none is registered.
    fn dispatch_touch_event(&mut self, id: NodeId, event: &TouchEvent) -> Result<bool>;

    /// Hand a key event to the key listener. Returns the listener's result,
    /// or false if none is registered. No routing between nodes is done.
    fn dispatch_key_event(&mut self, id: NodeId, event: &KeyEvent) -> Result<bool>;
}

impl Dispatch for Stage {
    fn perform_click(&mut self, id: NodeId) -> Result<bool> {
        tracing::trace!(?id, "click");
        Ok(listener::invoke(self, id, listener::click, |l, stage| l(stage, id))?.is_some())
    }

    fn checked_perform_click(&mut self, id: NodeId) -> Result<bool> {
        if !self.derived_is_visible(id)? {
            return Err(Error::NotVisible(id));
        }
        if !self.get(id)?.is_enabled() {
            return Err(Error::NotEnabled(id));
        }
        self.perform_click(id)
    }

    fn dispatch_touch_event(&mut self, id: NodeId, event: &TouchEvent) -> Result<bool> {
        tracing::trace!(?id, ?event, "touch");
        Ok(
            listener::invoke(self, id, listener::touch, |l, stage| l(stage, id, event))?
                .unwrap_or(false),
        )
    }

    fn dispatch_key_event(&mut self, id: NodeId, event: &KeyEvent) -> Result<bool> {
        tracing::trace!(?id, ?event, "key");
        Ok(
            listener::invoke(self, id, listener::key, |l, stage| l(stage, id, event))?
                .unwrap_or(false),
        )
    }
}
