//! Listener slots attached to each shadow.
//!
//! Every listener receives the [`Stage`] mutably along with the handle of the
//! node it is registered on, so it can read or mutate any node, including its
//! own. Listeners are shared handles: the slot stays occupied while a listener
//! runs, so a listener that triggers its own event again runs again, nested.
//! Nothing guards against unbounded recursion.

use std::rc::Rc;

use crate::{
    error::Result,
    event::{KeyEvent, TouchEvent},
    id::NodeId,
    stage::Stage,
};

/// Called when a node is clicked.
pub type ClickListener = Rc<dyn Fn(&mut Stage, NodeId)>;
/// Called with key events. Returns true if the event was consumed.
pub type KeyListener = Rc<dyn Fn(&mut Stage, NodeId, &KeyEvent) -> bool>;
/// Called when a node gains or loses focus.
pub type FocusChangeListener = Rc<dyn Fn(&mut Stage, NodeId, bool)>;
/// Called with touch events. Returns true if the event was consumed.
pub type TouchListener = Rc<dyn Fn(&mut Stage, NodeId, &TouchEvent) -> bool>;

/// The four listener slots of a shadow.
#[derive(Default)]
pub(crate) struct Listeners {
    /// Click listener.
    pub(crate) click: Option<ClickListener>,
    /// Key listener.
    pub(crate) key: Option<KeyListener>,
    /// Focus-change listener.
    pub(crate) focus_change: Option<FocusChangeListener>,
    /// Touch listener.
    pub(crate) touch: Option<TouchListener>,
}

/// Selects the click slot.
pub(crate) fn click(l: &Listeners) -> &Option<ClickListener> {
    &l.click
}

/// Selects the key slot.
pub(crate) fn key(l: &Listeners) -> &Option<KeyListener> {
    &l.key
}

/// Selects the focus-change slot.
pub(crate) fn focus_change(l: &Listeners) -> &Option<FocusChangeListener> {
    &l.focus_change
}

/// Selects the touch slot.
pub(crate) fn touch(l: &Listeners) -> &Option<TouchListener> {
    &l.touch
}

/// Run the listener in one of a node's slots. Returns `Ok(None)` when no
/// listener is registered.
///
/// The call holds its own handle to the listener, so the listener may replace
/// or clear its slot, or remove the node, without cutting the call short.
pub(crate) fn invoke<L: Clone, R>(
    stage: &mut Stage,
    node: NodeId,
    slot: fn(&Listeners) -> &Option<L>,
    call: impl FnOnce(&L, &mut Stage) -> R,
) -> Result<Option<R>> {
    let Some(listener) = slot(&stage.get(node)?.listeners).clone() else {
        return Ok(None);
    };
    Ok(Some(call(&listener, stage)))
}
