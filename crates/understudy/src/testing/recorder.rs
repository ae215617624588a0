use std::{cell::RefCell, rc::Rc};

use crate::{
    NodeId, Stage,
    event::{KeyEvent, TouchEvent},
};

/// One recorded listener call.
#[derive(Debug, Clone, PartialEq)]
pub enum Recorded {
    /// A click listener ran.
    Click(NodeId),
    /// A focus-change listener ran with the new focus state.
    Focus(NodeId, bool),
    /// A touch listener ran.
    Touch(NodeId, TouchEvent),
    /// A key listener ran.
    Key(NodeId, KeyEvent),
}

/// A shared log that listeners append to. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    /// Recorded calls, oldest first.
    log: Rc<RefCell<Vec<Recorded>>>,
}

impl Recorder {
    /// An empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn push(&self, entry: Recorded) {
        self.log.borrow_mut().push(entry);
    }

    /// A copy of everything recorded so far.
    pub fn entries(&self) -> Vec<Recorded> {
        self.log.borrow().clone()
    }

    /// Drain and return everything recorded so far.
    pub fn take(&self) -> Vec<Recorded> {
        self.log.borrow_mut().drain(..).collect()
    }

    /// A click listener that records its calls.
    pub fn click_listener(&self) -> impl Fn(&mut Stage, NodeId) + 'static {
        let r = self.clone();
        move |_: &mut Stage, id: NodeId| r.push(Recorded::Click(id))
    }

    /// A focus-change listener that records its calls.
    pub fn focus_listener(&self) -> impl Fn(&mut Stage, NodeId, bool) + 'static {
        let r = self.clone();
        move |_: &mut Stage, id: NodeId, focused: bool| r.push(Recorded::Focus(id, focused))
    }

    /// A touch listener that records its calls and returns `consume`.
    pub fn touch_listener(
        &self,
        consume: bool,
    ) -> impl Fn(&mut Stage, NodeId, &TouchEvent) -> bool + 'static {
        let r = self.clone();
        move |_: &mut Stage, id: NodeId, event: &TouchEvent| {
            r.push(Recorded::Touch(id, *event));
            consume
        }
    }

    /// A key listener that records its calls and returns `consume`.
    pub fn key_listener(
        &self,
        consume: bool,
    ) -> impl Fn(&mut Stage, NodeId, &KeyEvent) -> bool + 'static {
        let r = self.clone();
        move |_: &mut Stage, id: NodeId, event: &KeyEvent| {
            r.push(Recorded::Key(id, *event));
            consume
        }
    }
}
