use slotmap::new_key_type;

new_key_type! {
    /// Opaque handle for a widget and its shadow on a [`Stage`](crate::Stage).
    ///
    /// Handles are stable for the lifetime of the node and become invalid
    /// once it is removed.
    pub struct NodeId;
}
