use std::{any::Any, collections::HashMap, fmt, rc::Rc, str::FromStr};

use understudy_geom::{Bounds, Insets, LayoutParams};

use crate::{
    error::{Error, Result},
    event::{KeyEvent, TouchEvent},
    id::NodeId,
    listener::Listeners,
    stage::Stage,
};

/// An arbitrary value stored against a view.
pub type Tag = Rc<dyn Any>;

/// A view's own visibility flag. Whether the view is actually shown also
/// depends on its ancestors, see
/// [`Hierarchy::derived_is_visible`](crate::Hierarchy::derived_is_visible).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Shown, and takes up space.
    #[default]
    Visible,
    /// Hidden, but still takes up space.
    Invisible,
    /// Hidden, and takes up no space.
    Gone,
}

impl Visibility {
    /// The platform's integer constant for this value.
    pub fn as_raw(self) -> i32 {
        match self {
            Self::Visible => 0,
            Self::Invisible => 4,
            Self::Gone => 8,
        }
    }

    /// Map a platform integer constant back to a value.
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::Visible),
            4 => Some(Self::Invisible),
            8 => Some(Self::Gone),
            _ => None,
        }
    }
}

impl FromStr for Visibility {
    type Err = Error;

    /// Parse the markup literal used by the `visibility` attribute.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "visible" => Ok(Self::Visible),
            "invisible" => Ok(Self::Invisible),
            "gone" => Ok(Self::Gone),
            _ => Err(Error::Parse(format!("unknown visibility: {s}"))),
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Visible => "visible",
            Self::Invisible => "invisible",
            Self::Gone => "gone",
        };
        f.write_str(s)
    }
}

/// Where a node is in the attribute pipeline.
///
/// States only move forward: `Constructed` → `AttributesApplied` →
/// `Attached` → `NodeAttributesApplied`. A node built without attributes
/// skips the second state, and a root that is never attached skips the third.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Lifecycle {
    /// Freshly created.
    #[default]
    Constructed,
    /// Construction-time attributes (id, visibility) have been applied.
    AttributesApplied,
    /// The node has been given a parent.
    Attached,
    /// Composition-time attributes (enabled, focus) have been applied.
    NodeAttributesApplied,
}

impl fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Constructed => "constructed",
            Self::AttributesApplied => "attributes-applied",
            Self::Attached => "attached",
            Self::NodeAttributesApplied => "node-attributes-applied",
        };
        f.write_str(s)
    }
}

/// Simulated state of one widget.
///
/// Everything here is local to the node. Operations that walk the tree or run
/// listeners live on [`Stage`] and its traits.
pub struct Shadow {
    /// Simple class name of the simulated widget.
    pub(crate) class_name: String,
    /// View id. Zero means unset.
    pub(crate) id: i32,

    /// Parent in the arena tree.
    pub(crate) parent: Option<NodeId>,
    /// Children in the arena tree.
    pub(crate) children: Vec<NodeId>,

    /// Edges relative to the parent.
    bounds: Bounds,
    /// Padding.
    padding: Insets,
    /// Layout params, shared by identity.
    layout_params: Rc<LayoutParams>,
    /// Background drawable resource, or -1.
    background_resource_id: i32,

    /// Local visibility.
    visibility: Visibility,
    /// Enabled flag.
    enabled: bool,
    /// Selected flag.
    selected: bool,
    /// Clickable flag.
    clickable: bool,
    /// Focusable flag.
    focusable: bool,
    /// Focusable in touch mode. Implies `focusable`.
    focusable_in_touch_mode: bool,
    /// Focus flag.
    pub(crate) focused: bool,

    /// Default tag.
    tag: Option<Tag>,
    /// Keyed tags.
    tags: HashMap<i32, Tag>,
    /// Set by `invalidate`, cleared only explicitly.
    invalidated: bool,

    /// Listener slots.
    pub(crate) listeners: Listeners,
    /// Attribute pipeline state.
    pub(crate) lifecycle: Lifecycle,
}

impl Shadow {
    /// Construct a detached shadow with default state.
    pub(crate) fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            id: 0,
            parent: None,
            children: Vec::new(),
            bounds: Bounds::zero(),
            padding: Insets::default(),
            layout_params: Rc::new(LayoutParams::new(0, 0)),
            background_resource_id: -1,
            visibility: Visibility::Visible,
            enabled: true,
            selected: false,
            clickable: false,
            focusable: false,
            focusable_in_touch_mode: false,
            focused: false,
            tag: None,
            tags: HashMap::new(),
            invalidated: false,
            listeners: Listeners::default(),
            lifecycle: Lifecycle::Constructed,
        }
    }

    /// Simple class name of the simulated widget.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// View id.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Set the view id. Ids are not checked for uniqueness.
    pub fn set_id(&mut self, id: i32) {
        self.id = id;
    }

    /// Parent handle, if attached.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child handles, in attach order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Attribute pipeline state.
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Overwrite all four edges. No validation is done and nothing is
    /// re-measured.
    pub fn layout(&mut self, left: i32, top: i32, right: i32, bottom: i32) {
        self.bounds = Bounds::new(left, top, right, bottom);
    }

    /// Current edges.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Left edge.
    pub fn left(&self) -> i32 {
        self.bounds.left
    }

    /// Top edge.
    pub fn top(&self) -> i32 {
        self.bounds.top
    }

    /// Right edge.
    pub fn right(&self) -> i32 {
        self.bounds.right
    }

    /// Bottom edge.
    pub fn bottom(&self) -> i32 {
        self.bounds.bottom
    }

    /// Set the left edge only.
    pub fn set_left(&mut self, left: i32) {
        self.bounds.left = left;
    }

    /// Set the top edge only.
    pub fn set_top(&mut self, top: i32) {
        self.bounds.top = top;
    }

    /// Set the right edge only.
    pub fn set_right(&mut self, right: i32) {
        self.bounds.right = right;
    }

    /// Set the bottom edge only.
    pub fn set_bottom(&mut self, bottom: i32) {
        self.bounds.bottom = bottom;
    }

    /// `right - left`.
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// `bottom - top`.
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// There is no separate measure pass, so this is the laid-out width.
    pub fn measured_width(&self) -> i32 {
        self.width()
    }

    /// There is no separate measure pass, so this is the laid-out height.
    pub fn measured_height(&self) -> i32 {
        self.height()
    }

    /// Set padding on all four sides.
    pub fn set_padding(&mut self, left: i32, top: i32, right: i32, bottom: i32) {
        self.padding = Insets::new(left, top, right, bottom);
    }

    /// Current padding.
    pub fn padding(&self) -> Insets {
        self.padding
    }

    /// Left padding.
    pub fn padding_left(&self) -> i32 {
        self.padding.left
    }

    /// Top padding.
    pub fn padding_top(&self) -> i32 {
        self.padding.top
    }

    /// Right padding.
    pub fn padding_right(&self) -> i32 {
        self.padding.right
    }

    /// Bottom padding.
    pub fn padding_bottom(&self) -> i32 {
        self.padding.bottom
    }

    /// Set left padding only.
    pub fn set_padding_left(&mut self, left: i32) {
        self.padding.left = left;
    }

    /// Set top padding only.
    pub fn set_padding_top(&mut self, top: i32) {
        self.padding.top = top;
    }

    /// Set right padding only.
    pub fn set_padding_right(&mut self, right: i32) {
        self.padding.right = right;
    }

    /// Set bottom padding only.
    pub fn set_padding_bottom(&mut self, bottom: i32) {
        self.padding.bottom = bottom;
    }

    /// Store layout params. The same allocation is handed back by
    /// [`Shadow::layout_params`].
    pub fn set_layout_params(&mut self, params: Rc<LayoutParams>) {
        self.layout_params = params;
    }

    /// The stored layout params.
    pub fn layout_params(&self) -> Rc<LayoutParams> {
        Rc::clone(&self.layout_params)
    }

    /// Set the background drawable resource.
    pub fn set_background_resource(&mut self, resource_id: i32) {
        self.background_resource_id = resource_id;
    }

    /// Background drawable resource, or -1 if none was set.
    pub fn background_resource_id(&self) -> i32 {
        self.background_resource_id
    }

    /// Mark the view as needing a redraw.
    pub fn invalidate(&mut self) {
        self.invalidated = true;
    }

    /// Has `invalidate` been called since the last clear?
    pub fn was_invalidated(&self) -> bool {
        self.invalidated
    }

    /// Reset the invalidation flag.
    pub fn clear_was_invalidated(&mut self) {
        self.invalidated = false;
    }

    /// Local visibility.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Set local visibility. Ancestors and descendants are untouched.
    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    /// Enabled flag.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set the enabled flag.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Selected flag.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Set the selected flag.
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Clickable flag.
    pub fn is_clickable(&self) -> bool {
        self.clickable
    }

    /// Set the clickable flag.
    pub fn set_clickable(&mut self, clickable: bool) {
        self.clickable = clickable;
    }

    /// Focusable flag.
    pub fn is_focusable(&self) -> bool {
        self.focusable
    }

    /// Set the focusable flag. Clearing it also clears focusability in touch
    /// mode. The focus flag itself is left alone.
    pub fn set_focusable(&mut self, focusable: bool) {
        self.focusable = focusable;
        if !focusable {
            self.set_focusable_in_touch_mode(false);
        }
    }

    /// Focusable in touch mode.
    pub fn is_focusable_in_touch_mode(&self) -> bool {
        self.focusable_in_touch_mode
    }

    /// Set focusability in touch mode. Setting it also makes the view
    /// focusable.
    pub fn set_focusable_in_touch_mode(&mut self, focusable_in_touch_mode: bool) {
        self.focusable_in_touch_mode = focusable_in_touch_mode;
        if focusable_in_touch_mode {
            self.set_focusable(true);
        }
    }

    /// Focus flag.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Same as [`Shadow::is_focused`].
    pub fn has_focus(&self) -> bool {
        self.focused
    }

    /// Set the focus flag without notifying the focus-change listener.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// The default tag.
    pub fn tag(&self) -> Option<Tag> {
        self.tag.clone()
    }

    /// Set the default tag.
    pub fn set_tag(&mut self, tag: impl Any) {
        self.tag = Some(Rc::new(tag));
    }

    /// Set the default tag from an existing shared value.
    pub fn set_tag_rc(&mut self, tag: Option<Tag>) {
        self.tag = tag;
    }

    /// The default tag, if it holds a `T`.
    pub fn tag_as<T: Any>(&self) -> Option<Rc<T>> {
        self.tag.clone().and_then(|t| t.downcast::<T>().ok())
    }

    /// The tag stored under `key`, or `None` if the key was never written.
    pub fn keyed_tag(&self, key: i32) -> Option<Tag> {
        self.tags.get(&key).cloned()
    }

    /// Store a tag under `key`, replacing any previous value.
    pub fn set_keyed_tag(&mut self, key: i32, value: impl Any) {
        self.tags.insert(key, Rc::new(value));
    }

    /// The tag stored under `key`, if it holds a `T`.
    pub fn keyed_tag_as<T: Any>(&self, key: i32) -> Option<Rc<T>> {
        self.keyed_tag(key).and_then(|t| t.downcast::<T>().ok())
    }

    /// Register the click listener, replacing any previous one.
    pub fn set_on_click_listener(&mut self, listener: impl Fn(&mut Stage, NodeId) + 'static) {
        self.listeners.click = Some(Rc::new(listener));
    }

    /// Register the key listener, replacing any previous one.
    pub fn set_on_key_listener(
        &mut self,
        listener: impl Fn(&mut Stage, NodeId, &KeyEvent) -> bool + 'static,
    ) {
        self.listeners.key = Some(Rc::new(listener));
    }

    /// Register the focus-change listener, replacing any previous one.
    pub fn set_on_focus_change_listener(
        &mut self,
        listener: impl Fn(&mut Stage, NodeId, bool) + 'static,
    ) {
        self.listeners.focus_change = Some(Rc::new(listener));
    }

    /// Register the touch listener, replacing any previous one.
    pub fn set_on_touch_listener(
        &mut self,
        listener: impl Fn(&mut Stage, NodeId, &TouchEvent) -> bool + 'static,
    ) {
        self.listeners.touch = Some(Rc::new(listener));
    }

    /// Remove the click listener.
    pub fn clear_on_click_listener(&mut self) {
        self.listeners.click = None;
    }

    /// Remove the key listener.
    pub fn clear_on_key_listener(&mut self) {
        self.listeners.key = None;
    }

    /// Remove the focus-change listener.
    pub fn clear_on_focus_change_listener(&mut self) {
        self.listeners.focus_change = None;
    }

    /// Remove the touch listener.
    pub fn clear_on_touch_listener(&mut self) {
        self.listeners.touch = None;
    }

    /// Is a click listener registered?
    pub fn has_on_click_listener(&self) -> bool {
        self.listeners.click.is_some()
    }

    /// Is a key listener registered?
    pub fn has_on_key_listener(&self) -> bool {
        self.listeners.key.is_some()
    }

    /// Is a focus-change listener registered?
    pub fn has_on_focus_change_listener(&self) -> bool {
        self.listeners.focus_change.is_some()
    }

    /// Is a touch listener registered?
    pub fn has_on_touch_listener(&self) -> bool {
        self.listeners.touch.is_some()
    }
}

impl fmt::Debug for Shadow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shadow")
            .field("class_name", &self.class_name)
            .field("id", &self.id)
            .field("parent", &self.parent)
            .field("bounds", &self.bounds)
            .field("visibility", &self.visibility)
            .field("enabled", &self.enabled)
            .field("focusable", &self.focusable)
            .field("focusable_in_touch_mode", &self.focusable_in_touch_mode)
            .field("focused", &self.focused)
            .field("lifecycle", &self.lifecycle)
            .finish_non_exhaustive()
    }
}
