//! Integration tests for attribute application across a composed tree.

#[cfg(test)]
mod tests {
    use understudy::{prelude::*, testing::init_logging};

    /// Build a tree the way an inflater would: construct each node with its
    /// attributes, attach it, then apply its view node attributes.
    fn inflate(
        stage: &mut Stage,
        parent: Option<NodeId>,
        class: &str,
        attrs: &Attributes,
    ) -> Result<NodeId> {
        let id = stage.create_with_attributes(class, attrs)?;
        if let Some(parent) = parent {
            stage.attach(parent, id)?;
        }
        stage.apply_view_node_attributes(id, attrs)?;
        Ok(id)
    }

    #[test]
    fn id_from_attributes() -> Result<()> {
        let mut stage = Stage::new();
        let attrs = Attributes::new().with("android:id", "42");
        let v = stage.create_with_attributes("Button", &attrs)?;
        assert_eq!(stage.get(v)?.id(), 42);

        let w = stage.create("Button");
        stage.get_mut(w)?.set_id(7);
        stage.apply_attributes(w, &attrs)?;
        assert_eq!(stage.get(w)?.id(), 7);
        Ok(())
    }

    #[test]
    fn lifecycle_progression() -> Result<()> {
        let mut stage = Stage::new();
        let root = stage.create_with_attributes("FrameLayout", &Attributes::new())?;
        let child = stage.create_with_attributes("Button", &Attributes::new())?;
        assert_eq!(stage.get(child)?.lifecycle(), Lifecycle::AttributesApplied);
        stage.attach(root, child)?;
        assert_eq!(stage.get(child)?.lifecycle(), Lifecycle::Attached);
        stage.apply_view_node_attributes(child, &Attributes::new())?;
        assert_eq!(
            stage.get(child)?.lifecycle(),
            Lifecycle::NodeAttributesApplied
        );

        // Moving a node does not reopen its phases.
        stage.detach(child)?;
        stage.attach(root, child)?;
        assert_eq!(
            stage.get(child)?.lifecycle(),
            Lifecycle::NodeAttributesApplied
        );
        assert!(
            stage
                .apply_view_node_attributes(child, &Attributes::new())
                .is_err()
        );
        Ok(())
    }

    #[test]
    fn first_focus_request_wins() -> Result<()> {
        init_logging();
        let mut stage = Stage::new();
        let focus = Attributes::new().with("android:focus", "true");
        let root = inflate(&mut stage, None, "LinearLayout", &Attributes::new())?;
        let first = inflate(&mut stage, Some(root), "EditText", &focus)?;
        let second = inflate(&mut stage, Some(root), "EditText", &focus)?;

        // Siblings are not ancestors, so both report focus.
        assert!(stage.get(first)?.is_focused());
        assert!(stage.get(second)?.is_focused());
        assert!(!stage.get(root)?.is_focused());

        let nested = inflate(&mut stage, Some(first), "TextView", &focus)?;
        assert!(!stage.get(nested)?.is_focused());
        Ok(())
    }

    #[test]
    fn disabled_and_hidden_from_markup() -> Result<()> {
        let mut stage = Stage::new();
        let attrs = Attributes::new()
            .with("android:id", "0x10")
            .with("android:visibility", "invisible")
            .with("android:enabled", "false");
        let root = inflate(&mut stage, None, "FrameLayout", &Attributes::new())?;
        let v = inflate(&mut stage, Some(root), "Button", &attrs)?;
        assert_eq!(stage.get(v)?.id(), 16);
        assert_eq!(stage.get(v)?.visibility(), Visibility::Invisible);
        assert!(!stage.get(v)?.is_enabled());
        assert_eq!(stage.checked_perform_click(v), Err(Error::NotVisible(v)));
        Ok(())
    }

    #[test]
    fn override_reaches_across_subtrees() -> Result<()> {
        let mut stage = Stage::new();
        let focus = Attributes::new().with("android:focus", "true");
        let root = inflate(&mut stage, None, "LinearLayout", &focus)?;
        let header = inflate(&mut stage, Some(root), "FrameLayout", &Attributes::new())?;
        assert!(stage.get(root)?.is_focused());

        let takeover = Attributes::new()
            .with("android:focus", "true")
            .with_focus_override();
        let field = inflate(&mut stage, Some(header), "EditText", &takeover)?;
        assert!(!stage.get(root)?.is_focused());
        assert!(stage.get(field)?.is_focused());
        Ok(())
    }
}
