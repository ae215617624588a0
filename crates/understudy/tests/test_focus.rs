//! Integration tests for focus behavior.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use understudy::{
        prelude::*,
        testing::{Recorded, Recorder, chain, init_logging},
    };

    #[test]
    fn listener_runs_once_per_transition() -> Result<()> {
        init_logging();
        let mut stage = Stage::new();
        let v = stage.create("EditText");
        let rec = Recorder::new();
        stage
            .get_mut(v)?
            .set_on_focus_change_listener(rec.focus_listener());

        stage.request_focus(v)?;
        assert!(stage.get(v)?.is_focused());
        assert_eq!(rec.take(), vec![Recorded::Focus(v, true)]);

        stage.clear_focus(v)?;
        assert!(!stage.get(v)?.has_focus());
        assert_eq!(rec.take(), vec![Recorded::Focus(v, false)]);
        Ok(())
    }

    #[test]
    fn silent_focus_flag() -> Result<()> {
        let mut stage = Stage::new();
        let v = stage.create("EditText");
        let rec = Recorder::new();
        stage
            .get_mut(v)?
            .set_on_focus_change_listener(rec.focus_listener());
        stage.get_mut(v)?.set_focused(true);
        assert!(stage.get(v)?.is_focused());
        assert!(rec.entries().is_empty());
        Ok(())
    }

    #[test]
    fn listener_releases_focus_it_was_given() -> Result<()> {
        let mut stage = Stage::new();
        let ids = chain(&mut stage, &["LinearLayout", "EditText"])?;
        let v = ids[1];
        let rec = Recorder::new();
        let log = rec.clone();
        stage
            .get_mut(v)?
            .set_on_focus_change_listener(move |stage, id, focused| {
                log.push(Recorded::Focus(id, focused));
                if focused {
                    stage.clear_focus(id).ok();
                }
            });

        stage.request_focus(v)?;
        assert_eq!(
            rec.take(),
            vec![Recorded::Focus(v, true), Recorded::Focus(v, false)]
        );
        assert!(!stage.any_parent_has_focus(v)?);
        Ok(())
    }

    #[test]
    fn focusability_does_not_move_focus() -> Result<()> {
        let mut stage = Stage::new();
        let v = stage.create("EditText");
        stage.request_focus(v)?;
        stage.get_mut(v)?.set_focusable(false);
        assert!(stage.get(v)?.is_focused());
        Ok(())
    }

    #[test]
    fn override_scenario() -> Result<()> {
        init_logging();
        let mut stage = Stage::new();
        let ids = chain(&mut stage, &["FrameLayout", "LinearLayout", "EditText"])?;
        let (root, d) = (ids[0], ids[2]);
        let rec = Recorder::new();
        stage
            .get_mut(root)?
            .set_on_focus_change_listener(rec.focus_listener());
        stage
            .get_mut(d)?
            .set_on_focus_change_listener(rec.focus_listener());
        stage.request_focus(root)?;
        rec.take();

        let attrs = Attributes::new()
            .with("android:focus", "true")
            .with_focus_override();
        stage.apply_view_node_attributes(d, &attrs)?;

        assert!(!stage.get(root)?.is_focused());
        assert!(stage.get(d)?.is_focused());
        assert_eq!(
            rec.entries(),
            vec![Recorded::Focus(root, false), Recorded::Focus(d, true)]
        );
        Ok(())
    }

    #[test]
    fn single_focus_policy_notifies_previous_owner() -> Result<()> {
        let mut stage =
            Stage::with_config(StageConfig::default().focus_policy(FocusPolicy::Single));
        let root = stage.create("LinearLayout");
        let a = stage.create("EditText");
        let b = stage.create("EditText");
        stage.attach_all(root, [a, b])?;
        let rec = Recorder::new();
        stage
            .get_mut(a)?
            .set_on_focus_change_listener(rec.focus_listener());
        stage
            .get_mut(b)?
            .set_on_focus_change_listener(rec.focus_listener());

        stage.request_focus(a)?;
        stage.request_focus(b)?;
        assert_eq!(
            rec.entries(),
            vec![
                Recorded::Focus(a, true),
                Recorded::Focus(a, false),
                Recorded::Focus(b, true),
            ]
        );
        assert_eq!(stage.focused_in_tree(root)?, vec![b]);
        Ok(())
    }

    proptest! {
        #[test]
        fn focusable_invariants(ops in prop::collection::vec((any::<bool>(), any::<bool>()), 0..20)) {
            let mut stage = Stage::new();
            let v = stage.create("View");
            let node = stage.get_mut(v).unwrap();
            for (touch, value) in ops {
                if touch {
                    node.set_focusable_in_touch_mode(value);
                    if value {
                        prop_assert!(node.is_focusable());
                    }
                } else {
                    node.set_focusable(value);
                    if !value {
                        prop_assert!(!node.is_focusable_in_touch_mode());
                    }
                }
                prop_assert!(!node.is_focusable_in_touch_mode() || node.is_focusable());
            }
        }
    }
}
