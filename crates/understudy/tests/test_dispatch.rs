//! Integration tests for click, touch and key delivery.

#[cfg(test)]
mod tests {
    use understudy::{
        prelude::*,
        testing::{Recorded, Recorder, chain},
    };

    #[test]
    fn checked_click_requires_enabled() -> Result<()> {
        let mut stage = Stage::new();
        let v = stage.create("Button");
        let rec = Recorder::new();
        stage.get_mut(v)?.set_on_click_listener(rec.click_listener());
        stage.get_mut(v)?.set_enabled(false);

        assert!(stage.derived_is_visible(v)?);
        let err = stage.checked_perform_click(v).unwrap_err();
        assert_eq!(err, Error::NotEnabled(v));
        assert!(err.to_string().contains("not enabled and cannot be clicked"));
        assert!(rec.entries().is_empty());
        Ok(())
    }

    #[test]
    fn checked_click_requires_visible_ancestors() -> Result<()> {
        let mut stage = Stage::new();
        let ids = chain(&mut stage, &["FrameLayout", "LinearLayout", "Button"])?;
        let button = ids[2];
        let rec = Recorder::new();
        stage
            .get_mut(button)?
            .set_on_click_listener(rec.click_listener());
        stage.get_mut(ids[0])?.set_visibility(Visibility::Gone);

        let err = stage.checked_perform_click(button).unwrap_err();
        assert_eq!(err, Error::NotVisible(button));
        assert!(err.to_string().contains("not visible and cannot be clicked"));

        stage.get_mut(ids[0])?.set_visibility(Visibility::Visible);
        assert!(stage.checked_perform_click(button)?);
        assert_eq!(rec.entries(), vec![Recorded::Click(button)]);
        Ok(())
    }

    #[test]
    fn visibility_is_checked_before_enabled() -> Result<()> {
        let mut stage = Stage::new();
        let v = stage.create("Button");
        let node = stage.get_mut(v)?;
        node.set_enabled(false);
        node.set_visibility(Visibility::Invisible);
        assert_eq!(stage.checked_perform_click(v), Err(Error::NotVisible(v)));
        Ok(())
    }

    #[test]
    fn listener_mutates_other_nodes() -> Result<()> {
        let mut stage = Stage::new();
        let ids = chain(&mut stage, &["LinearLayout", "Button"])?;
        let (layout, button) = (ids[0], ids[1]);
        stage.get_mut(button)?.set_on_click_listener(move |stage, _| {
            if let Some(node) = stage.node_mut(layout) {
                node.set_visibility(Visibility::Gone);
            }
        });

        assert!(stage.checked_perform_click(button)?);
        assert_eq!(
            stage.checked_perform_click(button),
            Err(Error::NotVisible(button))
        );
        Ok(())
    }

    #[test]
    fn touch_result_comes_from_listener() -> Result<()> {
        let mut stage = Stage::new();
        let consumer = stage.create("View");
        let observer = stage.create("View");
        let rec = Recorder::new();
        stage
            .get_mut(consumer)?
            .set_on_touch_listener(rec.touch_listener(true));
        stage
            .get_mut(observer)?
            .set_on_touch_listener(rec.touch_listener(false));

        let down = TouchEvent::down(3.0, 4.0);
        assert!(stage.dispatch_touch_event(consumer, &down)?);
        assert!(!stage.dispatch_touch_event(observer, &down)?);
        assert_eq!(
            rec.entries(),
            vec![
                Recorded::Touch(consumer, down),
                Recorded::Touch(observer, down)
            ]
        );
        Ok(())
    }

    #[test]
    fn key_listener() -> Result<()> {
        let mut stage = Stage::new();
        let v = stage.create("EditText");
        let rec = Recorder::new();
        stage.get_mut(v)?.set_on_key_listener(rec.key_listener(true));
        assert!(stage.get(v)?.has_on_key_listener());

        let enter = KeyEvent::down(66);
        assert!(stage.dispatch_key_event(v, &enter)?);
        assert_eq!(rec.take(), vec![Recorded::Key(v, enter)]);

        stage.get_mut(v)?.clear_on_key_listener();
        assert!(!stage.dispatch_key_event(v, &enter)?);
        assert!(rec.entries().is_empty());
        Ok(())
    }

    #[test]
    fn replacing_listener_inside_itself() -> Result<()> {
        let mut stage = Stage::new();
        let v = stage.create("Button");
        let rec = Recorder::new();
        let replacement = rec.clone();
        stage.get_mut(v)?.set_on_click_listener(move |stage, id| {
            if let Some(node) = stage.node_mut(id) {
                node.set_on_click_listener(replacement.click_listener());
            }
        });

        assert!(stage.perform_click(v)?);
        assert!(rec.entries().is_empty());
        assert!(stage.perform_click(v)?);
        assert_eq!(rec.entries(), vec![Recorded::Click(v)]);
        Ok(())
    }
}
