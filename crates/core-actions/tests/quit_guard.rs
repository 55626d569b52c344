mod common;

use common::{ctrl, message, model, press, type_str};
use core_events::KeyCode;

#[test]
fn clean_document_quits_on_first_press() {
    let mut m = model(&["abc"]);
    assert!(ctrl(&mut m, 'q').quit);
}

#[test]
fn dirty_document_needs_extra_presses() {
    let mut m = model(&["abc"]);
    type_str(&mut m, "x");
    for remaining in (1..=3).rev() {
        let r = ctrl(&mut m, 'q');
        assert!(!r.quit);
        assert_eq!(
            message(&m).as_deref(),
            Some(
                format!(
                    "WARNING!!! File has unsaved changes. Press Ctrl-Q {remaining} more times to quit."
                )
                .as_str()
            )
        );
    }
    assert!(ctrl(&mut m, 'q').quit);
}

#[test]
fn any_other_key_restarts_countdown() {
    let mut m = model(&["abc"]);
    type_str(&mut m, "x");
    ctrl(&mut m, 'q');
    ctrl(&mut m, 'q');
    press(&mut m, KeyCode::Left);
    ctrl(&mut m, 'q');
    assert!(message(&m).unwrap().contains("Press Ctrl-Q 3 more times"));

    // unbound keys count as "other" too
    ctrl(&mut m, 'x');
    assert_eq!(m.state().quit_guard.remaining(), 3);
}
