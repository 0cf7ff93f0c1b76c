//! Integration tests for the editor controller
//!
//! These drive the controller the way a host view would: screen-space touch
//! streams per element, brush touches in the brush layer's coordinates, and
//! a recording listener to observe what gets reported.

use std::rc::Rc;

use inkmark_editor::{
    Color, EditorConfig, EditorError, ElementContent, ElementId, Notification, NotificationLog,
    PhotoEditor, Point, PointerId, TouchAction, TouchEvent, TouchPointer, ViewKind,
};

fn editor_with_log() -> (PhotoEditor, Rc<NotificationLog>) {
    let mut editor = PhotoEditor::new(EditorConfig::default()).unwrap();
    let log = Rc::new(NotificationLog::new());
    editor.set_listener(log.clone());
    (editor, log)
}

fn touch(editor: &mut PhotoEditor, id: ElementId, action: TouchAction, x: f32, y: f32) -> bool {
    editor.handle_element_touch_screen(id, action, 0, &[(0, Point::new(x, y))])
}

fn touch_many(
    editor: &mut PhotoEditor,
    id: ElementId,
    action: TouchAction,
    action_index: usize,
    points: &[(PointerId, f32, f32)],
) -> bool {
    let points: Vec<_> = points
        .iter()
        .map(|&(pointer, x, y)| (pointer, Point::new(x, y)))
        .collect();
    editor.handle_element_touch_screen(id, action, action_index, &points)
}

fn brush(editor: &mut PhotoEditor, action: TouchAction, x: f32, y: f32) -> bool {
    editor.handle_brush_touch(&TouchEvent::single(action, TouchPointer::at(0, x, y)))
}

/// Dragging follows the finger in screen space
#[test]
fn test_drag_moves_element_with_finger() {
    let (mut editor, log) = editor_with_log();
    let id = editor.add_text("hello", None);

    assert!(touch(&mut editor, id, TouchAction::Down, 500.0, 710.0));
    assert!(editor.is_delete_zone_visible());
    touch(&mut editor, id, TouchAction::Move, 600.0, 810.0);
    touch(&mut editor, id, TouchAction::Move, 700.0, 910.0);
    touch(&mut editor, id, TouchAction::Up, 700.0, 910.0);

    let element = editor.element(id).unwrap();
    let center = element.screen_bounds().center();
    assert!((center.x - 740.0).abs() < 1e-3 && (center.y - 920.0).abs() < 1e-3);
    assert!(!element.is_snapping_back());
    assert!(!editor.is_delete_zone_visible());

    assert_eq!(
        log.take(),
        vec![
            Notification::ElementAdded {
                kind: ViewKind::Text,
                total: 1
            },
            Notification::GestureStarted {
                kind: ViewKind::Text
            },
            Notification::GestureStopped {
                kind: ViewKind::Text
            },
        ]
    );
}

/// Releasing over the delete zone removes the element exactly once
#[test]
fn test_drop_on_delete_zone_removes_element() {
    let (mut editor, log) = editor_with_log();
    let id = editor.add_image("star", 100.0, 100.0);

    touch(&mut editor, id, TouchAction::Down, 540.0, 720.0);
    touch(&mut editor, id, TouchAction::Move, 540.0, 1620.0);
    touch(&mut editor, id, TouchAction::Up, 540.0, 1620.0);

    assert!(editor.element(id).is_none());
    assert_eq!(editor.element_count(), 0);
    assert!(!editor.is_delete_zone_visible());
    assert_eq!(
        log.take(),
        vec![
            Notification::ElementAdded {
                kind: ViewKind::Image,
                total: 1
            },
            Notification::GestureStarted {
                kind: ViewKind::Image
            },
            Notification::ElementRemoved { total: 0 },
            Notification::GestureStopped {
                kind: ViewKind::Image
            },
        ]
    );

    // Further input for the dropped element is ignored
    assert!(!touch(&mut editor, id, TouchAction::Down, 540.0, 720.0));
    assert!(log.is_empty());
}

/// Releasing below the photo animates the vertical offset back to zero
#[test]
fn test_release_outside_canvas_snaps_back() {
    let (mut editor, _log) = editor_with_log();
    let id = editor.add_image("star", 100.0, 100.0);

    touch(&mut editor, id, TouchAction::Down, 540.0, 720.0);
    touch(&mut editor, id, TouchAction::Move, 100.0, 1500.0);
    touch(&mut editor, id, TouchAction::Up, 100.0, 1500.0);

    assert_eq!(editor.element_count(), 1);
    assert!(editor.element(id).unwrap().is_snapping_back());
    editor.take_redraw_request();

    let mut frames = 0;
    while editor.tick(16.0) {
        frames += 1;
        assert!(frames < 100, "snap-back never finished");
    }
    assert!(editor.take_redraw_request());

    let translation = editor.element(id).unwrap().transform().translation;
    assert_eq!(translation.y, 0.0);
    assert!((translation.x + 440.0).abs() < 1e-3);
}

#[test]
fn test_new_touch_cancels_snap_back() {
    let (mut editor, _log) = editor_with_log();
    let id = editor.add_image("star", 100.0, 100.0);

    touch(&mut editor, id, TouchAction::Down, 540.0, 720.0);
    touch(&mut editor, id, TouchAction::Move, 540.0, 1500.0);
    touch(&mut editor, id, TouchAction::Up, 540.0, 1500.0);
    editor.tick(100.0);
    let midway = editor.element(id).unwrap().transform().translation.y;
    assert!(midway > 0.0 && midway < 780.0);

    let grab = editor.element(id).unwrap().screen_bounds().center();
    touch(&mut editor, id, TouchAction::Down, grab.x, grab.y);
    assert!(!editor.element(id).unwrap().is_snapping_back());
    assert!(!editor.tick(16.0));
    assert_eq!(editor.element(id).unwrap().transform().translation.y, midway);
}

/// A tap on text hands the element back for editing
#[test]
fn test_tap_on_text_requests_edit() {
    let (mut editor, log) = editor_with_log();
    let id = editor.add_text("hello", Some(Color::RED));

    touch(&mut editor, id, TouchAction::Down, 540.0, 720.0);
    touch(&mut editor, id, TouchAction::Up, 540.0, 720.0);

    assert_eq!(
        log.take(),
        vec![
            Notification::ElementAdded {
                kind: ViewKind::Text,
                total: 1
            },
            Notification::GestureStarted {
                kind: ViewKind::Text
            },
            Notification::GestureStopped {
                kind: ViewKind::Text
            },
            Notification::TextEditRequested {
                text: "hello".to_string(),
                color: Color::RED
            },
        ]
    );
    // Taken out of the overlay without a removal report
    assert_eq!(editor.element_count(), 0);
}

#[test]
fn test_drag_on_text_is_not_an_edit() {
    let (mut editor, log) = editor_with_log();
    let id = editor.add_text("hello", None);

    touch(&mut editor, id, TouchAction::Down, 540.0, 720.0);
    touch(&mut editor, id, TouchAction::Move, 541.0, 720.0);
    touch(&mut editor, id, TouchAction::Up, 541.0, 720.0);

    assert_eq!(editor.element_count(), 1);
    assert!(!log
        .take()
        .iter()
        .any(|n| matches!(n, Notification::TextEditRequested { .. })));
}

#[test]
fn test_tap_slop_from_config() {
    let config = EditorConfig::from_toml_str("[gesture]\ntap_slop = 3.0").unwrap();
    let mut editor = PhotoEditor::new(config).unwrap();
    let log = Rc::new(NotificationLog::new());
    editor.set_listener(log.clone());
    let id = editor.add_text("hi", None);

    touch(&mut editor, id, TouchAction::Down, 540.0, 720.0);
    touch(&mut editor, id, TouchAction::Up, 541.0, 721.0);
    assert!(log
        .take()
        .iter()
        .any(|n| matches!(n, Notification::TextEditRequested { .. })));
}

/// Two-finger pinch through screen coordinates
#[test]
fn test_pinch_scales_element() {
    let (mut editor, _log) = editor_with_log();
    let id = editor.add_image("photo", 200.0, 200.0);

    touch_many(&mut editor, id, TouchAction::Down, 0, &[(0, 540.0, 720.0)]);
    touch_many(
        &mut editor,
        id,
        TouchAction::PointerDown,
        1,
        &[(0, 540.0, 720.0), (1, 640.0, 720.0)],
    );
    touch_many(
        &mut editor,
        id,
        TouchAction::Move,
        1,
        &[(0, 540.0, 720.0), (1, 740.0, 720.0)],
    );

    let transform = *editor.element(id).unwrap().transform();
    assert!((transform.scale - 2.0).abs() < 1e-4);
    assert!(transform.rotation.abs() < 1e-3);

    // Lift the first finger, keep dragging with the second
    touch_many(
        &mut editor,
        id,
        TouchAction::PointerUp,
        0,
        &[(0, 540.0, 720.0), (1, 740.0, 720.0)],
    );
    let before = editor.element(id).unwrap().screen_bounds();
    touch_many(&mut editor, id, TouchAction::Move, 0, &[(1, 740.0, 720.0)]);
    let after = editor.element(id).unwrap().screen_bounds();
    assert!((before.x - after.x).abs() < 1e-3 && (before.y - after.y).abs() < 1e-3);
}

/// A pinch whose fingers come to rest keeps its transform
#[test]
fn test_pinch_is_stable_across_frames() {
    let (mut editor, _log) = editor_with_log();
    let id = editor.add_image("photo", 200.0, 200.0);

    touch_many(&mut editor, id, TouchAction::Down, 0, &[(0, 540.0, 720.0)]);
    touch_many(
        &mut editor,
        id,
        TouchAction::PointerDown,
        1,
        &[(0, 540.0, 720.0), (1, 640.0, 720.0)],
    );
    for x in [690.0, 740.0, 740.0, 740.0] {
        touch_many(
            &mut editor,
            id,
            TouchAction::Move,
            1,
            &[(0, 540.0, 720.0), (1, x, 720.0)],
        );
    }
    let transform = *editor.element(id).unwrap().transform();
    assert!((transform.scale - 2.0).abs() < 1e-4);
    assert!(transform.rotation.abs() < 1e-3);

    // Quarter twist, then hold
    for _ in 0..2 {
        touch_many(
            &mut editor,
            id,
            TouchAction::Move,
            1,
            &[(0, 540.0, 720.0), (1, 540.0, 920.0)],
        );
        let transform = *editor.element(id).unwrap().transform();
        assert!((transform.rotation - 90.0).abs() < 1e-2);
        assert!((transform.scale - 2.0).abs() < 1e-4);
    }
}

#[test]
fn test_undo_and_remove() {
    let (mut editor, log) = editor_with_log();
    let a = editor.add_text("a", None);
    let b = editor.add_image("b", 10.0, 10.0);
    let c = editor.add_emoji("U+1F600").unwrap();
    log.take();

    assert!(editor.remove_element(b));
    assert!(!editor.remove_element(b));
    assert!(editor.undo());
    assert!(editor.element(c).is_none());
    assert!(editor.undo());
    assert!(editor.element(a).is_none());
    assert!(!editor.undo());

    assert_eq!(
        log.take(),
        vec![
            Notification::ElementRemoved { total: 2 },
            Notification::ElementRemoved { total: 1 },
            Notification::ElementRemoved { total: 0 },
        ]
    );
}

#[test]
fn test_emoji_codes() {
    let (mut editor, log) = editor_with_log();
    let id = editor.add_emoji("U+1F600").unwrap();
    let element = editor.element(id).unwrap();
    assert_eq!(
        element.content(),
        &ElementContent::Emoji {
            glyph: "\u{1F600}".to_string()
        }
    );
    log.take();

    assert!(matches!(
        editor.add_emoji("U+XYZ"),
        Err(EditorError::InvalidEmojiCode(_))
    ));
    assert_eq!(editor.element_count(), 1);
    assert!(log.is_empty());
}

#[test]
fn test_element_lookup_by_index() {
    let (mut editor, _log) = editor_with_log();
    let first = editor.add_text("first", None);
    let second = editor.add_text("second", None);
    assert_eq!(editor.element_id_at(0).unwrap(), first);
    assert_eq!(editor.element_id_at(1).unwrap(), second);
    assert!(matches!(
        editor.element_id_at(2),
        Err(EditorError::UnknownElement)
    ));
}

#[test]
fn test_clear_all_reports_once() {
    let (mut editor, log) = editor_with_log();
    editor.set_brush_drawing_mode(true);
    brush(&mut editor, TouchAction::Down, 10.0, 100.0);
    brush(&mut editor, TouchAction::Move, 300.0, 100.0);
    brush(&mut editor, TouchAction::Up, 300.0, 100.0);
    editor.add_text("a", None);
    editor.add_text("b", None);
    log.take();

    editor.clear_all();
    assert_eq!(editor.element_count(), 0);
    assert!(editor.brush().surface().is_blank());
    assert_eq!(log.take(), vec![Notification::ElementRemoved { total: 0 }]);

    editor.clear_all();
    assert!(log.is_empty());
}

#[test]
fn test_brush_strokes_through_editor() {
    let (mut editor, log) = editor_with_log();
    assert!(!brush(&mut editor, TouchAction::Down, 10.0, 100.0));

    editor.set_brush_drawing_mode(true);
    assert!(brush(&mut editor, TouchAction::Down, 10.0, 100.0));
    brush(&mut editor, TouchAction::Move, 300.0, 100.0);

    let frame = editor.render_frame().unwrap();
    assert_eq!(frame.pixel(150, 100).map(|p| p[3]), Some(255));
    assert!(editor.brush().surface().is_blank());

    brush(&mut editor, TouchAction::Up, 300.0, 100.0);
    assert_eq!(
        editor.brush().surface().pixel(150, 100).map(|p| p[3]),
        Some(255)
    );
    assert!(editor.take_redraw_request());
    assert_eq!(
        log.take(),
        vec![
            Notification::GestureStarted {
                kind: ViewKind::Brush
            },
            Notification::GestureStopped {
                kind: ViewKind::Brush
            },
        ]
    );

    editor.clear_brush();
    assert!(editor.brush().surface().is_blank());
}

#[test]
fn test_brush_settings_round_trip() {
    let (mut editor, _log) = editor_with_log();
    editor.set_brush_size(7.0);
    editor.set_brush_color(Color::RED);
    editor.set_eraser_size(40.0);
    editor.brush_eraser();
    assert_eq!(editor.brush().attributes().snapshot().width, 40.0);

    editor.set_brush_drawing_mode(true);
    assert_eq!(editor.brush_size(), 7.0);
    assert_eq!(editor.brush_color(), Color::RED);
    assert_eq!(editor.eraser_size(), 40.0);
    assert_eq!(editor.brush().attributes().snapshot().width, 7.0);
}

#[test]
fn test_listener_reaches_existing_elements() {
    let mut editor = PhotoEditor::new(EditorConfig::default()).unwrap();
    let id = editor.add_image("star", 50.0, 50.0);

    let log = Rc::new(NotificationLog::new());
    editor.set_listener(log.clone());
    touch(&mut editor, id, TouchAction::Down, 540.0, 720.0);
    assert_eq!(
        log.take(),
        vec![Notification::GestureStarted {
            kind: ViewKind::Image
        }]
    );

    editor.clear_listener();
    touch(&mut editor, id, TouchAction::Up, 540.0, 720.0);
    assert!(log.is_empty());
}

#[test]
fn test_resize_canvas_discards_brush_content() {
    let (mut editor, _log) = editor_with_log();
    editor.set_brush_drawing_mode(true);
    brush(&mut editor, TouchAction::Down, 10.0, 10.0);
    brush(&mut editor, TouchAction::Move, 100.0, 10.0);
    brush(&mut editor, TouchAction::Up, 100.0, 10.0);

    editor.resize_canvas(200.0, 100.0).unwrap();
    assert_eq!(editor.brush().surface().width(), 200);
    assert!(editor.brush().surface().is_blank());
    assert!(editor.resize_canvas(0.0, 100.0).is_err());
}
