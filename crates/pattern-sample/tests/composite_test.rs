use pattern_framework::{Bounds, CompositeError, Graphic, Position};
use pattern_sample::canvas::{Mark, RecordingCanvas};
use pattern_sample::image_editor::ImageEditor;
use pattern_sample::model::{Circle, Dot, Shape};

/// Loading, grouping a fresh selection and moving its members the way the demo does.
#[test]
fn test_group_and_move_selection() {
    let mut editor = ImageEditor::new();
    let loaded = editor.load();

    let dot = Dot::new(3, 4);
    let circle = Circle::new(8, 6, 15);
    let (dot_id, circle_id) = (dot.id(), circle.id());

    let mut canvas = RecordingCanvas::new();
    let group_id = editor.group_selected(vec![dot.into(), circle.into()], &mut canvas);

    // Scene is [dot, circle, group(dot, circle)]
    let scene = editor.scene();
    assert_eq!(scene.len(), 3);
    assert_eq!(scene.children()[2].id(), group_id);
    assert!(scene.children()[2].is_group());
    assert_eq!(scene.leaves().len(), 4);

    // Every leaf was drawn, in depth-first order
    assert_eq!(canvas.leaf_ids(), vec![loaded[0], loaded[1], dot_id, circle_id]);

    assert!(editor.move_shape(dot_id, 2, 2));
    assert_eq!(editor.position_of(dot_id), Some(Position::new(5, 6)));
    assert_eq!(editor.position_of(circle_id), Some(Position::new(8, 6)));

    assert!(editor.move_shape(circle_id, 3, 3));
    assert_eq!(editor.position_of(circle_id), Some(Position::new(11, 9)));
    assert_eq!(editor.position_of(dot_id), Some(Position::new(5, 6)));
    assert_eq!(editor.position_of(group_id), None);
}

#[test]
fn test_moving_a_group_moves_nested_members() {
    let mut editor = ImageEditor::new();
    let inner_dot = Dot::new(0, 0);
    let inner_id = inner_dot.id();
    let mut canvas = RecordingCanvas::new();
    let inner_group = editor.group_selected(vec![inner_dot.into()], &mut canvas);
    let outer_group = editor
        .group_by_ids(&[inner_group])
        .expect("inner group is top-level");

    assert!(editor.move_shape(outer_group, 10, -5));
    assert_eq!(editor.position_of(inner_id), Some(Position::new(10, -5)));

    editor.move_all(1, 1);
    assert_eq!(editor.position_of(inner_id), Some(Position::new(11, -4)));
}

#[test]
fn test_group_by_ids_is_all_or_nothing() {
    let mut editor = ImageEditor::new();
    let loaded = editor.load();
    let stray = Dot::new(9, 9);

    let err = editor.group_by_ids(&[loaded[0], stray.id()]).unwrap_err();
    assert_eq!(err, CompositeError::NotAChild(stray.id()));
    assert_eq!(editor.scene().len(), 2);

    let err = editor.group_by_ids(&[loaded[1], loaded[1]]).unwrap_err();
    assert_eq!(err, CompositeError::DuplicateSelection(loaded[1]));
    assert_eq!(editor.scene().len(), 2);

    let group_id = editor.group_by_ids(&loaded).unwrap();
    assert_eq!(editor.scene().len(), 1);
    assert_eq!(editor.scene().children()[0].id(), group_id);
}

#[test]
fn test_group_frame_encloses_members() {
    let mut editor = ImageEditor::new();
    let mut canvas = RecordingCanvas::new();
    let group_id = editor.group_selected(
        vec![Shape::from(Dot::new(-2, 7)), Shape::from(Circle::new(4, 1, 3))],
        &mut canvas,
    );

    let expected = Bounds {
        min: Position::new(-2, 1),
        max: Position::new(4, 7),
    };
    assert_eq!(canvas.frames()[0], (group_id, expected));
    assert_eq!(
        canvas.marks().last(),
        Some(&Mark::Frame {
            group: editor.scene().id(),
            bounds: expected,
        })
    );
}

#[test]
fn test_removed_shape_is_no_longer_drawn() {
    let mut editor = ImageEditor::new();
    let loaded = editor.load();

    let removed = editor.remove(loaded[0]).expect("loaded dot is top-level");
    assert_eq!(removed.id(), loaded[0]);
    assert!(editor.remove(loaded[0]).is_none());

    let mut canvas = RecordingCanvas::new();
    editor.draw(&mut canvas);
    assert_eq!(canvas.leaf_ids(), vec![loaded[1]]);
}

#[test]
fn test_move_past_coordinate_limit_wraps() {
    let mut editor = ImageEditor::new();
    let edge = editor.add(Dot::new(i32::MAX, 0));
    let mut canvas = RecordingCanvas::new();
    editor.group_selected(vec![Shape::from(Circle::new(0, i32::MIN, 1))], &mut canvas);

    editor.move_all(1, -1);

    assert_eq!(editor.position_of(edge), Some(Position::new(i32::MIN, -1)));
    let circle = editor.scene().leaves()[1].id();
    assert_eq!(editor.position_of(circle), Some(Position::new(1, i32::MAX)));
}
