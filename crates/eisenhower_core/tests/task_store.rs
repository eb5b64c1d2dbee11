use eisenhower_core::{Point, StoreError, TaskRecord, TaskStore};

#[test]
fn create_then_read_back_preserves_position_and_text() {
    let mut store = TaskStore::new();
    let handle = store.create(Point::new(12.5, 40.0), "Call the bank").unwrap();

    let task = store.get(handle).unwrap();
    assert_eq!(task.position(), Point::new(12.5, 40.0));
    assert_eq!(task.description(), "Call the bank");
    assert_eq!(task.width(), 111.0);
}

#[test]
fn set_position_keeps_only_the_latest_position() {
    let mut store = TaskStore::new();
    let handle = store.create(Point::new(0.0, 0.0), "moving").unwrap();

    for step in 1..=5 {
        let value = f64::from(step) * 10.0;
        store.set_position(handle, Point::new(value, value)).unwrap();
    }

    assert_eq!(store.all(), vec![TaskRecord::new(50.0, 50.0, "moving")]);
}

#[test]
fn width_is_not_recomputed_on_move() {
    let mut store = TaskStore::new();
    let handle = store
        .create(Point::new(0.0, 0.0), "a fairly long description")
        .unwrap();
    let before = store.get(handle).unwrap().width();

    store.set_position(handle, Point::new(300.0, 10.0)).unwrap();
    assert_eq!(store.get(handle).unwrap().width(), before);
}

#[test]
fn all_lists_tasks_in_creation_order() {
    let mut store = TaskStore::new();
    store.create(Point::new(3.0, 3.0), "third").unwrap();
    store.create(Point::new(1.0, 1.0), "first").unwrap();

    let descriptions: Vec<_> = store
        .all()
        .into_iter()
        .map(|record| record.description)
        .collect();
    assert_eq!(descriptions, vec!["third", "first"]);
}

#[test]
fn nearest_resolves_even_far_from_every_task() {
    let mut store = TaskStore::new();
    let near = store.create(Point::new(100.0, 100.0), "near").unwrap();
    let _far = store.create(Point::new(700.0, 500.0), "far").unwrap();

    assert_eq!(store.nearest(Point::new(0.0, 0.0)), Some(near));
    assert_eq!(TaskStore::new().nearest(Point::new(0.0, 0.0)), None);
}

#[test]
fn nearest_uses_box_edges_not_centres() {
    let mut store = TaskStore::new();
    // Wide box centred far away, but its left edge is close to the pointer.
    let wide = store
        .create(Point::new(400.0, 100.0), "x".repeat(60))
        .unwrap();
    let _small = store.create(Point::new(150.0, 100.0), "small").unwrap();

    assert_eq!(store.nearest(Point::new(205.0, 100.0)), Some(wide));
}

#[test]
fn remove_twice_is_not_found() {
    let mut store = TaskStore::new();
    let handle = store.create(Point::new(0.0, 0.0), "once").unwrap();

    store.remove(handle).unwrap();
    assert_eq!(store.remove(handle).unwrap_err(), StoreError::NotFound(handle));
}

#[test]
fn delete_button_hit_is_offset_to_the_right() {
    let mut store = TaskStore::new();
    let handle = store.create(Point::new(100.0, 100.0), "Write report").unwrap();

    assert_eq!(store.delete_button_at(Point::new(192.0, 80.0)), Some(handle));
    assert_eq!(store.delete_button_at(Point::new(100.0, 100.0)), None);
}
