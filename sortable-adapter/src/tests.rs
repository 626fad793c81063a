use crate::*;

use std::sync::{Arc, Mutex};
use std::vec::Vec;

use sortable::{
    Command, Document, DragEvent, DragEventKind, NodeId, Point, SortEvent, SortEventKind,
    SortableOptions,
};

fn two_lists() -> (Controller, NodeId, [NodeId; 2], Vec<NodeId>) {
    let mut doc = Document::new();
    let body = doc.create_element("body");
    let l1 = doc.create_element("ul");
    let l2 = doc.create_element("ul");
    doc.append_child(body, l1);
    doc.append_child(body, l2);
    let items = (0..3).map(|_| doc.append_element(l1, "li", 10)).collect();

    let mut c = Controller::new(doc);
    c.run(
        &[l1, l2],
        Command::Init(SortableOptions::new().with_connect_with("board")),
    )
    .unwrap();
    (c, body, [l1, l2], items)
}

type Seen = Arc<Mutex<Vec<SortEvent>>>;

fn record(c: &mut Controller, element: NodeId, kind: SortEventKind) -> Seen {
    let seen = Seen::default();
    let sink = Arc::clone(&seen);
    c.on(element, kind, move |e| sink.lock().unwrap().push(*e));
    seen
}

#[test]
fn listeners_hear_events_bubbling_from_descendants() {
    let (mut c, body, [l1, l2], items) = two_lists();
    let updates = record(&mut c, body, SortEventKind::Update);
    let l1_starts = record(&mut c, l1, SortEventKind::Start);
    let l2_starts = record(&mut c, l2, SortEventKind::Start);

    let gesture = Gesture::start(items[0], Point::new(0, 5))
        .over(items[2], Point::new(0, 25))
        .drop(l1, Point::new(0, 25));
    let out = c.play(&gesture);

    let kinds: Vec<_> = out.iter().map(SortEvent::kind).collect();
    assert_eq!(
        kinds,
        [SortEventKind::Start, SortEventKind::Stop, SortEventKind::Update]
    );
    assert_eq!(l1_starts.lock().unwrap().len(), 1);
    assert!(l2_starts.lock().unwrap().is_empty());

    let updates = updates.lock().unwrap();
    assert_eq!(updates.len(), 1);
    let update = updates[0].as_update().unwrap();
    assert_eq!(update.index, Some(2));
    assert_eq!(update.old_index, Some(0));
    assert_eq!(c.document().children(l1), &[items[1], items[2], items[0]]);
}

#[test]
fn off_removes_listener() {
    let (mut c, _, [l1, _], items) = two_lists();
    let stops = record(&mut c, l1, SortEventKind::Stop);
    let id = c.on(l1, SortEventKind::Stop, |_| panic!("removed listener was called"));
    assert_eq!(c.listener_count(), 2);
    assert!(c.off(id));
    assert!(!c.off(id));

    c.play(&Gesture::start(items[1], Point::new(0, 15)));
    assert_eq!(stops.lock().unwrap().len(), 1);
}

#[test]
fn gesture_moves_item_between_connected_lists() {
    let (mut c, _, [l1, l2], items) = two_lists();
    let gesture = Gesture::start(items[1], Point::new(0, 15))
        .hover(l2, Point::new(0, 40))
        .drop(l2, Point::new(0, 40));
    let out = c.play(&gesture);

    let update = out
        .iter()
        .find_map(SortEvent::as_update)
        .copied()
        .unwrap();
    assert_eq!(update.start_parent, Some(l1));
    assert_eq!(update.end_parent, Some(l2));
    assert_eq!(update.index, Some(0));
    assert_eq!(update.old_index, Some(1));
    assert_eq!(c.document().children(l2), &[items[1]]);
    assert!(!c.sortable().is_dragging());
}

#[test]
fn gesture_without_drop_ends_with_dragend() {
    let (_, _, _, items) = two_lists();
    let gesture = Gesture::start(items[0], Point::new(0, 5)).over(items[1], Point::new(0, 15));
    let kinds: Vec<_> = gesture.events().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        [
            DragEventKind::DragStart,
            DragEventKind::DragOver,
            DragEventKind::DragEnd
        ]
    );
    assert_eq!(gesture.steps().len(), 2);
    assert_eq!(gesture.item(), items[0]);
}

#[test]
fn handle_reports_event_flags() {
    let (mut c, _, [_, l2], items) = two_lists();
    c.handle(&mut DragEvent::drag_start(items[0], Point::new(0, 5)));
    let mut over = DragEvent::drag_over(l2, Point::new(0, 40));
    assert!(c.handle(&mut over).is_empty());
    assert!(over.default_prevented);
    assert!(over.propagation_stopped);
}

#[test]
fn controller_moves_to_another_thread() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Controller>();

    let (mut c, body, [l1, _], items) = two_lists();
    let updates = record(&mut c, body, SortEventKind::Update);
    let gesture = Gesture::start(items[0], Point::new(0, 5))
        .over(items[2], Point::new(0, 25))
        .drop(l1, Point::new(0, 25));

    let c = std::thread::spawn(move || {
        c.play(&gesture);
        c
    })
    .join()
    .unwrap();
    assert_eq!(updates.lock().unwrap().len(), 1);
    assert_eq!(c.document().children(l1), &[items[1], items[2], items[0]]);
}
