use sortable::{Document, Point, SortEventKind, SortableOptions};
use sortable_adapter::{Controller, Gesture};

fn main() {
    // Example: an adapter subscribes to sort notifications and replays a recorded drag.
    //
    // An adapter would:
    // - mirror its element tree into a `Document`
    // - forward native drag events to `Controller::handle`
    // - persist the new order when a `sortupdate` arrives
    let mut doc = Document::new();
    let list = doc.create_element("ol");
    let items: Vec<_> = (0..5).map(|_| doc.append_element(list, "li", 16)).collect();

    let mut c = Controller::new(doc);
    c.init(list, SortableOptions::default())
        .expect("list is part of the document");
    c.on(list, SortEventKind::Update, |e| {
        if let Some(u) = e.as_update() {
            println!("moved {:?}: {:?} -> {:?}", u.item, u.old_index, u.index);
        }
    });

    let gesture = Gesture::start(items[4], Point::new(0, 70))
        .over(items[1], Point::new(0, 20))
        .drop(list, Point::new(0, 20));
    c.play(&gesture);
    println!("order={:?}", c.document().children(list));
}
