// Example: reorder a single list by replaying the events a browser would send.
use sortable::{Document, DragEvent, Point, Sortable, SortableOptions};

fn main() {
    let mut doc = Document::new();
    let list = doc.create_element("ul");
    let items: Vec<_> = (0..4).map(|_| doc.append_element(list, "li", 24)).collect();

    let mut s = Sortable::new(doc);
    s.init(list, SortableOptions::new().with_force_placeholder_size(true))
        .expect("list is part of the document");

    // Grab the first item and drag it over the third one.
    for mut event in [
        DragEvent::drag_start(items[0], Point::new(10, 12)),
        DragEvent::drag_over(items[2], Point::new(10, 70)),
    ] {
        for n in s.dispatch(&mut event) {
            println!("{} on {:?}", n.name(), n.target);
        }
    }
    println!("while dragging: {:?}", s.document().children(list));

    let placeholder = s.container(list).map(|c| c.placeholder()).unwrap_or(list);
    for n in s.dispatch(&mut DragEvent::drop(placeholder, Point::new(10, 70))) {
        println!("{} {:?}", n.name(), n.detail);
    }
    println!("after drop: {:?}", s.document().children(list));
}
