// Example: two lists sharing a connection tag; the second starts empty.
use sortable::{Command, Document, DragEvent, Point, SortEventKind, Sortable, SortableOptions};

fn main() {
    let mut doc = Document::new();
    let body = doc.create_element("body");
    let todo = doc
        .parse_element(r#"<ul class="todo"><li>a</li><li>b</li><li>c</li></ul>"#)
        .expect("valid markup");
    let done = doc.create_element("ul");
    doc.append_child(body, todo);
    doc.append_child(body, done);
    for item in doc.children(todo).to_vec() {
        doc.set_height(item, Some(20));
    }

    let mut s = Sortable::new(doc);
    let opts = SortableOptions::new()
        .with_connect_with("kanban")
        .with_placeholder_markup(r#"<li class="drop-here"></li>"#);
    s.run(&[todo, done], Command::Init(opts))
        .expect("both lists are in the document");

    let b = s.document().children(todo)[1];
    let mut events = Vec::new();
    for mut event in [
        DragEvent::drag_start(b, Point::new(4, 30)),
        DragEvent::drag_enter(done, Point::new(4, 80)),
        DragEvent::drop(done, Point::new(4, 80)),
        DragEvent::drag_end(b),
    ] {
        events.extend(s.dispatch(&mut event));
    }

    for e in events.iter().filter(|e| e.kind() == SortEventKind::Update) {
        println!("{:?}", e.as_update());
    }
    println!("todo={:?}", s.document().children(todo));
    println!("done={:?}", s.document().children(done));
}
