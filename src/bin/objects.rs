// Demo: reference semantics — aliasing, identity, shared mutation, and a
// dump of the registered-type-metadata table.

use std::cell::RefCell;
use std::rc::Rc;

use typeview::demo::points::Point4D;
use typeview::describe::{describe, identity_equals, TypeRegistry};
use typeview::display::{nl, show_identity, show_label_def, show_note, show_op, show_rows};

fn main() {
    show_label_def("demonstrate reference types");

    show_note("an Rc handle aliases, it does not copy");
    show_op("let first = Rc::new(RefCell::new(Point4D::new(1, 2, 3)))");
    let first = Rc::new(RefCell::new(Point4D::new(1, 2, 3)));
    let d = describe(&first);
    println!("type: {:?}", d.display_name);
    println!("handle size: {} bytes, {}", d.byte_size, d.category);
    println!(
        "pointee size: {} bytes (not reported by describe)",
        std::mem::size_of::<RefCell<Point4D>>()
    );
    nl();

    show_op("let second = Rc::clone(&first)");
    let second = Rc::clone(&first);
    show_identity(&first, "first", &second, "second");
    println!("strong count: {}", Rc::strong_count(&first));
    nl();

    show_note("mutation through one alias is visible through the other");
    show_op("second.borrow_mut().set_x(42)");
    second.borrow_mut().set_x(42);
    println!("first.borrow().x(): {}", first.borrow().x());
    show_rows("first", &*first.borrow());
    nl();

    show_note("cloning the pointee breaks the alias");
    show_op("let third = Rc::new(RefCell::new(first.borrow().clone()))");
    let third = Rc::new(RefCell::new(first.borrow().clone()));
    show_identity(&first, "first", &third, "third");
    show_op("third.borrow_mut().set_y(-2)");
    third.borrow_mut().set_y(-2);
    println!("first.borrow().y(): {} (unchanged)", first.borrow().y());
    println!(
        "contents may even match while identity_equals stays {}",
        identity_equals(&first, &third)
    );
    nl();

    show_note("registered-type-metadata table");
    let mut registry = TypeRegistry::new();
    registry.register::<i32>();
    registry.register::<f64>();
    registry.register::<String>();
    registry.register::<Vec<i32>>();
    registry.register::<Point4D>();
    registry.register::<Rc<RefCell<Point4D>>>();

    for descriptor in registry.sorted() {
        println!("  {descriptor}");
    }

    println!("\nThat's all Folks!");
}
