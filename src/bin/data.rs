// Demo: primitive and aggregate value types — sizes, copies, independence.

use typeview::describe::{describe, identity_equals, Category, Semantics};
use typeview::display::{nl, show_label_def, show_note, show_op, show_type_scalar};

/// A small value-semantics aggregate, the kind of plain data record the
/// introspection core is meant to narrate.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Blend {
    i: i32,
    d: f64,
    c: char,
}

impl Semantics for Blend {
    const CATEGORY: Category = Category::Value;
}

fn main() {
    show_label_def("demonstrate value types");

    show_note("primitives");
    show_type_scalar(&42i32, "answer");
    show_type_scalar(&3.14159f64, "pi");
    show_type_scalar(&true, "flag");
    show_type_scalar(&'q', "letter");
    show_type_scalar(&String::from("a string"), "text");
    nl();

    show_note("copies are independent instances");
    show_op("let x = 42; let mut y = x; y += 1");
    let x = 42i32;
    let mut y = x;
    y += 1;
    show_type_scalar(&x, "x");
    show_type_scalar(&y, "y");
    println!(
        "identity_equals(x, y): {} (copies are never aliases)",
        identity_equals(&x, &y)
    );
    nl();

    show_note("aggregates follow the same rules");
    let a = Blend {
        i: 1,
        d: 2.5,
        c: 'z',
    };
    show_type_scalar(&a, "a");

    show_op("let mut b = a; b.i = -1");
    let mut b = a;
    b.i = -1;
    show_type_scalar(&a, "a");
    show_type_scalar(&b, "b");
    println!("a unchanged by mutation of b: {}", a.i == 1);
    nl();

    show_note("owned containers are value types too");
    let v = vec![1, 2, 3];
    let w = v.clone();
    show_type_scalar(&v, "v");
    let d = describe(&w);
    println!(
        "clone of {} is independent of the original: identity_equals = {}",
        d.display_name,
        identity_equals(&v, &w)
    );

    println!("\nThat's all Folks!");
}
