//! Console presentation helpers
//!
//! Framed labels, notes, and operation markers for the demo binaries, plus
//! printers for descriptors and folded renderings. Output is plain lines on
//! stdout; headings get a little terminal styling, nothing machine-readable.

use std::fmt::Debug;

use crossterm::style::Stylize;

use crate::describe::{describe, fold, identity_equals, Describable, Semantics};

/// Build an indent string of `n` spaces
pub fn indent(n: usize) -> String {
    " ".repeat(n)
}

/// Show a heading framed by long dashed lines of width `n`
pub fn show_label(note: &str, n: usize) {
    let line = "-".repeat(n);
    println!("\n{line}");
    println!("  {}", note.bold());
    println!("{line}");
}

/// Show a heading framed at the default width
pub fn show_label_def(note: &str) {
    show_label(note, 50);
}

/// Show a remark framed by short dashed lines
pub fn show_note(note: &str) {
    let line = "-".repeat(25);
    println!("\n{line}");
    println!(" {note}");
    println!("{line}");
}

/// Mark an operation, e.g. `--- let y = x ---`
pub fn show_op(op: &str) {
    println!("{}", format!("--- {op} ---").dim());
}

/// Print a blank line
pub fn nl() {
    println!();
}

/// Show a binding's call name and its type descriptor
pub fn show_type<T: Semantics>(t: &T, name: &str) {
    let d = describe(t);
    println!("call name: {name:?}, type: {:?}", d.display_name);
    println!("size: {} bytes, {}", d.byte_size, d.category);
}

/// Show a binding's call name, type descriptor, and value
pub fn show_type_scalar<T: Semantics + Debug>(t: &T, name: &str) {
    let d = describe(t);
    println!("call name: {name:?}, type: {:?}", d.display_name);
    println!("value: {t:?}, size: {} bytes, {}", d.byte_size, d.category);
}

/// Narrate whether two bindings denote the same instance
pub fn show_identity<T: Semantics>(a: &T, a_name: &str, b: &T, b_name: &str) {
    if identity_equals(a, b) {
        println!("{a_name} is the same instance as {b_name}");
    } else {
        println!("{a_name} is not the same instance as {b_name}");
    }
}

/// Show a sequence folded into rows of `width` elements
pub fn show_fold<I>(items: I, width: usize, left_indent: usize)
where
    I: IntoIterator,
    I::Item: std::fmt::Display,
{
    let rendering = fold(items, width, left_indent);
    if !rendering.is_empty() {
        println!("{rendering}");
    }
}

/// Show anything that can render itself as display rows
pub fn show_rows(name: &str, item: &dyn Describable) {
    println!("{name} {{");
    for row in item.to_rows() {
        println!("{row}");
    }
    println!("}}");
}
