// Demo: iteration protocols — the same walk expressed with while/index,
// explicit iterators, and for loops, over arrays, slices, Vec, VecDeque,
// and PointN.

use std::collections::VecDeque;
use std::fmt::Debug;

use typeview::demo::points::PointN;
use typeview::display::{nl, show_fold, show_label_def, show_note, show_op, show_type};

/// Index-based walk. Safe and correct, but not idiomatic; works for any
/// contiguous collection that derefs to a slice.
fn index_walk<T: Debug>(s: &[T]) {
    let mut i = 0;
    while i < s.len() {
        print!("{:?} ", s[i]);
        i += 1;
    }
    println!();
}

/// Walk a sub-range of a slice, clamping the bounds to the slice
fn sub_range_walk<T: Debug>(s: &[T], lower: usize, upper: usize) {
    let upper = upper.min(s.len());
    for item in &s[lower.min(upper)..upper] {
        print!("{item:?} ");
    }
    println!();
}

/// Drive the iterator by hand with `loop`/`match`
fn loop_walk<T: Debug>(s: &[T]) {
    let mut iter = s.iter();
    loop {
        match iter.next() {
            Some(item) => print!("{item:?} "),
            None => break,
        }
    }
    println!();
}

/// Idiomatic walk over anything whose shared reference is iterable
fn for_walk<'a, C, I>(collection: &'a C)
where
    &'a C: IntoIterator<Item = &'a I>,
    I: Debug + 'a,
{
    for item in collection {
        print!("{item:?} ");
    }
    println!();
}

/// Consume any iterator the caller has already configured
fn iterator_walk<T>(iter: T)
where
    T: Iterator,
    T::Item: Debug,
{
    for item in iter {
        print!("{item:?} ");
    }
    println!();
}

fn main() {
    show_label_def("demonstrate iteration protocols");

    let array = [1, 2, 3, 4, 5];
    let vector = vec![1.5, 2.5, 3.5];
    let deque: VecDeque<char> = ['a', 'b', 'c', 'd'].into();
    let point: PointN<i32> = PointN::from((10..=16).collect::<Vec<i32>>());

    show_note("index-based walks over slices");
    show_op("index_walk(&array)");
    index_walk(&array);
    show_op("index_walk(&vector)");
    index_walk(&vector);
    show_op("sub_range_walk(&array, 1, 4)");
    sub_range_walk(&array, 1, 4);
    show_op("sub_range_walk(&array, 3, 99) clamps");
    sub_range_walk(&array, 3, 99);
    nl();

    show_note("explicit iterator protocol");
    show_op("loop_walk(&array)");
    loop_walk(&array);
    show_op("loop_walk(point.coords())");
    loop_walk(point.coords());
    nl();

    show_note("for loops over shared references");
    show_op("for_walk(&vector)");
    for_walk(&vector);
    show_op("for_walk(&deque)");
    for_walk(&deque);
    show_op("for_walk(&point)");
    for_walk(&point);
    nl();

    show_note("adapted iterators");
    show_op("iterator_walk(array.iter().rev())");
    iterator_walk(array.iter().rev());
    show_op("iterator_walk(vector.iter().skip(1))");
    iterator_walk(vector.iter().skip(1));
    show_op("iterator_walk(point.iter().map(|c| c * 2))");
    iterator_walk(point.iter().map(|c| c * 2));
    nl();

    show_note("sizes of the collections walked above");
    show_type(&array, "array");
    show_type(&vector, "vector");
    show_type(&deque, "deque");
    show_type(&point, "point");
    nl();

    show_note("long sequences fold into rows");
    show_fold(1..=23, 8, 2);

    println!("\nThat's all Folks!");
}
