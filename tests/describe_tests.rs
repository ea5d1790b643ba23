// Integration tests for the introspection core

use std::cell::RefCell;
use std::rc::Rc;

use typeview::demo::points::{Point4D, PointN};
use typeview::demo::stats::{Stats, StatsError};
use typeview::describe::{
    describe, descriptor_of, fold, identity_equals, Category, Describable, TypeRegistry,
};

#[test]
fn fold_row_counts_and_reassembly_hold_across_widths() {
    for n in 0usize..20 {
        let items: Vec<usize> = (0..n).collect();
        for w in 1usize..8 {
            let r = fold(items.iter(), w, 3);

            assert_eq!(r.row_count(), n.div_ceil(w), "n={n} w={w}");

            let mut rejoined: Vec<usize> = Vec::new();
            for (i, row) in r.rows().iter().enumerate() {
                assert!(row.starts_with("   "), "rows carry the left indent");
                let elems: Vec<usize> = row
                    .trim_start()
                    .split(", ")
                    .map(|s| s.parse().unwrap())
                    .collect();
                let expected = if i + 1 < r.row_count() || n % w == 0 {
                    w
                } else {
                    n % w
                };
                assert_eq!(elems.len(), expected, "n={n} w={w} row={i}");
                rejoined.extend(elems);
            }
            assert_eq!(rejoined, items, "n={n} w={w}");
        }
    }
}

#[test]
fn fold_of_empty_sequence_yields_zero_rows() {
    for w in 1usize..6 {
        assert!(fold(std::iter::empty::<u8>(), w, 2).is_empty());
    }
}

#[test]
fn fold_worked_example() {
    let r = fold([1, 2, 3, 4, 5, 6, 7], 3, 2);
    assert_eq!(r.rows(), ["  1, 2, 3", "  4, 5, 6", "  7"]);
}

#[test]
fn value_type_copy_is_never_an_alias() {
    let x = Point4D::new(1, 2, 3);
    let y = x.clone();
    assert!(describe(&x).category.is_value());
    assert!(!identity_equals(&x, &y));
}

#[test]
fn reference_type_alias_shares_the_instance() {
    let x = Rc::new(RefCell::new(Point4D::new(1, 2, 3)));
    let y = Rc::clone(&x);

    assert!(describe(&x).category.is_reference());
    assert!(identity_equals(&x, &y));

    y.borrow_mut().set_z(99);
    assert_eq!(x.borrow().z(), 99);
}

#[test]
fn integer_descriptor_matches_platform_width() {
    let d = descriptor_of::<i32>();
    assert_eq!(d.display_name, "i32");
    assert_eq!(d.byte_size, 4);
    assert_eq!(d.category, Category::Value);
}

#[test]
fn handle_sizes_never_include_the_pointee() {
    let d = descriptor_of::<Rc<[u8; 4096]>>();
    assert_eq!(d.byte_size, std::mem::size_of::<usize>());
    assert_eq!(d.category, Category::Reference);
}

#[test]
fn pointn_to_rows_obeys_fold_invariants() {
    let p = PointN::from((0..9).collect::<Vec<i32>>()).width(4).left(1);
    let rows = p.to_rows();
    assert_eq!(rows.len(), 3);

    let rejoined: Vec<i32> = rows
        .iter()
        .flat_map(|row| row.split(", "))
        .map(|s| s.trim().parse().unwrap())
        .collect();
    assert_eq!(rejoined, (0..9).collect::<Vec<i32>>());
}

#[test]
fn stats_results_match_hand_computation() {
    let s = Stats::new(vec![2, 4, 6, 8]);
    assert_eq!(s.max(), Ok(8));
    assert_eq!(s.min(), Ok(2));
    assert_eq!(s.sum(), Ok(20));
    assert_eq!(s.avg(), Ok(5.0));

    let empty: Stats<f64> = Stats::new(vec![]);
    assert_eq!(empty.avg(), Err(StatsError::Empty));
}

#[test]
fn registry_round_trip() {
    let mut reg = TypeRegistry::new();
    reg.register::<Point4D>();
    reg.register::<Rc<RefCell<Point4D>>>();

    assert_eq!(reg.len(), 2);
    assert!(reg.lookup("Point4D").unwrap().category.is_value());
    assert!(reg
        .lookup("Rc<RefCell<Point4D>>")
        .unwrap()
        .category
        .is_reference());
    assert!(reg.lookup("NotRegistered").is_none());
}
