//! Row-folded sequence rendering
//!
//! [`fold`] breaks an ordered sequence into rows of a fixed number of
//! elements so long sequences stay readable at the terminal. Each row is
//! prefixed with a left indent and joins its elements with `", "`; the final
//! row may be shorter. An empty sequence folds to an empty rendering.
//!
//! ```
//! use typeview::describe::fold;
//!
//! let r = fold(1..=7, 3, 2);
//! assert_eq!(r.rows(), ["  1, 2, 3", "  4, 5, 6", "  7"]);
//! ```

use std::fmt;

/// Rows produced by [`fold`]
///
/// Built transiently for one display call; owns its stringified rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoldedRendering {
    rows: Vec<String>,
}

impl FoldedRendering {
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for FoldedRendering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", row)?;
        }
        Ok(())
    }
}

impl From<Vec<String>> for FoldedRendering {
    fn from(rows: Vec<String>) -> Self {
        FoldedRendering { rows }
    }
}

/// Fold a sequence into rows of `width` elements indented by `left_indent`
///
/// Element order is preserved and every element appears in exactly one row.
/// `width == 0` is a caller contract violation.
pub fn fold<I>(items: I, width: usize, left_indent: usize) -> FoldedRendering
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    assert!(width >= 1, "fold width must be at least 1");

    let pad = " ".repeat(left_indent);
    let mut rows = Vec::new();
    let mut current: Vec<String> = Vec::with_capacity(width);

    for item in items {
        current.push(item.to_string());
        if current.len() == width {
            rows.push(format!("{}{}", pad, current.join(", ")));
            current.clear();
        }
    }
    if !current.is_empty() {
        rows.push(format!("{}{}", pad, current.join(", ")));
    }

    FoldedRendering { rows }
}

/// Capability for types that can render themselves as display rows
///
/// Demo aggregates implement this so generic display code can dispatch on
/// the capability instead of on the concrete type.
pub trait Describable {
    /// Render state as indented display rows
    fn to_rows(&self) -> Vec<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worked_example() {
        let r = fold([1, 2, 3, 4, 5, 6, 7], 3, 2);
        assert_eq!(r.rows(), ["  1, 2, 3", "  4, 5, 6", "  7"]);
    }

    #[test]
    fn empty_sequence_folds_to_no_rows() {
        let r = fold(std::iter::empty::<i32>(), 4, 0);
        assert!(r.is_empty());
        assert_eq!(r.to_string(), "");
    }

    #[test]
    fn width_at_least_length_gives_one_row() {
        let r = fold([9, 8], 10, 0);
        assert_eq!(r.rows(), ["9, 8"]);
    }

    #[test]
    fn row_counts_and_reassembly() {
        let n = 11usize;
        let w = 4usize;
        let items: Vec<usize> = (0..n).collect();
        let r = fold(items.iter(), w, 0);

        assert_eq!(r.row_count(), n.div_ceil(w));
        for (i, row) in r.rows().iter().enumerate() {
            let elems = row.split(", ").count();
            if i + 1 < r.row_count() {
                assert_eq!(elems, w);
            } else {
                assert_eq!(elems, n % w);
            }
        }

        let rejoined: Vec<usize> = r
            .rows()
            .iter()
            .flat_map(|row| row.split(", "))
            .map(|s| s.trim().parse().unwrap())
            .collect();
        assert_eq!(rejoined, items);
    }

    #[test]
    #[should_panic(expected = "fold width")]
    fn zero_width_is_a_contract_violation() {
        let _ = fold([1, 2, 3], 0, 0);
    }

    #[test]
    fn display_joins_rows_with_newlines() {
        let r = fold(['a', 'b', 'c'], 2, 1);
        assert_eq!(r.to_string(), " a, b\n c");
    }
}
