//! Generic statistics over numeric sequences
//!
//! [`Stats`] holds a vector of any [`Arithmetic`] type and computes
//! max/min/sum/avg. The bound works as-is for `i32` and `f64` and extends
//! to any numeric type that converts losslessly to `f64`.
//!
//! The empty sequence is a recoverable error, not a panic: every statistic
//! returns a `Result`.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use crate::describe::{fold, Category, Describable, Semantics};

/// Numeric capability bound for [`Stats`]
pub trait Arithmetic<T = Self>:
    Add<Output = T>
    + Sub<Output = T>
    + Mul<Output = T>
    + Div<Output = T>
    + PartialOrd
    + Default
    + Copy
    + fmt::Debug
    + fmt::Display
    + Into<f64>
{
}

impl Arithmetic for i32 {}
impl Arithmetic for f64 {}

/// Errors from statistics over a sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// No values to compute over
    Empty,
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsError::Empty => write!(f, "statistics over an empty sequence"),
        }
    }
}

impl std::error::Error for StatsError {}

/// A sequence of numeric values with summary statistics
#[derive(Debug, Clone)]
pub struct Stats<T: Arithmetic> {
    items: Vec<T>,
}

impl<T: Arithmetic> Stats<T> {
    pub fn new(items: Vec<T>) -> Stats<T> {
        Stats { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    fn check(&self) -> Result<(), StatsError> {
        if self.items.is_empty() {
            Err(StatsError::Empty)
        } else {
            Ok(())
        }
    }

    pub fn max(&self) -> Result<T, StatsError> {
        self.check()?;
        let mut biggest = self.items[0];
        for &item in &self.items {
            if biggest < item {
                biggest = item;
            }
        }
        Ok(biggest)
    }

    pub fn min(&self) -> Result<T, StatsError> {
        self.check()?;
        let mut smallest = self.items[0];
        for &item in &self.items {
            if smallest > item {
                smallest = item;
            }
        }
        Ok(smallest)
    }

    pub fn sum(&self) -> Result<T, StatsError> {
        self.check()?;
        let mut sum = T::default();
        for &item in &self.items {
            sum = sum + item;
        }
        Ok(sum)
    }

    pub fn avg(&self) -> Result<f64, StatsError> {
        let numerator: f64 = self.sum()?.into();
        Ok(numerator / self.items.len() as f64)
    }
}

impl<T: Arithmetic> Semantics for Stats<T> {
    const CATEGORY: Category = Category::Value;
}

impl<T: Arithmetic> Describable for Stats<T> {
    fn to_rows(&self) -> Vec<String> {
        fold(self.items.iter(), 5, 2).rows().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_statistics() {
        let s = Stats::new(vec![3, -1, 4, 1, 5]);
        assert_eq!(s.len(), 5);
        assert_eq!(s.max(), Ok(5));
        assert_eq!(s.min(), Ok(-1));
        assert_eq!(s.sum(), Ok(12));
        assert_eq!(s.avg(), Ok(2.4));
    }

    #[test]
    fn float_statistics() {
        let s = Stats::new(vec![1.5, 2.5, 3.0]);
        assert_eq!(s.max(), Ok(3.0));
        assert_eq!(s.min(), Ok(1.5));
        assert_eq!(s.sum(), Ok(7.0));
        assert!((s.avg().unwrap() - 7.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn empty_sequence_is_an_error_not_a_panic() {
        let s: Stats<i32> = Stats::new(vec![]);
        assert_eq!(s.max(), Err(StatsError::Empty));
        assert_eq!(s.min(), Err(StatsError::Empty));
        assert_eq!(s.sum(), Err(StatsError::Empty));
        assert_eq!(s.avg(), Err(StatsError::Empty));
    }
}
