//! Demo point types
//!
//! [`Point4D`] is a plain value-semantics aggregate: three spatial
//! coordinates and a creation timestamp. Cloning one yields an independent
//! instance, which the `data` and `objects` demos rely on.
//!
//! [`PointN`] is a generic N-coordinate point. It iterates in insertion
//! order, supports indexing, and renders itself as folded rows with
//! configurable row width and left offset.

use std::fmt::Display;
use std::ops::{Index, IndexMut};
use std::slice::Iter;

use chrono::{DateTime, Local};

use crate::describe::{fold, Category, Describable, Semantics};

/// Three spatial coordinates plus a creation timestamp
#[derive(Debug, Clone)]
pub struct Point4D {
    x: i32,
    y: i32,
    z: i32,
    t: DateTime<Local>,
}

impl Point4D {
    pub fn new(x: i32, y: i32, z: i32) -> Point4D {
        Point4D {
            x,
            y,
            z,
            t: Local::now(),
        }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn z(&self) -> i32 {
        self.z
    }

    pub fn time(&self) -> DateTime<Local> {
        self.t
    }

    pub fn set_x(&mut self, x: i32) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: i32) {
        self.y = y;
    }

    pub fn set_z(&mut self, z: i32) {
        self.z = z;
    }
}

impl Default for Point4D {
    fn default() -> Self {
        Point4D::new(0, 0, 0)
    }
}

impl Semantics for Point4D {
    const CATEGORY: Category = Category::Value;
}

impl Describable for Point4D {
    fn to_rows(&self) -> Vec<String> {
        vec![
            format!("  x: {}, y: {}, z: {}", self.x, self.y, self.z),
            format!("  t: {}", self.t.format("%Y-%m-%d %H:%M:%S%.3f")),
        ]
    }
}

/// Generic N-coordinate point with folded self-display
///
/// `width` is the number of coordinates per display row and `left` the row
/// offset from the terminal's left edge.
#[derive(Debug, Clone)]
pub struct PointN<T> {
    coords: Vec<T>,
    width: usize,
    left: usize,
}

impl<T> PointN<T> {
    /// A point with `n` default-valued coordinates
    pub fn new(n: usize) -> PointN<T>
    where
        T: Default,
    {
        PointN {
            coords: (0..n).map(|_| T::default()).collect(),
            width: 5,
            left: 2,
        }
    }

    pub fn push(&mut self, coord: T) {
        self.coords.push(coord);
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.coords.iter()
    }

    pub fn coords(&self) -> &[T] {
        &self.coords
    }

    /// Set display row width
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set display left offset
    pub fn left(mut self, left: usize) -> Self {
        self.left = left;
        self
    }
}

impl<T> From<Vec<T>> for PointN<T> {
    fn from(coords: Vec<T>) -> Self {
        PointN {
            coords,
            width: 5,
            left: 2,
        }
    }
}

impl<T> Index<usize> for PointN<T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.coords[i]
    }
}

impl<T> IndexMut<usize> for PointN<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.coords[i]
    }
}

impl<'a, T> IntoIterator for &'a PointN<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.iter()
    }
}

impl<T> Semantics for PointN<T> {
    const CATEGORY: Category = Category::Value;
}

impl<T: Display> Describable for PointN<T> {
    fn to_rows(&self) -> Vec<String> {
        fold(self.coords.iter(), self.width, self.left).rows().to_vec()
    }
}
