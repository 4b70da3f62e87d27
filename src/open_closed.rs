//! # Open-Closed Principle (OCP)
//!
//! > A type should be open for extension but closed for modification.
//!
//! [`Shape`] is the capability. [`Rectangle`] and [`Circle`] are two variants.
//! A third variant is a new type with its own `impl Shape`; nothing in this
//! module, and nothing that only depends on `Shape` (such as [`total_area`]),
//! has to be edited.
//!
//! ```rust
//! use solid_recipe::open_closed::{total_area, Circle, Rectangle, Shape};
//!
//! struct Square(f64);
//!
//! impl Shape for Square {
//!     fn area(&self) -> f64 {
//!         self.0 * self.0
//!     }
//! }
//!
//! let shapes: Vec<Box<dyn Shape>> = vec![
//!     Box::new(Rectangle::new(3.0, 4.0)),
//!     Box::new(Square(2.0)),
//! ];
//! assert_eq!(total_area(&shapes), 16.0);
//! ```

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Anything with an area.
pub trait Shape {
    fn area(&self) -> f64;
}

/// A four-sided figure.
///
/// Width and height are not validated. Zero or negative values give the
/// arithmetic product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// A round figure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

/// Sums the area of every shape. Knows only about [`Shape`].
pub fn total_area(shapes: &[Box<dyn Shape>]) -> f64 {
    shapes.iter().map(|shape| shape.area()).sum()
}

#[tracing::instrument]
pub fn demonstrate() -> String {
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Rectangle::new(3.0, 4.0)),
        Box::new(Circle::new(2.0)),
    ];
    for shape in &shapes {
        tracing::debug!(area = shape.area(), "Computed area");
    }
    let total = total_area(&shapes);
    format!("Total area of {} shapes = {:.3}", shapes.len(), total)
}
