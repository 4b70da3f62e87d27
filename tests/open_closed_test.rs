use solid_recipe::open_closed::{total_area, Circle, Rectangle, Shape};
use std::f64::consts::PI;

/// A variant added from outside the crate. Nothing in `open_closed` changes.
struct Triangle {
    base: f64,
    height: f64,
}

impl Shape for Triangle {
    fn area(&self) -> f64 {
        0.5 * self.base * self.height
    }
}

#[test]
fn test_new_variant_leaves_existing_results_unchanged() {
    let rectangle = Rectangle::new(3.0, 4.0);
    let circle = Circle::new(2.0);
    let triangle = Triangle {
        base: 6.0,
        height: 2.0,
    };

    assert_eq!(rectangle.area(), 12.0);
    assert!((circle.area() - 4.0 * PI).abs() < 1e-9);
    assert_eq!(triangle.area(), 6.0);
}

#[test]
fn test_consumer_accepts_new_variant() {
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Rectangle::new(3.0, 4.0)),
        Box::new(Circle::new(1.0)),
        Box::new(Triangle {
            base: 6.0,
            height: 2.0,
        }),
    ];

    assert!((total_area(&shapes) - (18.0 + PI)).abs() < 1e-9);
}
