// 🔀 Polymorphism - One trait, many behaviors
//
// The inheritance chapter of the course, expressed the Rust way: a
// trait at the seam, trait objects for the heterogeneous collection.
// Each implementor answers the same methods with its own message.

use std::f64::consts::PI;

pub trait Drives {
    fn make(&self) -> &str;

    fn accelerate(&self) -> String;

    fn brake(&self) -> String;
}

pub struct Car {
    make: String,
}

impl Car {
    pub fn new(make: impl Into<String>) -> Self {
        Car { make: make.into() }
    }
}

impl Drives for Car {
    fn make(&self) -> &str {
        &self.make
    }

    fn accelerate(&self) -> String {
        format!("The car {} accelerates with its petrol engine 🚗", self.make)
    }

    fn brake(&self) -> String {
        format!("The car {} brakes with disc brakes", self.make)
    }
}

pub struct Bicycle {
    make: String,
}

impl Bicycle {
    pub fn new(make: impl Into<String>) -> Self {
        Bicycle { make: make.into() }
    }
}

impl Drives for Bicycle {
    fn make(&self) -> &str {
        &self.make
    }

    fn accelerate(&self) -> String {
        format!("The bicycle {} accelerates by pedalling 🚴", self.make)
    }

    fn brake(&self) -> String {
        format!("The bicycle {} brakes with hand brakes", self.make)
    }
}

pub struct Plane {
    make: String,
}

impl Plane {
    pub fn new(make: impl Into<String>) -> Self {
        Plane { make: make.into() }
    }
}

impl Drives for Plane {
    fn make(&self) -> &str {
        &self.make
    }

    fn accelerate(&self) -> String {
        format!("The plane {} accelerates with its turbines ✈️", self.make)
    }

    fn brake(&self) -> String {
        format!("The plane {} brakes with reverse thrust", self.make)
    }
}

/// One accelerate/brake pair per vehicle, via dynamic dispatch.
pub fn demo_lines(vehicles: &[Box<dyn Drives>]) -> Vec<String> {
    vehicles
        .iter()
        .flat_map(|v| [v.accelerate(), v.brake()])
        .collect()
}

// ============================================================================
// SHAPES
// ============================================================================

// Second demo of the chapter: same two methods, different arithmetic
// per shape.

pub trait Shape {
    fn area(&self) -> f64;

    fn perimeter(&self) -> f64;
}

pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Rectangle { width, height }
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }
}

pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Circle { radius }
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }
}

pub struct Triangle {
    base: f64,
    height: f64,
    sides: [f64; 3],
}

impl Triangle {
    pub fn new(base: f64, height: f64, sides: [f64; 3]) -> Self {
        Triangle {
            base,
            height,
            sides,
        }
    }
}

impl Shape for Triangle {
    fn area(&self) -> f64 {
        self.base * self.height / 2.0
    }

    fn perimeter(&self) -> f64 {
        self.sides.iter().sum()
    }
}

/// Area and perimeter of a named shape, formatted to two decimals.
pub fn shape_lines(shape: &dyn Shape, name: &str) -> Vec<String> {
    vec![
        format!("{name}:"),
        format!("  Area: {:.2}", shape.area()),
        format!("  Perimeter: {:.2}", shape.perimeter()),
    ]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_implementor_answers_with_its_own_message() {
        let car = Car::new("Toyota");
        let bike = Bicycle::new("Trek");
        let plane = Plane::new("Boeing");

        assert!(car.accelerate().contains("petrol engine"));
        assert!(bike.accelerate().contains("pedalling"));
        assert!(plane.accelerate().contains("turbines"));
        assert!(car.brake().contains("disc brakes"));
        assert!(bike.brake().contains("hand brakes"));
        assert!(plane.brake().contains("reverse thrust"));
    }

    #[test]
    fn test_demo_lines_dispatch_dynamically() {
        let vehicles: Vec<Box<dyn Drives>> = vec![
            Box::new(Car::new("Toyota")),
            Box::new(Bicycle::new("Trek")),
            Box::new(Plane::new("Boeing")),
        ];

        let lines = demo_lines(&vehicles);
        assert_eq!(lines.len(), 6);
        assert!(lines[0].contains("Toyota"));
        assert!(lines[2].contains("Trek"));
        assert!(lines[4].contains("Boeing"));
    }

    #[test]
    fn test_make_is_exposed_through_the_trait() {
        let vehicles: Vec<Box<dyn Drives>> = vec![
            Box::new(Car::new("Toyota")),
            Box::new(Bicycle::new("Trek")),
            Box::new(Plane::new("Boeing")),
        ];
        let makes: Vec<&str> = vehicles.iter().map(|v| v.make()).collect();
        assert_eq!(makes, vec!["Toyota", "Trek", "Boeing"]);
    }

    #[test]
    fn test_rectangle_properties() {
        let rect = Rectangle::new(5.0, 3.0);
        assert_eq!(rect.area(), 15.0);
        assert_eq!(rect.perimeter(), 16.0);
    }

    #[test]
    fn test_circle_properties() {
        let circle = Circle::new(4.0);
        assert!((circle.area() - 16.0 * PI).abs() < 1e-9);
        assert!((circle.perimeter() - 8.0 * PI).abs() < 1e-9);
    }

    #[test]
    fn test_triangle_properties() {
        let triangle = Triangle::new(6.0, 4.0, [5.0, 5.0, 6.0]);
        assert_eq!(triangle.area(), 12.0);
        assert_eq!(triangle.perimeter(), 16.0);
    }

    #[test]
    fn test_shape_lines_format_to_two_decimals() {
        let circle = Circle::new(4.0);
        let lines = shape_lines(&circle, "Circle radius 4");
        assert_eq!(lines[0], "Circle radius 4:");
        assert_eq!(lines[1], "  Area: 50.27");
        assert_eq!(lines[2], "  Perimeter: 25.13");
    }
}
