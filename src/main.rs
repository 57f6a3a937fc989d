use anyhow::Result;

use paradigms_primer::{
    declarative_sum, demo_lines, functional_sum, imperative_sum, shape_lines, Account, Bicycle,
    Car, Circle, Drives, GuardedAccount, Plane, PropertyAccount, Rectangle, Shape, Triangle,
    Vehicle,
};

fn main() -> Result<()> {
    println!("🎓 Paradigms Primer - Programming styles side by side");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    run_paradigms();
    run_objects();
    run_encapsulation();
    run_accessors();
    run_polymorphism();

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("✅ Demo complete");

    Ok(())
}

/// Same sum, three styles.
fn run_paradigms() {
    let numbers = [1, 2, 3, 4];

    println!("\n### 🔹 Imperative");
    println!("Imperative sum: {}", imperative_sum(&numbers));

    println!("\n### 🔹 Declarative");
    println!("Declarative sum: {}", declarative_sum(&numbers));

    println!("\n### 🔹 Functional");
    println!("Functional sum: {}", functional_sum(&numbers));
}

fn run_objects() {
    println!("\n### 🔹 Object-Oriented");

    let first = Vehicle::new("Toyota", "Red");
    let second = Vehicle::new("Ford", "Blue");

    first.start();
    second.start();
}

fn run_encapsulation() {
    println!("\n### 🔹 Encapsulation");

    let mut account = Account::new("Ana", 1000.0);
    println!("{}", account.owner);
    account.deposit(500.0);
    println!("{}", account.describe());
}

fn run_accessors() {
    println!("\n### 🔹 Getters and setters");

    let mut account = GuardedAccount::new("María", 500.0);
    println!("Initial balance: {}", account.get_balance());
    account.set_balance(1000.0);
    println!("Balance after the setter: {}", account.get_balance());
    account.set_balance(-100.0); // rejected, prints the diagnostic

    println!("\n### 🔹 Property-style accessors");

    let mut account = PropertyAccount::new("Juan", 800.0);
    println!("Initial balance: {}", account.balance());
    account.set_balance(1200.0);
    println!("Balance after modifying: {}", account.balance());
    account.set_balance(-50.0); // rejected, prints the diagnostic
}

fn run_polymorphism() {
    println!("\n### 🔹 Polymorphism");

    let vehicles: Vec<Box<dyn Drives>> = vec![
        Box::new(Car::new("Toyota")),
        Box::new(Bicycle::new("Trek")),
        Box::new(Plane::new("Boeing")),
    ];

    for line in demo_lines(&vehicles) {
        println!("{line}");
    }

    println!("\n### 🔹 Polymorphism with shapes");

    let shapes: Vec<(Box<dyn Shape>, &str)> = vec![
        (Box::new(Rectangle::new(5.0, 3.0)), "Rectangle 5x3"),
        (Box::new(Circle::new(4.0)), "Circle radius 4"),
        (Box::new(Triangle::new(6.0, 4.0, [5.0, 5.0, 6.0])), "Triangle"),
    ];

    for (shape, name) in &shapes {
        for line in shape_lines(shape.as_ref(), name) {
            println!("{line}");
        }
    }
}
