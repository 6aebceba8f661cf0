//! New shapes are made by cloning registered prototypes.

use hashbrown::HashMap;

pub trait Shape {
    fn clone_box(&self) -> Box<dyn Shape>;
    fn describe(&self) -> String;
    fn area(&self) -> f64;
    fn set_color(&mut self, color: &str);
}

impl Clone for Box<dyn Shape> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub radius: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
    pub color: String,
}

impl Shape for Circle {
    fn clone_box(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }

    fn describe(&self) -> String {
        format!("{} circle of radius {}", self.color, self.radius)
    }

    fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }

    fn set_color(&mut self, color: &str) {
        self.color = color.to_string();
    }
}

impl Shape for Rectangle {
    fn clone_box(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }

    fn describe(&self) -> String {
        format!("{} rectangle {}x{}", self.color, self.width, self.height)
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn set_color(&mut self, color: &str) {
        self.color = color.to_string();
    }
}

/// Named prototypes; every lookup hands out an independent copy.
#[derive(Default)]
pub struct PrototypeRegistry {
    prototypes: HashMap<String, Box<dyn Shape>>,
}

impl PrototypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>, prototype: Box<dyn Shape>) {
        self.prototypes.insert(name.into(), prototype);
    }

    pub fn create(&self, name: &str) -> Option<Box<dyn Shape>> {
        self.prototypes.get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> PrototypeRegistry {
        let mut registry = PrototypeRegistry::new();
        registry.register(
            "unit-circle",
            Box::new(Circle {
                radius: 1.0,
                color: "red".to_string(),
            }),
        );
        registry.register(
            "square",
            Box::new(Rectangle {
                width: 2.0,
                height: 2.0,
                color: "blue".to_string(),
            }),
        );
        registry
    }

    #[test]
    fn clones_are_independent() {
        let registry = registry();
        let mut first = registry.create("square").unwrap();
        first.set_color("green");

        let second = registry.create("square").unwrap();
        assert_eq!(first.describe(), "green rectangle 2x2");
        assert_eq!(second.describe(), "blue rectangle 2x2");
        assert_eq!(second.area(), 4.0);
    }

    #[test]
    fn unknown_prototype() {
        let registry = registry();
        assert!(registry.create("triangle").is_none());
        assert_eq!(registry.len(), 2);
        assert!((registry.create("unit-circle").unwrap().area() - std::f64::consts::PI).abs() < 1e-12);
    }
}
