//! Operations over a closed set of shapes, added without touching the shapes.

pub trait ShapeVisitor {
    type Output;

    fn visit_circle(&mut self, circle: &Circle) -> Self::Output;
    fn visit_rectangle(&mut self, rectangle: &Rectangle) -> Self::Output;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Rectangle(Rectangle),
}

impl Shape {
    pub fn accept<V: ShapeVisitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Shape::Circle(circle) => visitor.visit_circle(circle),
            Shape::Rectangle(rectangle) => visitor.visit_rectangle(rectangle),
        }
    }
}

pub struct AreaVisitor;

impl ShapeVisitor for AreaVisitor {
    type Output = f64;

    fn visit_circle(&mut self, circle: &Circle) -> f64 {
        std::f64::consts::PI * circle.radius * circle.radius
    }

    fn visit_rectangle(&mut self, rectangle: &Rectangle) -> f64 {
        rectangle.width * rectangle.height
    }
}

pub struct DescriptionVisitor;

impl ShapeVisitor for DescriptionVisitor {
    type Output = String;

    fn visit_circle(&mut self, circle: &Circle) -> String {
        format!("Circle with radius {}", circle.radius)
    }

    fn visit_rectangle(&mut self, rectangle: &Rectangle) -> String {
        format!("Rectangle {}x{}", rectangle.width, rectangle.height)
    }
}

/// Counts visited shapes per kind as it goes.
#[derive(Debug, Default)]
pub struct CountingVisitor {
    pub circles: usize,
    pub rectangles: usize,
}

impl ShapeVisitor for CountingVisitor {
    type Output = ();

    fn visit_circle(&mut self, _circle: &Circle) {
        self.circles += 1;
    }

    fn visit_rectangle(&mut self, _rectangle: &Rectangle) {
        self.rectangles += 1;
    }
}

/// Visits every shape in order.
pub fn visit_all<V: ShapeVisitor>(shapes: &[Shape], visitor: &mut V) -> Vec<V::Output> {
    shapes.iter().map(|shape| shape.accept(visitor)).collect()
}
