//! Shapes (the abstraction) drawing through interchangeable renderers (the
//! implementation); both sides vary independently.

pub trait Renderer {
    fn render_circle(&self, radius: f64) -> String;
    fn render_square(&self, side: f64) -> String;
}

pub struct VectorRenderer;
pub struct RasterRenderer;

impl Renderer for VectorRenderer {
    fn render_circle(&self, radius: f64) -> String {
        format!("Drawing a circle of radius {radius} as vectors")
    }

    fn render_square(&self, side: f64) -> String {
        format!("Drawing a square of side {side} as vectors")
    }
}

impl Renderer for RasterRenderer {
    fn render_circle(&self, radius: f64) -> String {
        format!("Drawing a circle of radius {radius} as pixels")
    }

    fn render_square(&self, side: f64) -> String {
        format!("Drawing a square of side {side} as pixels")
    }
}

pub trait Shape {
    fn draw(&self) -> String;
    fn resize(&mut self, factor: f64);
}

pub struct Circle<'r> {
    renderer: &'r dyn Renderer,
    radius: f64,
}

impl<'r> Circle<'r> {
    pub fn new(renderer: &'r dyn Renderer, radius: f64) -> Self {
        Circle { renderer, radius }
    }
}

impl Shape for Circle<'_> {
    fn draw(&self) -> String {
        self.renderer.render_circle(self.radius)
    }

    fn resize(&mut self, factor: f64) {
        self.radius *= factor;
    }
}

pub struct Square<'r> {
    renderer: &'r dyn Renderer,
    side: f64,
}

impl<'r> Square<'r> {
    pub fn new(renderer: &'r dyn Renderer, side: f64) -> Self {
        Square { renderer, side }
    }
}

impl Shape for Square<'_> {
    fn draw(&self) -> String {
        self.renderer.render_square(self.side)
    }

    fn resize(&mut self, factor: f64) {
        self.side *= factor;
    }
}
