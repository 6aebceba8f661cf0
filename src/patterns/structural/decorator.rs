//! Text sources wrapped in any number of stacking decorators.

pub trait Text {
    fn render(&self) -> String;
}

pub struct PlainText(pub String);

impl Text for PlainText {
    fn render(&self) -> String {
        self.0.clone()
    }
}

pub struct Bold<T>(pub T);
pub struct Italic<T>(pub T);
pub struct Bracketed<T>(pub T);

impl<T: Text> Text for Bold<T> {
    fn render(&self) -> String {
        format!("**{}**", self.0.render())
    }
}

impl<T: Text> Text for Italic<T> {
    fn render(&self) -> String {
        format!("_{}_", self.0.render())
    }
}

impl<T: Text> Text for Bracketed<T> {
    fn render(&self) -> String {
        format!("[{}]", self.0.render())
    }
}

impl Text for Box<dyn Text> {
    fn render(&self) -> String {
        (**self).render()
    }
}

/// Wraps `text` in decorators by name, innermost first. Unknown names are skipped.
pub fn decorate(text: &str, decorators: &[&str]) -> Box<dyn Text> {
    let mut current: Box<dyn Text> = Box::new(PlainText(text.to_string()));
    for name in decorators {
        current = match *name {
            "bold" => Box::new(Bold(current)),
            "italic" => Box::new(Italic(current)),
            "bracket" => Box::new(Bracketed(current)),
            _ => current,
        };
    }
    current
}
