//! Families of widgets that must be used together.

pub trait Button {
    fn render(&self) -> String;
    fn on_click(&self) -> String;
}

pub trait TextBox {
    fn render(&self) -> String;
    fn input(&self, text: &str) -> String;
}

/// Creates one matching widget of each kind.
pub trait GuiFactory {
    fn create_button(&self) -> Box<dyn Button>;
    fn create_text_box(&self) -> Box<dyn TextBox>;
}

pub struct WindowsButton;
pub struct WindowsTextBox;
pub struct MacButton;
pub struct MacTextBox;

impl Button for WindowsButton {
    fn render(&self) -> String {
        "Rendering a Windows-style button".to_string()
    }

    fn on_click(&self) -> String {
        "Windows button clicked".to_string()
    }
}

impl TextBox for WindowsTextBox {
    fn render(&self) -> String {
        "Rendering a Windows-style text box".to_string()
    }

    fn input(&self, text: &str) -> String {
        format!("Windows text box received: {text}")
    }
}

impl Button for MacButton {
    fn render(&self) -> String {
        "Rendering a macOS-style button".to_string()
    }

    fn on_click(&self) -> String {
        "macOS button clicked".to_string()
    }
}

impl TextBox for MacTextBox {
    fn render(&self) -> String {
        "Rendering a macOS-style text box".to_string()
    }

    fn input(&self, text: &str) -> String {
        format!("macOS text box received: {text}")
    }
}

pub struct WindowsFactory;
pub struct MacFactory;

impl GuiFactory for WindowsFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WindowsButton)
    }

    fn create_text_box(&self) -> Box<dyn TextBox> {
        Box::new(WindowsTextBox)
    }
}

impl GuiFactory for MacFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(MacButton)
    }

    fn create_text_box(&self) -> Box<dyn TextBox> {
        Box::new(MacTextBox)
    }
}

/// Client code that only knows the factory trait.
pub fn render_form(factory: &dyn GuiFactory, text: &str) -> Vec<String> {
    let button = factory.create_button();
    let text_box = factory.create_text_box();
    vec![
        button.render(),
        text_box.render(),
        text_box.input(text),
        button.on_click(),
    ]
}
