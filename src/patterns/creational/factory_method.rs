//! Editors that defer the choice of document type to a factory method.

pub trait Document {
    fn create(&self) -> String;
    fn open(&self) -> String;
    fn save(&self) -> String;
}

pub struct TextDocument;
pub struct SpreadsheetDocument;

impl Document for TextDocument {
    fn create(&self) -> String {
        "Creating a text document".to_string()
    }

    fn open(&self) -> String {
        "Opening a text document".to_string()
    }

    fn save(&self) -> String {
        "Saving a text document".to_string()
    }
}

impl Document for SpreadsheetDocument {
    fn create(&self) -> String {
        "Creating a spreadsheet document".to_string()
    }

    fn open(&self) -> String {
        "Opening a spreadsheet document".to_string()
    }

    fn save(&self) -> String {
        "Saving a spreadsheet document".to_string()
    }
}

pub trait Application {
    /// The factory method.
    fn create_document(&self) -> Box<dyn Document>;

    fn new_document(&self) -> String {
        self.create_document().create()
    }
}

pub struct TextEditor;
pub struct SpreadsheetEditor;

impl Application for TextEditor {
    fn create_document(&self) -> Box<dyn Document> {
        Box::new(TextDocument)
    }
}

impl Application for SpreadsheetEditor {
    fn create_document(&self) -> Box<dyn Document> {
        Box::new(SpreadsheetDocument)
    }
}
