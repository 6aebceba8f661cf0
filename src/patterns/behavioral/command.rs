//! Requests wrapped as objects: an invoker runs hooks around its work, and an
//! editor keeps executed edits so it can undo them.

use std::rc::Rc;

pub trait Command {
    fn execute(&self) -> String;
}

pub struct SimpleCommand {
    payload: String,
}

impl SimpleCommand {
    pub fn new(payload: impl Into<String>) -> Self {
        SimpleCommand {
            payload: payload.into(),
        }
    }
}

impl Command for SimpleCommand {
    fn execute(&self) -> String {
        format!("SimpleCommand: printing ({})", self.payload)
    }
}

/// Does the actual work behind complex commands.
#[derive(Debug, Default)]
pub struct Receiver;

impl Receiver {
    pub fn do_something(&self, a: &str) -> String {
        format!("Receiver: working on ({a})")
    }

    pub fn do_something_else(&self, b: &str) -> String {
        format!("Receiver: also working on ({b})")
    }
}

pub struct ComplexCommand {
    receiver: Rc<Receiver>,
    a: String,
    b: String,
}

impl ComplexCommand {
    pub fn new(receiver: Rc<Receiver>, a: impl Into<String>, b: impl Into<String>) -> Self {
        ComplexCommand {
            receiver,
            a: a.into(),
            b: b.into(),
        }
    }
}

impl Command for ComplexCommand {
    fn execute(&self) -> String {
        [
            "ComplexCommand: delegating to the receiver".to_string(),
            self.receiver.do_something(&self.a),
            self.receiver.do_something_else(&self.b),
        ]
        .join("\n")
    }
}

#[derive(Default)]
pub struct Invoker {
    on_start: Option<Box<dyn Command>>,
    on_finish: Option<Box<dyn Command>>,
}

impl Invoker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_on_start(&mut self, command: Box<dyn Command>) {
        self.on_start = Some(command);
    }

    pub fn set_on_finish(&mut self, command: Box<dyn Command>) {
        self.on_finish = Some(command);
    }

    pub fn do_something_important(&self) -> Vec<String> {
        let mut log = Vec::new();
        if let Some(command) = &self.on_start {
            log.push(command.execute());
        }
        log.push("Invoker: doing something important".to_string());
        if let Some(command) = &self.on_finish {
            log.push(command.execute());
        }
        log
    }
}

/// An edit that knows how to reverse itself.
pub trait UndoableCommand {
    fn execute(&mut self, buffer: &mut String);
    fn undo(&mut self, buffer: &mut String);
}

pub struct Append {
    text: String,
}

impl Append {
    pub fn new(text: impl Into<String>) -> Self {
        Append { text: text.into() }
    }
}

impl UndoableCommand for Append {
    fn execute(&mut self, buffer: &mut String) {
        buffer.push_str(&self.text);
    }

    /// Removes the appended text, leaving a buffer that no longer ends with it untouched.
    fn undo(&mut self, buffer: &mut String) {
        if let Some(kept) = buffer.strip_suffix(self.text.as_str()) {
            let kept = kept.len();
            buffer.truncate(kept);
        }
    }
}

/// Removes trailing characters, remembering what it took.
pub struct DeleteLast {
    count: usize,
    removed: String,
}

impl DeleteLast {
    pub fn new(count: usize) -> Self {
        DeleteLast {
            count,
            removed: String::new(),
        }
    }
}

impl UndoableCommand for DeleteLast {
    fn execute(&mut self, buffer: &mut String) {
        let keep = buffer.chars().count().saturating_sub(self.count);
        let split = buffer.char_indices().nth(keep).map_or(buffer.len(), |(i, _)| i);
        self.removed = buffer.split_off(split);
    }

    fn undo(&mut self, buffer: &mut String) {
        buffer.push_str(&std::mem::take(&mut self.removed));
    }
}

#[derive(Default)]
pub struct Editor {
    buffer: String,
    history: Vec<Box<dyn UndoableCommand>>,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn run(&mut self, mut command: Box<dyn UndoableCommand>) {
        command.execute(&mut self.buffer);
        self.history.push(command);
    }

    /// # Returns
    /// `false` if there was nothing to undo
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(mut command) => {
                command.undo(&mut self.buffer);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoker_runs_hooks_around_work() {
        let mut invoker = Invoker::new();
        invoker.set_on_start(Box::new(SimpleCommand::new("Say Hi!")));
        let receiver = Rc::new(Receiver);
        invoker.set_on_finish(Box::new(ComplexCommand::new(receiver, "Send email", "Save report")));

        let log = invoker.do_something_important();
        assert_eq!(log.len(), 3);
        assert_eq!(log[0], "SimpleCommand: printing (Say Hi!)");
        assert_eq!(log[1], "Invoker: doing something important");
        assert!(log[2].ends_with("Receiver: also working on (Save report)"));
    }

    #[test]
    fn invoker_without_hooks() {
        assert_eq!(Invoker::new().do_something_important(), ["Invoker: doing something important"]);
    }

    #[test]
    fn edits_undo_in_reverse_order() {
        let mut editor = Editor::new();
        editor.run(Box::new(Append::new("hello")));
        editor.run(Box::new(Append::new(" world")));
        editor.run(Box::new(DeleteLast::new(3)));
        assert_eq!(editor.text(), "hello wo");

        assert!(editor.undo());
        assert_eq!(editor.text(), "hello world");
        assert!(editor.undo());
        assert!(editor.undo());
        assert_eq!(editor.text(), "");
        assert!(!editor.undo());
    }

    #[test]
    fn delete_more_than_present() {
        let mut editor = Editor::new();
        editor.run(Box::new(Append::new("héllo")));
        editor.run(Box::new(DeleteLast::new(10)));
        assert_eq!(editor.text(), "");
        editor.undo();
        assert_eq!(editor.text(), "héllo");
    }

    #[test]
    fn append_undo_on_changed_buffer_is_noop() {
        let mut append = Append::new("ab");
        let mut short = String::from("é");
        append.undo(&mut short);
        assert_eq!(short, "é");

        let mut buffer = String::from("x");
        append.execute(&mut buffer);
        buffer.push('!');
        append.undo(&mut buffer);
        assert_eq!(buffer, "xab!");
    }
}

