//! A context whose behaviour changes with its current state; each state
//! decides which state comes next.

pub trait State {
    fn name(&self) -> &'static str;
    /// Handles one request and returns the message plus the following state.
    fn handle(self: Box<Self>) -> (String, Box<dyn State>);
}

pub struct StateA;
pub struct StateB;

impl State for StateA {
    fn name(&self) -> &'static str {
        "A"
    }

    fn handle(self: Box<Self>) -> (String, Box<dyn State>) {
        ("Handling in state A".to_string(), Box::new(StateB))
    }
}

impl State for StateB {
    fn name(&self) -> &'static str {
        "B"
    }

    fn handle(self: Box<Self>) -> (String, Box<dyn State>) {
        ("Handling in state B".to_string(), Box::new(StateA))
    }
}

pub struct Context {
    state: Option<Box<dyn State>>,
}

impl Context {
    pub fn new(initial: Box<dyn State>) -> Self {
        Context {
            state: Some(initial),
        }
    }

    pub fn set_state(&mut self, state: Box<dyn State>) {
        self.state = Some(state);
    }

    pub fn state_name(&self) -> &'static str {
        self.state.as_ref().map_or("none", |s| s.name())
    }

    pub fn request(&mut self) -> String {
        let Some(state) = self.state.take() else {
            return String::new();
        };
        let (message, next) = state.handle();
        self.state = Some(next);
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_toggle_between_states() {
        let mut context = Context::new(Box::new(StateA));
        assert_eq!(context.request(), "Handling in state A");
        assert_eq!(context.state_name(), "B");
        assert_eq!(context.request(), "Handling in state B");
        assert_eq!(context.state_name(), "A");
    }

    #[test]
    fn explicit_transition() {
        let mut context = Context::new(Box::new(StateA));
        context.set_state(Box::new(StateB));
        assert_eq!(context.request(), "Handling in state B");
    }
}
