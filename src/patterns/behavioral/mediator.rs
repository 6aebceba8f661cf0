//! Two components that never reference each other, coordinated by a mediator
//! reacting to their events.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    A,
    B,
    C,
    D,
}

pub trait Mediator {
    /// Reacts to `event` raised by one component; returns the resulting log.
    fn notify(&self, event: Event) -> Vec<String>;
}

#[derive(Debug, Default)]
pub struct Component1;

impl Component1 {
    pub fn do_a(&self, mediator: &dyn Mediator) -> Vec<String> {
        let mut log = vec!["Component 1 does A.".to_string()];
        log.extend(mediator.notify(Event::A));
        log
    }

    pub fn do_b(&self) -> String {
        "Component 1 does B.".to_string()
    }
}

#[derive(Debug, Default)]
pub struct Component2;

impl Component2 {
    pub fn do_c(&self) -> String {
        "Component 2 does C.".to_string()
    }

    pub fn do_d(&self, mediator: &dyn Mediator) -> Vec<String> {
        let mut log = vec!["Component 2 does D.".to_string()];
        log.extend(mediator.notify(Event::D));
        log
    }
}

#[derive(Debug, Default)]
pub struct ConcreteMediator {
    component1: Component1,
    component2: Component2,
}

impl ConcreteMediator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn component1(&self) -> &Component1 {
        &self.component1
    }

    pub fn component2(&self) -> &Component2 {
        &self.component2
    }
}

impl Mediator for ConcreteMediator {
    fn notify(&self, event: Event) -> Vec<String> {
        match event {
            Event::A => vec![
                "Mediator reacts on A and triggers:".to_string(),
                self.component2.do_c(),
            ],
            Event::D => vec![
                "Mediator reacts on D and triggers:".to_string(),
                self.component1.do_b(),
                self.component2.do_c(),
            ],
            Event::B | Event::C => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_a_triggers_c() {
        let mediator = ConcreteMediator::new();
        assert_eq!(
            mediator.component1().do_a(&mediator),
            ["Component 1 does A.", "Mediator reacts on A and triggers:", "Component 2 does C."]
        );
    }

    #[test]
    fn event_d_triggers_b_then_c() {
        let mediator = ConcreteMediator::new();
        let log = mediator.component2().do_d(&mediator);
        assert_eq!(log.len(), 4);
        assert_eq!(log[2], "Component 1 does B.");
        assert_eq!(log[3], "Component 2 does C.");
    }

    #[test]
    fn other_events_are_ignored() {
        assert!(ConcreteMediator::new().notify(Event::B).is_empty());
    }
}
