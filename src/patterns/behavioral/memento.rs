//! Snapshots of an originator's state, kept by a caretaker for undo.

/// An opaque snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memento {
    state: String,
}

#[derive(Debug, Default)]
pub struct Originator {
    state: String,
}

impl Originator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_state(&mut self, state: impl Into<String>) {
        self.state = state.into();
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn save(&self) -> Memento {
        Memento {
            state: self.state.clone(),
        }
    }

    pub fn restore(&mut self, memento: &Memento) {
        self.state.clone_from(&memento.state);
    }
}

#[derive(Debug, Default)]
pub struct Caretaker {
    history: Vec<Memento>,
}

impl Caretaker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, memento: Memento) {
        self.history.push(memento);
    }

    pub fn get(&self, index: usize) -> Option<&Memento> {
        self.history.get(index)
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Restores the most recent snapshot and forgets it.
    ///
    /// # Returns
    /// `false` if the history was empty
    pub fn undo(&mut self, originator: &mut Originator) -> bool {
        match self.history.pop() {
            Some(memento) => {
                originator.restore(&memento);
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
    fn restore_by_index() {
        let mut originator = Originator::new();
        let mut caretaker = Caretaker::new();
        for state in ["State #1", "State #2", "State #3"] {
            originator.set_state(state);
            caretaker.add(originator.save());
        }
        originator.set_state("State #4");

        originator.restore(caretaker.get(0).unwrap());
        assert_eq!(originator.state(), "State #1");
        originator.restore(caretaker.get(1).unwrap());
        assert_eq!(originator.state(), "State #2");
        assert!(caretaker.get(3).is_none());
    }

    #[test]
    fn undo_walks_back() {
        let mut originator = Originator::new();
        let mut caretaker = Caretaker::new();
        originator.set_state("draft");
        caretaker.add(originator.save());
        originator.set_state("final");

        assert!(caretaker.undo(&mut originator));
        assert_eq!(originator.state(), "draft");
        assert!(!caretaker.undo(&mut originator));
        assert_eq!(originator.state(), "draft");
        assert!(caretaker.is_empty());
    }
}
