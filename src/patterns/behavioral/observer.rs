//! Subscribers receive every message the subject publishes until they unsubscribe.

use std::{cell::RefCell, rc::Rc};

pub trait Observer {
    fn update(&self, message: &str);
}

/// Identifies a subscription for [`Subject::unsubscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(usize);

#[derive(Default)]
pub struct Subject {
    observers: Vec<(SubscriptionId, Rc<dyn Observer>)>,
    next_id: usize,
    message: String,
}

impl Subject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: Rc<dyn Observer>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// # Returns
    /// `false` if `id` was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(other, _)| *other != id);
        self.observers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    /// Stores `message` and notifies every subscriber in subscription order.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.notify();
    }

    pub fn notify(&self) {
        for (_, observer) in &self.observers {
            observer.update(&self.message);
        }
    }
}

/// Records every message it receives, prefixed with its name.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    name: String,
    received: RefCell<Vec<String>>,
}

impl RecordingObserver {
    pub fn new(name: impl Into<String>) -> Self {
        RecordingObserver {
            name: name.into(),
            received: RefCell::new(Vec::new()),
        }
    }

    pub fn received(&self) -> Vec<String> {
        self.received.borrow().clone()
    }
}

impl Observer for RecordingObserver {
    fn update(&self, message: &str) {
        self.received
            .borrow_mut()
            .push(format!("Observer {} got: {message}", self.name));
    }
}
