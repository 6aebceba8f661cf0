//! A request travels along a chain until some handler accepts it.

pub trait Handler {
    fn set_next(&mut self, next: Box<dyn Handler>);
    fn next(&self) -> Option<&dyn Handler>;
    /// Whether this handler processes `request` itself.
    fn accepts(&self, request: &str) -> bool;
    fn name(&self) -> &str;

    /// The message of the first handler in the chain accepting `request`,
    /// `None` if the whole chain declines it.
    fn handle(&self, request: &str) -> Option<String> {
        if self.accepts(request) {
            return Some(format!("Handler {} handled request {request}", self.name()));
        }
        self.next()?.handle(request)
    }
}

/// Accepts exactly one request kind.
pub struct KindHandler {
    kind: String,
    next: Option<Box<dyn Handler>>,
}

impl KindHandler {
    pub fn new(kind: impl Into<String>) -> Self {
        KindHandler {
            kind: kind.into(),
            next: None,
        }
    }
}

impl Handler for KindHandler {
    fn set_next(&mut self, next: Box<dyn Handler>) {
        self.next = Some(next);
    }

    fn next(&self) -> Option<&dyn Handler> {
        self.next.as_deref()
    }

    fn accepts(&self, request: &str) -> bool {
        request == self.kind
    }

    fn name(&self) -> &str {
        &self.kind
    }
}

/// Links one handler per kind in order: the first kind heads the chain.
///
/// # Panics
/// If `kinds` is empty.
pub fn chain(kinds: &[&str]) -> Box<dyn Handler> {
    let Some((last, rest)) = kinds.split_last() else {
        panic!("a chain needs at least one handler");
    };
    rest.iter().rev().fold(Box::new(KindHandler::new(*last)), |head, kind| {
        let mut handler = KindHandler::new(*kind);
        handler.set_next(head);
        Box::new(handler)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_request_finds_its_handler() {
        let head = chain(&["A", "B", "C"]);
        assert_eq!(head.handle("A").as_deref(), Some("Handler A handled request A"));
        assert_eq!(head.handle("C").as_deref(), Some("Handler C handled request C"));
    }

    #[test]
    fn unhandled_request_falls_off_the_end() {
        let head = chain(&["A", "B", "C"]);
        assert_eq!(head.handle("D"), None);
    }

    #[test]
    fn chain_order_is_preserved() {
        let head = chain(&["A", "B"]);
        assert_eq!(head.name(), "A");
        assert_eq!(head.next().map(|h| h.name()), Some("B"));
        assert!(head.next().and_then(|h| h.next()).is_none());
    }
}
