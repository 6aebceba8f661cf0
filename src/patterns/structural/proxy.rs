//! A proxy that creates its subject lazily, checks access before each request
//! and logs every request it lets through.

pub trait Subject {
    fn request(&mut self) -> String;
}

#[derive(Debug)]
pub struct RealSubject {
    handled: usize,
}

impl RealSubject {
    pub fn new() -> Self {
        RealSubject { handled: 0 }
    }
}

impl Subject for RealSubject {
    fn request(&mut self) -> String {
        self.handled += 1;
        format!("RealSubject: handling request #{}", self.handled)
    }
}

#[derive(Debug)]
pub struct Proxy {
    subject: Option<RealSubject>,
    granted: bool,
    log: Vec<String>,
}

impl Proxy {
    pub fn new(granted: bool) -> Self {
        Proxy {
            subject: None,
            granted,
            log: Vec::new(),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.subject.is_some()
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }

    fn check_access(&mut self) -> bool {
        self.log.push("Proxy: checking access".to_string());
        self.granted
    }

    fn log_access(&mut self) {
        self.log.push("Proxy: logging access".to_string());
    }
}

impl Subject for Proxy {
    fn request(&mut self) -> String {
        if !self.check_access() {
            return "Proxy: access denied".to_string();
        }
        let answer = self.subject.get_or_insert_with(RealSubject::new).request();
        self.log_access();
        answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_created_on_first_request() {
        let mut proxy = Proxy::new(true);
        assert!(!proxy.is_initialized());
        assert_eq!(proxy.request(), "RealSubject: handling request #1");
        assert!(proxy.is_initialized());
        assert_eq!(proxy.request(), "RealSubject: handling request #2");
        assert_eq!(
            proxy.log(),
            [
                "Proxy: checking access",
                "Proxy: logging access",
                "Proxy: checking access",
                "Proxy: logging access"
            ]
        );
    }

    #[test]
    fn denied_requests_never_reach_the_subject() {
        let mut proxy = Proxy::new(false);
        assert_eq!(proxy.request(), "Proxy: access denied");
        assert!(!proxy.is_initialized());
        assert_eq!(proxy.log(), ["Proxy: checking access"]);
    }
}
