//! A legacy service with an incompatible interface served through [`Target`].

/// What clients expect to call.
pub trait Target {
    fn request(&self) -> String;
}

pub struct StandardTarget;

impl Target for StandardTarget {
    fn request(&self) -> String {
        "Target: standard request".to_string()
    }
}

/// Returns its answer reversed, and under a different method name.
pub struct LegacyService;

impl LegacyService {
    pub fn specific_request(&self) -> String {
        "tseuqer cificeps :ecivreSycageL".to_string()
    }
}

pub struct Adapter {
    adaptee: LegacyService,
}

impl Adapter {
    pub fn new(adaptee: LegacyService) -> Self {
        Adapter { adaptee }
    }
}

impl Target for Adapter {
    fn request(&self) -> String {
        let translated: String = self.adaptee.specific_request().chars().rev().collect();
        format!("Adapter: (translated) {translated}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adapter_translates_legacy_answer() {
        let targets: Vec<Box<dyn Target>> = vec![Box::new(StandardTarget), Box::new(Adapter::new(LegacyService))];
        let answers: Vec<String> = targets.iter().map(|t| t.request()).collect();
        assert_eq!(
            answers,
            [
                "Target: standard request",
                "Adapter: (translated) LegacyService: specific request"
            ]
        );
    }
}
