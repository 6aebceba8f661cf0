//! A data-mining pipeline whose skeleton is fixed while the steps vary.
//!
//! [`DataMiner::mine`] always runs open, extract, parse, analyze, report, hook
//! and close in that order. Implementors supply the format-specific steps and
//! may override the shared ones or the hook.

pub trait DataMiner {
    fn format(&self) -> &'static str;
    fn extract(&self, source: &str) -> Vec<String>;
    /// Turns raw records into numbers; records that do not parse are dropped.
    fn parse(&self, raw: &[String]) -> Vec<f64> {
        raw.iter().filter_map(|r| r.trim().parse().ok()).collect()
    }

    fn analyze(&self, values: &[f64]) -> String {
        let total: f64 = values.iter().sum();
        let mean = if values.is_empty() { 0.0 } else { total / values.len() as f64 };
        format!("Analyzed {} values, mean {mean:.2}", values.len())
    }

    /// Runs after the report; does nothing unless overridden.
    fn hook(&self, _values: &[f64]) -> Option<String> {
        None
    }

    fn mine(&self, source: &str) -> Vec<String> {
        let mut log = vec![format!("Opening {} source", self.format())];
        let raw = self.extract(source);
        log.push(format!("Extracted {} records", raw.len()));
        let values = self.parse(&raw);
        log.push(format!("Parsed {} values", values.len()));
        log.push(self.analyze(&values));
        log.push("Sending report".to_string());
        log.extend(self.hook(&values));
        log.push(format!("Closing {} source", self.format()));
        log
    }
}

pub struct CsvMiner;

impl DataMiner for CsvMiner {
    fn format(&self) -> &'static str {
        "CSV"
    }

    fn extract(&self, source: &str) -> Vec<String> {
        source.split(',').map(str::to_string).collect()
    }
}

/// One value per line; also reports the maximum through the hook.
pub struct LineMiner;

impl DataMiner for LineMiner {
    fn format(&self) -> &'static str {
        "line"
    }

    fn extract(&self, source: &str) -> Vec<String> {
        source.lines().filter(|l| !l.trim().is_empty()).map(str::to_string).collect()
    }

    fn hook(&self, values: &[f64]) -> Option<String> {
        let max = values.iter().copied().reduce(f64::max)?;
        Some(format!("Maximum {max}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skeleton_runs_in_order() {
        assert_eq!(
            CsvMiner.mine("1,2,x,3"),
            [
                "Opening CSV source",
                "Extracted 4 records",
                "Parsed 3 values",
                "Analyzed 3 values, mean 2.00",
                "Sending report",
                "Closing CSV source",
            ]
        );
    }

    #[test]
    fn hook_override_adds_a_step() {
        let log = LineMiner.mine("4\n\n10\n1\n");
        assert_eq!(log[1], "Extracted 3 records");
        assert_eq!(log[5], "Maximum 10");
        assert_eq!(log.len(), 7);
    }

    #[test]
    fn empty_source() {
        let log = LineMiner.mine("");
        assert_eq!(log[3], "Analyzed 0 values, mean 0.00");
        assert_eq!(log.len(), 6);
    }
}
