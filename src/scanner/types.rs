/// Violations collected while walking one tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// Full paths of violating files, in the order they were encountered.
    pub violations: Vec<String>,
}

impl ScanResult {
    pub fn record_violation(&mut self, full_path: &str) {
        self.violations.push(full_path.to_string());
    }

    #[must_use]
    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}
