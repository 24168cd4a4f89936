use crate::core::{DeviceCategory, DeviceClassifier};
use std::collections::HashMap;

pub const DEFAULT_DEVICE_HEADER: &str = "x-device-class";

/// Reads an already-classified device hint from a single request header.
/// Unknown or missing values fall back to Normal; actual user-agent
/// detection lives upstream of this crate.
#[derive(Debug, Clone)]
pub struct HeaderClassifier {
    header_name: String,
}

impl HeaderClassifier {
    pub fn new(header_name: String) -> Self {
        Self {
            header_name: header_name.to_ascii_lowercase(),
        }
    }
}

impl Default for HeaderClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_DEVICE_HEADER.to_string())
    }
}

impl DeviceClassifier for HeaderClassifier {
    fn classify(&self, headers: &HashMap<String, String>) -> DeviceCategory {
        let hint = headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(&self.header_name))
            .map(|(_, value)| value.trim().to_ascii_lowercase());

        match hint.as_deref() {
            Some("mobile") => DeviceCategory::Mobile,
            Some("tablet") => DeviceCategory::Tablet,
            _ => DeviceCategory::Normal,
        }
    }
}

/// Always returns the same category; used by the CLI and in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClassifier {
    device: DeviceCategory,
}

impl FixedClassifier {
    pub fn new(device: DeviceCategory) -> Self {
        Self { device }
    }
}

impl DeviceClassifier for FixedClassifier {
    fn classify(&self, _headers: &HashMap<String, String>) -> DeviceCategory {
        self.device
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_mobile_hint() {
        let classifier = HeaderClassifier::default();
        let h = headers(&[("x-device-class", "mobile")]);
        assert_eq!(classifier.classify(&h), DeviceCategory::Mobile);
    }

    #[test]
    fn test_tablet_hint_case_insensitive() {
        let classifier = HeaderClassifier::default();
        let h = headers(&[("X-Device-Class", "Tablet")]);
        assert_eq!(classifier.classify(&h), DeviceCategory::Tablet);
    }

    #[test]
    fn test_missing_hint_falls_back_to_normal() {
        let classifier = HeaderClassifier::default();
        assert_eq!(classifier.classify(&headers(&[])), DeviceCategory::Normal);
    }

    #[test]
    fn test_unknown_hint_falls_back_to_normal() {
        let classifier = HeaderClassifier::default();
        let h = headers(&[("x-device-class", "watch")]);
        assert_eq!(classifier.classify(&h), DeviceCategory::Normal);
    }
}
